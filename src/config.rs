//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`T4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use tetra4d_core::Difficulty;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Game configuration
    #[serde(default)]
    pub game: GameConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Headless demo configuration
    #[serde(default)]
    pub demo: DemoConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`T4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // T4D_GAME__DIFFICULTY=hard -> game.difficulty = "hard"
        figment = figment.merge(Env::prefixed("T4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Load configuration, falling back to defaults on error
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the spawn sequence
    pub seed: u64,
    /// Starting difficulty (easy, medium, hard)
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0x7e7a,
            difficulty: Difficulty::Easy,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Degrees per arrow key press
    pub rotate_step: f32,
    /// Projection scale
    pub scale: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rotate_step: 5.0,
            scale: 50.0,
        }
    }
}

/// Headless demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Stop after this many gravity ticks even if the game is still running
    pub max_ticks: u32,
    /// Sleep for the gravity interval between ticks
    pub realtime: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            max_ticks: 2000,
            realtime: false,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.game.difficulty, Difficulty::Easy);
        assert_eq!(config.camera.rotate_step, 5.0);
        assert_eq!(config.camera.scale, 50.0);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("difficulty = \"easy\""));
        assert!(toml.contains("rotate_step"));
        assert!(toml.contains("max_ticks"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[game]\ndifficulty = \"hard\"\n").unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        assert_eq!(config.game.seed, GameConfig::default().seed);
        assert_eq!(config.camera.scale, 50.0);
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\ndifficulty = \"nightmare\"\n");
        assert!(result.is_err());
    }
}
