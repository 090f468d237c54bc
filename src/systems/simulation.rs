//! Game simulation system
//!
//! Owns the game and everything derived from it:
//! - Command dispatch from mapped input
//! - Gravity ticks
//! - Wireframe regeneration when geometry changes
//! - Camera orbit and menu navigation

use std::time::Duration;

use tetra4d_core::{Changes, Command, Game, Phase};
use tetra4d_input::InputAction;
use tetra4d_render::{OrbitCamera, Wireframe};

use crate::config::AppConfig;
use crate::menu::{MenuOutcome, MenuState};

/// Result of a simulation update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationResult {
    /// What changed in the game state
    pub changes: Changes,
    /// Whether the view needs redrawing (geometry, camera, menu or score)
    pub redraw: bool,
    /// Whether the user asked to quit
    pub exit: bool,
}

impl SimulationResult {
    fn from_changes(changes: Changes) -> Self {
        Self {
            changes,
            redraw: !changes.is_empty(),
            exit: false,
        }
    }

    fn redraw() -> Self {
        Self::redraw_if(true)
    }

    fn redraw_if(redraw: bool) -> Self {
        Self {
            redraw,
            ..Self::default()
        }
    }
}

/// Drives a [`Game`] and keeps its wireframe and view state current
pub struct SimulationSystem {
    game: Game,
    wireframe: Wireframe,
    camera: OrbitCamera,
    menu: MenuState,
    rotate_step: f32,
}

impl SimulationSystem {
    /// Create a simulation from configuration
    pub fn new(config: &AppConfig) -> Self {
        let game = Game::new(config.game.seed).with_difficulty(config.game.difficulty);
        Self::with_game(game, config)
    }

    /// Create a simulation around a prepared game
    pub fn with_game(game: Game, config: &AppConfig) -> Self {
        let wireframe = Wireframe::from_board(game.board());
        Self {
            game,
            wireframe,
            camera: OrbitCamera::new().with_scale(config.camera.scale),
            menu: MenuState::new(),
            rotate_step: config.camera.rotate_step,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn wireframe(&self) -> &Wireframe {
        &self.wireframe
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Whether a game is in progress (selects the in-game key meanings)
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.game.phase() == Phase::Playing
    }

    /// Time until the next gravity tick
    pub fn tick_interval(&self) -> Duration {
        self.game.session().tick_interval()
    }

    /// Projected wireframe segments for drawing
    pub fn segments(&self) -> Vec<[[f32; 2]; 2]> {
        self.wireframe.segments(&self.camera)
    }

    /// Run one gravity tick
    pub fn tick(&mut self) -> SimulationResult {
        self.apply(Command::Tick)
    }

    /// Apply an engine command and refresh derived state
    pub fn apply(&mut self, command: Command) -> SimulationResult {
        let changes = self.game.apply(command);

        if changes.contains(Changes::GEOMETRY) {
            self.wireframe = Wireframe::from_board(self.game.board());
        }

        SimulationResult::from_changes(changes)
    }

    /// Handle one mapped input action
    pub fn handle_action(&mut self, action: InputAction) -> SimulationResult {
        match action {
            InputAction::Game(command) => self.apply(command),
            InputAction::OrbitCamera { pitch, yaw } => {
                if !self.is_playing() {
                    return SimulationResult::default();
                }
                self.camera.orbit(
                    f32::from(pitch) * self.rotate_step,
                    f32::from(yaw) * self.rotate_step,
                );
                SimulationResult::redraw()
            }
            InputAction::MenuUp => {
                let moved = self.menu.move_up();
                SimulationResult::redraw_if(moved)
            }
            InputAction::MenuDown => {
                let moved = self.menu.move_down();
                SimulationResult::redraw_if(moved)
            }
            InputAction::Confirm => self.confirm(),
            InputAction::Exit => SimulationResult {
                exit: true,
                ..SimulationResult::default()
            },
        }
    }

    fn confirm(&mut self) -> SimulationResult {
        if self.is_playing() {
            return SimulationResult::default();
        }

        match self.menu.confirm() {
            MenuOutcome::Redraw => SimulationResult::redraw(),
            MenuOutcome::StartGame => {
                self.camera.reset();
                self.apply(Command::StartNewGame)
            }
            MenuOutcome::CycleDifficulty => {
                let difficulty = self.game.session().difficulty().next();
                self.game.set_difficulty(difficulty);
                log::debug!("Difficulty set to {}", difficulty.label());
                SimulationResult::redraw()
            }
            MenuOutcome::Exit => SimulationResult {
                exit: true,
                ..SimulationResult::default()
            },
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Screen;
    use tetra4d_core::{Difficulty, RotationPlane};

    fn started() -> SimulationSystem {
        let mut sim = SimulationSystem::default();
        sim.handle_action(InputAction::Confirm);
        sim
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert!(!sim.is_playing());
        assert!(sim.wireframe().is_empty());
        assert_eq!(sim.menu().screen(), Screen::Menu);
    }

    #[test]
    fn test_confirm_on_play_starts_game() {
        let sim = started();
        assert!(sim.is_playing());
        assert_eq!(sim.menu().screen(), Screen::Game);
        assert!(!sim.wireframe().is_empty());
    }

    #[test]
    fn test_geometry_change_regenerates_wireframe() {
        let mut sim = started();
        let before = sim.wireframe().clone();

        let result = sim.tick();
        assert!(result.changes.contains(Changes::GEOMETRY));
        assert_ne!(sim.wireframe(), &before);
    }

    #[test]
    fn test_obstructed_rotation_leaves_wireframe() {
        let mut sim = SimulationSystem::default();
        let before = sim.wireframe().clone();
        // Not playing: the rotation is ignored
        let result = sim.handle_action(InputAction::Game(Command::Rotate(RotationPlane::XY)));
        assert_eq!(result.changes, Changes::NONE);
        assert!(!result.redraw);
        assert_eq!(sim.wireframe(), &before);
    }

    #[test]
    fn test_orbit_only_while_playing() {
        let mut sim = SimulationSystem::default();
        sim.handle_action(InputAction::OrbitCamera { pitch: 1, yaw: 0 });
        assert_eq!(sim.camera().pitch, 0.0);

        let mut sim = started();
        let result = sim.handle_action(InputAction::OrbitCamera { pitch: 1, yaw: -1 });
        assert!(result.redraw);
        assert_eq!(sim.camera().pitch, 5.0);
        assert_eq!(sim.camera().yaw, -5.0);
    }

    #[test]
    fn test_menu_navigation_redraws_only_on_move() {
        let mut sim = SimulationSystem::default();
        assert!(!sim.handle_action(InputAction::MenuUp).redraw);
        assert_eq!(sim.menu().pointer(), 0);

        assert!(sim.handle_action(InputAction::MenuDown).redraw);
        assert_eq!(sim.menu().pointer(), 1);
        assert!(sim.handle_action(InputAction::MenuUp).redraw);
        assert_eq!(sim.menu().pointer(), 0);

        for _ in 0..3 {
            sim.handle_action(InputAction::MenuDown);
        }
        assert!(!sim.handle_action(InputAction::MenuDown).redraw);
        assert_eq!(sim.menu().pointer(), 3);
    }

    #[test]
    fn test_cycle_difficulty_from_menu() {
        let mut sim = SimulationSystem::default();
        sim.handle_action(InputAction::MenuDown);
        for expected in [Difficulty::Medium, Difficulty::Hard, Difficulty::Easy] {
            sim.handle_action(InputAction::Confirm);
            assert_eq!(sim.game().session().difficulty(), expected);
        }
        assert!(!sim.is_playing());
    }

    #[test]
    fn test_game_over_then_confirm_returns_to_menu() {
        let mut sim = started();
        // Every template occupies column (1, 1, 1), so repeated drops top out
        for _ in 0..64 {
            sim.handle_action(InputAction::Game(Command::HardDrop));
            sim.tick();
            if sim.game().phase() == Phase::GameOver {
                break;
            }
        }
        assert_eq!(sim.game().phase(), Phase::GameOver);
        assert!(!sim.is_playing());

        sim.handle_action(InputAction::Confirm);
        assert_eq!(sim.menu().screen(), Screen::Menu);
        assert_eq!(sim.game().phase(), Phase::GameOver);

        // Play again from the menu
        sim.handle_action(InputAction::Confirm);
        assert!(sim.is_playing());
        assert_eq!(sim.game().score(), 0);
    }

    #[test]
    fn test_exit_actions() {
        let mut sim = SimulationSystem::default();
        assert!(sim.handle_action(InputAction::Exit).exit);

        for _ in 0..3 {
            sim.handle_action(InputAction::MenuDown);
        }
        assert!(sim.handle_action(InputAction::Confirm).exit);
    }

    #[test]
    fn test_tick_interval_follows_difficulty() {
        let mut config = AppConfig::default();
        config.game.difficulty = Difficulty::Hard;
        let sim = SimulationSystem::new(&config);
        assert_eq!(sim.tick_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_segments_follow_wireframe() {
        let sim = started();
        assert_eq!(sim.segments().len(), sim.wireframe().edge_count());
    }
}
