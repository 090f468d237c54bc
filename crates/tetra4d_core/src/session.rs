//! Session state: score, difficulty and play phase
//!
//! A `Session` is created at new-game time, mutated by the gravity engine
//! and reset on restart. It also owns the gravity cadence computation.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Deserialize};

/// Points awarded per cleared floor
pub const SCORE_PER_FLOOR: u32 = 100;

/// Gravity interval per difficulty step, in milliseconds
pub const BASE_INTERVAL_MS: u64 = 500;

/// The gravity interval never drops below this
pub const MIN_INTERVAL_MS: u64 = 50;

/// Gravity speed selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, slowest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Index 0..=2
    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// The next difficulty, wrapping from Hard back to Easy
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Base gravity interval before the score bonus
    pub fn base_interval_ms(self) -> u64 {
        BASE_INTERVAL_MS * (3 - self.index() as u64)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Difficulty::ALL
            .get(value as usize)
            .copied()
            .ok_or(DifficultyError { value })
    }
}

/// A difficulty index outside 0..=2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyError {
    value: u8,
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid difficulty index {} (expected 0-2)", self.value)
    }
}

impl std::error::Error for DifficultyError {}

/// Play phase of a session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No game running (menu)
    #[default]
    Idle,
    /// A game is in progress
    Playing,
    /// The last spawn was blocked
    GameOver,
}

/// Score, difficulty and play/over flags
#[derive(Clone, Debug, Default)]
pub struct Session {
    score: u32,
    difficulty: Difficulty,
    phase: Phase,
}

impl Session {
    /// Create an idle session
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            score: 0,
            difficulty,
            phase: Phase::Idle,
        }
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Reset the score and enter play
    pub fn begin(&mut self) {
        self.score = 0;
        self.phase = Phase::Playing;
    }

    /// Enter the terminal game-over phase
    pub fn end(&mut self) {
        self.phase = Phase::GameOver;
    }

    /// Award points for `floors` cleared floors, returning the points added
    pub fn award_floors(&mut self, floors: usize) -> u32 {
        let points = SCORE_PER_FLOOR * floors as u32;
        self.score += points;
        points
    }

    /// Delay until the next gravity tick
    ///
    /// `max(base(difficulty) - score / 100, MIN_INTERVAL_MS)` milliseconds.
    pub fn tick_interval(&self) -> Duration {
        let base = self.difficulty.base_interval_ms();
        let bonus = u64::from(self.score / 100);
        Duration::from_millis(base.saturating_sub(bonus).max(MIN_INTERVAL_MS))
    }
}
