//! Core engine for TetraTris, a falling-block puzzle on a 4D lattice
//!
//! The board is a stack of 2x2x2 floors along the w (height) axis. This crate
//! provides the engine that plays on it:
//!
//! - [`catalog`] - The three piece templates and the weighted spawn distribution
//! - [`Board`] - Settled stack, falling piece, collision queries and floor clearing
//! - [`rotation`] - Discrete quarter-turns in the XY, XZ, YZ and YW planes
//! - [`gravity`] - Ticks, hard drops, merging and scoring
//! - [`Session`] - Score, difficulty and play phase
//! - [`Game`] - Everything above behind a [`Command`] interface
//!
//! # Example
//! ```
//! use tetra4d_core::{Command, Game, Phase};
//!
//! let mut game = Game::new(7);
//! game.apply(Command::StartNewGame);
//! game.apply(Command::HardDrop);
//! assert_eq!(game.phase(), Phase::Playing);
//! assert!(!game.board().settled().is_empty());
//! ```

pub mod catalog;
mod piece;
mod board;
pub mod rotation;
pub mod gravity;
mod session;
mod changes;
mod command;
mod game;

pub use catalog::{PieceKind, PieceTemplate, SpawnDistribution};
pub use piece::ActivePiece;
pub use board::{Board, SpawnResult, FLOOR_W};
pub use rotation::RotateResult;
pub use gravity::StepOutcome;
pub use session::{Difficulty, DifficultyError, Phase, Session, SCORE_PER_FLOOR};
pub use changes::Changes;
pub use command::Command;
pub use game::Game;

// Re-export commonly used types from tetra4d_math for convenience
pub use tetra4d_math::{Axis, IVec4, RotationPlane};

/// A unit lattice position: x, y, z in {-1, 1}, w an odd floor height
pub type Cell = IVec4;

/// Distance between the two lattice positions of an axis, and between floors
pub const STEP: i32 = 2;
