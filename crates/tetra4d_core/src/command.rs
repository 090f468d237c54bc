//! Discrete commands accepted by the engine

use serde::{Serialize, Deserialize};
use tetra4d_math::RotationPlane;

/// A command from the timer or input layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// One gravity step
    Tick,
    /// Quarter-turn the falling piece
    Rotate(RotationPlane),
    /// Drop the falling piece until it lands
    HardDrop,
    /// Reset and start playing
    StartNewGame,
    /// Start over once the game has ended
    RestartAfterGameOver,
}
