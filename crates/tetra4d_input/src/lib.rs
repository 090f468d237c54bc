//! TetraTris input handling
//!
//! Maps raw keyboard events to the discrete actions the game understands.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
