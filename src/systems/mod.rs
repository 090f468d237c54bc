//! Application systems
//!
//! Modular systems kept out of main.rs for testability.

mod simulation;

pub use simulation::{SimulationResult, SimulationSystem};
