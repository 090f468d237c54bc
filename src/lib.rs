//! TetraTris application layer
//!
//! Configuration, the front-end menu and the simulation system that drives
//! the block engine from `tetra4d_core`.

pub mod config;
pub mod menu;
pub mod systems;
