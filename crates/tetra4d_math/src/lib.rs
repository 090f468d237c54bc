//! 4D Lattice Mathematics
//!
//! This crate provides the integer vector, axis and rotation-plane types
//! used by the TetraTris 4D block engine.
//!
//! ## Core Types
//!
//! - [`IVec4`] - Integer 4D vector with x, y, z, w components
//! - [`Axis`] - One of the four coordinate axes
//! - [`RotationPlane`] - A coordinate plane a piece can rotate in
//!
//! ## Tables
//!
//! - [`lattice::COLUMNS`] - The 8 columns of the 2x2x2 footprint
//! - [`lattice::CORNER_OFFSETS`] - The 16 corner offsets of a unit hypercube

mod ivec4;
mod plane;
pub mod lattice;

pub use ivec4::{IVec4, Axis};
pub use plane::RotationPlane;
