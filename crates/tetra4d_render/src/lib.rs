//! TetraTris wireframe rendering support
//!
//! This crate turns board state into drawable geometry. It does not own a
//! window or a GPU context; the host draws the projected segments however it
//! likes.
//!
//! ## Key Components
//!
//! - [`wireframe::Wireframe`] - Hull points and axis-aligned edges of the settled stack and falling piece
//! - [`camera::OrbitCamera`] - Pitch/yaw orbit projection from 4D points to 2D

pub mod camera;
pub mod wireframe;

pub use camera::OrbitCamera;
pub use wireframe::{Point4, Wireframe};
