//! Integer 4D vector type
//!
//! Lattice cells and wireframe corner points are both integer 4-tuples.
//! Cells sit on odd coordinates, corners on even ones.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// One of the four coordinate axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    /// The height axis (ana/kata)
    W,
}

impl Axis {
    /// All four axes in component order
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];
}

/// 4D integer vector with x, y, z, w components
/// The w component is the height axis of the board
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
    Pod, Zeroable, Serialize, Deserialize,
)]
pub struct IVec4 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl IVec4 {
    /// Create a new IVec4
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    /// Read a single component
    #[inline]
    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
            Axis::W => self.w,
        }
    }

    /// Mutable access to a single component
    #[inline]
    pub fn get_mut(&mut self, axis: Axis) -> &mut i32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
            Axis::W => &mut self.w,
        }
    }

    /// Copy of this vector moved along the w axis
    #[inline]
    pub const fn offset_w(self, dw: i32) -> Self {
        Self::new(self.x, self.y, self.z, self.w + dw)
    }

    /// The (x, y, z) column this vector lies in
    #[inline]
    pub fn xyz(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Number of components in which `self` and `other` differ
    pub fn differing_axes(&self, other: &Self) -> usize {
        Axis::ALL
            .iter()
            .filter(|&&axis| self.get(axis) != other.get(axis))
            .count()
    }
}

// Operator overloads

impl std::ops::Add for IVec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}
