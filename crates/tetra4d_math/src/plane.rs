//! Rotation planes for the block lattice
//!
//! In 4D, rotations happen in planes rather than around axes.
//! The game exposes four of the six planes: XY, XZ, YZ and YW.

use serde::{Serialize, Deserialize};
use crate::Axis;

/// The rotation planes a falling piece can turn in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane
    XY,
    /// XZ plane
    XZ,
    /// YZ plane
    YZ,
    /// YW plane - tips the piece along the height axis
    YW,
}

impl RotationPlane {
    /// Every supported plane
    pub const ALL: [RotationPlane; 4] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::YZ,
        RotationPlane::YW,
    ];

    /// The (first, second) axis pair spanning this plane
    #[inline]
    pub fn axes(self) -> (Axis, Axis) {
        match self {
            RotationPlane::XY => (Axis::X, Axis::Y),
            RotationPlane::XZ => (Axis::X, Axis::Z),
            RotationPlane::YZ => (Axis::Y, Axis::Z),
            RotationPlane::YW => (Axis::Y, Axis::W),
        }
    }

    /// Whether the plane involves the height axis
    #[inline]
    pub fn touches_w(self) -> bool {
        self.axes().1 == Axis::W
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes() {
        assert_eq!(RotationPlane::XY.axes(), (Axis::X, Axis::Y));
        assert_eq!(RotationPlane::XZ.axes(), (Axis::X, Axis::Z));
        assert_eq!(RotationPlane::YZ.axes(), (Axis::Y, Axis::Z));
        assert_eq!(RotationPlane::YW.axes(), (Axis::Y, Axis::W));
    }

    #[test]
    fn test_only_yw_touches_w() {
        let touching: Vec<_> = RotationPlane::ALL
            .iter()
            .filter(|p| p.touches_w())
            .collect();
        assert_eq!(touching, vec![&RotationPlane::YW]);
    }
}
