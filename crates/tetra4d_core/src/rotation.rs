//! Discrete quarter-turns on the two-position lattice
//!
//! Every spatial coordinate of a piece is either -1 or +1, and every w
//! coordinate is one of the two floors of the piece frame. A quarter-turn in
//! a plane is therefore a cyclic permutation of the four positions
//! `(a, b) -> (a, -b) -> (-a, -b) -> (-a, b)`, done by flipping one
//! coordinate by 2 instead of multiplying by a rotation matrix.

use tetra4d_math::RotationPlane;

use crate::{ActivePiece, Board, Cell, FLOOR_W, STEP};

/// Rotate `cells` a quarter-turn in `plane`
///
/// For the YW plane the w component is read relative to the frame centre
/// `anchor + 1`, so the two frame floors map to -1 and +1.
pub fn rotate_cells(cells: &mut [Cell], plane: RotationPlane, anchor: i32) {
    let (first, second) = plane.axes();
    let centre = if plane.touches_w() { anchor + 1 } else { 0 };

    for cell in cells.iter_mut() {
        let a = cell.get(first);
        let b = cell.get(second) - centre;

        if a * b > 0 {
            *cell.get_mut(second) += if b > 0 { -STEP } else { STEP };
        } else {
            *cell.get_mut(first) += if a > 0 { -STEP } else { STEP };
        }
    }
}

impl ActivePiece {
    /// Rotate the piece in place, ignoring the rest of the board
    pub fn rotate(&mut self, plane: RotationPlane) {
        let anchor = self.anchor();
        let mut cells = self.cells().to_vec();
        rotate_cells(&mut cells, plane, anchor);
        self.replace_cells(cells);
    }
}

/// Outcome of a rotation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateResult {
    /// The piece turned
    Rotated,
    /// Turning would have overlapped the stack or dipped below the floor;
    /// the piece is unchanged
    Obstructed,
    /// No piece is falling
    NoPiece,
}

impl Board {
    /// Rotate the falling piece a quarter-turn in `plane`
    ///
    /// The lattice is closed under rotation, so a turn only fails when it
    /// would land a cell inside the settled stack or, in the YW plane, below
    /// [`FLOOR_W`] once the piece frame has sunk past the floor.
    pub fn rotate_active(&mut self, plane: RotationPlane) -> RotateResult {
        let Some(piece) = self.active() else {
            return RotateResult::NoPiece;
        };

        let mut turned = piece.clone();
        turned.rotate(plane);
        let below_floor = turned.cells().iter().any(|c| c.w < FLOOR_W);
        if below_floor || self.overlaps_settled(turned.cells()) {
            log::debug!("Rotation in {:?} obstructed", plane);
            return RotateResult::Obstructed;
        }

        if let Some(active) = self.active_mut() {
            *active = turned;
        }
        RotateResult::Rotated
    }
}
