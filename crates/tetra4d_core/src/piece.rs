//! The falling piece

use crate::{Cell, PieceKind, STEP};

/// The currently falling piece
///
/// `anchor` is the floor height of the piece's own frame. It starts at the
/// spawn height and drops with every descent; rotations against the w axis
/// are measured relative to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivePiece {
    kind: PieceKind,
    cells: Vec<Cell>,
    anchor: i32,
}

impl ActivePiece {
    /// Create a piece from absolute cells
    pub fn new(kind: PieceKind, cells: Vec<Cell>, anchor: i32) -> Self {
        Self { kind, cells, anchor }
    }

    /// The template this piece was made from
    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Absolute cells of the piece
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Floor height of the piece frame
    #[inline]
    pub fn anchor(&self) -> i32 {
        self.anchor
    }

    /// Move every cell, and the anchor, one floor down
    pub fn descend(&mut self) {
        for cell in &mut self.cells {
            cell.w -= STEP;
        }
        self.anchor -= STEP;
    }

    pub(crate) fn replace_cells(&mut self, cells: Vec<Cell>) {
        self.cells = cells;
    }

    pub(crate) fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}
