//! Board state: the settled stack and the falling piece
//!
//! The board owns two disjoint cell collections. Settled cells are kept in a
//! `BTreeSet` so membership queries are cheap and iteration order is stable.

use std::collections::BTreeSet;

use tetra4d_math::lattice::{self, COLUMNS};

use crate::{ActivePiece, Cell, PieceTemplate, STEP};

/// Lowest floor a cell may occupy
pub const FLOOR_W: i32 = 5;

/// Result of placing a freshly instantiated piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnResult {
    /// The piece is now falling
    Placed,
    /// The piece collided immediately; the board is unchanged
    Blocked,
}

/// The settled stack plus the (optional) falling piece
#[derive(Clone, Debug, Default)]
pub struct Board {
    settled: BTreeSet<Cell>,
    active: Option<ActivePiece>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with a pre-built settled stack
    pub fn with_settled<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        Self {
            settled: cells.into_iter().collect(),
            active: None,
        }
    }

    /// The settled stack
    pub fn settled(&self) -> &BTreeSet<Cell> {
        &self.settled
    }

    /// The falling piece, if any
    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut ActivePiece> {
        self.active.as_mut()
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }

    /// Cells of the falling piece (empty when none is falling)
    pub fn active_cells(&self) -> &[Cell] {
        self.active.as_ref().map(|p| p.cells()).unwrap_or(&[])
    }

    /// Whether a piece is falling
    #[inline]
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether `cell` is part of the settled stack
    #[inline]
    pub fn is_settled(&self, cell: &Cell) -> bool {
        self.settled.contains(cell)
    }

    /// Check whether `cells` can not move one floor down
    ///
    /// True if any cell, moved down one step, would pass below [`FLOOR_W`]
    /// or land on a settled cell. Pure query: nothing is mutated.
    pub fn will_collide(&self, cells: &[Cell]) -> bool {
        cells.iter().any(|cell| {
            let below = cell.offset_w(-STEP);
            below.w < FLOOR_W || self.settled.contains(&below)
        })
    }

    /// Whether any of `cells` coincides with a settled cell
    pub fn overlaps_settled(&self, cells: &[Cell]) -> bool {
        cells.iter().any(|cell| self.settled.contains(cell))
    }

    /// Instantiate `template` as the falling piece
    ///
    /// Returns [`SpawnResult::Blocked`] without touching the board if the new
    /// piece would collide straight away.
    pub fn spawn(&mut self, template: &PieceTemplate) -> SpawnResult {
        let piece = template.instantiate();
        if self.will_collide(piece.cells()) || self.overlaps_settled(piece.cells()) {
            return SpawnResult::Blocked;
        }
        self.active = Some(piece);
        SpawnResult::Placed
    }

    /// Move every active cell into the settled stack and drop the active piece
    pub fn merge(&mut self) {
        if let Some(piece) = self.active.take() {
            self.settled.extend(piece.into_cells());
        }
    }

    /// Floors holding all 8 columns, lowest first
    pub fn full_floors(&self) -> Vec<i32> {
        let floors: BTreeSet<i32> = self.settled.iter().map(|c| c.w).collect();
        floors
            .into_iter()
            .filter(|&w| {
                COLUMNS
                    .iter()
                    .all(|&column| self.settled.contains(&lattice::cell_at(column, w)))
            })
            .collect()
    }

    /// Remove floor `w` and lower everything above it by one step
    pub fn remove_floor(&mut self, w: i32) {
        self.settled = std::mem::take(&mut self.settled)
            .into_iter()
            .filter(|c| c.w != w)
            .map(|c| if c.w > w { c.offset_w(-STEP) } else { c })
            .collect();
    }

    /// Remove every full floor and compact the stack
    ///
    /// Full floors are found before anything moves, then each surviving cell
    /// drops one step per cleared floor beneath it. Returns the cleared
    /// floors, lowest first.
    pub fn clear_full_floors(&mut self) -> Vec<i32> {
        let cleared = self.full_floors();
        if cleared.is_empty() {
            return cleared;
        }

        self.settled = std::mem::take(&mut self.settled)
            .into_iter()
            .filter(|c| !cleared.contains(&c.w))
            .map(|c| {
                let below = cleared.iter().filter(|&&f| f < c.w).count() as i32;
                c.offset_w(-STEP * below)
            })
            .collect();

        cleared
    }

    /// Iterate over every cell on the board, settled first
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.settled.iter().chain(self.active_cells().iter())
    }

    /// Empty the board
    pub fn clear(&mut self) {
        self.settled.clear();
        self.active = None;
    }
}
