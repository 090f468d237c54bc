//! Piece catalog and spawn distribution
//!
//! Three fixed templates exist: a single cube, a domino and a corner triple.
//! Templates store offsets relative to the spawn anchor; [`PieceTemplate::instantiate`]
//! produces a fresh [`ActivePiece`] at `w = SPAWN_ANCHOR_W`.

use rand::Rng;
use serde::{Serialize, Deserialize};
use tetra4d_math::IVec4;

use crate::{ActivePiece, Cell};

/// Height at which every new piece is anchored
pub const SPAWN_ANCHOR_W: i32 = 33;

/// The built-in piece shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// One unit hypercube
    Cube,
    /// Two cubes side by side along x
    Domino,
    /// Three cubes in an L on the xy plane
    Corner,
}

/// A fixed relative-cell layout
#[derive(Debug)]
pub struct PieceTemplate {
    /// Which shape this is
    pub kind: PieceKind,
    /// Cells relative to the spawn anchor (w offset is always 0)
    pub offsets: &'static [Cell],
}

impl PieceTemplate {
    /// Translate the template to the spawn anchor
    pub fn instantiate(&self) -> ActivePiece {
        let cells = self
            .offsets
            .iter()
            .map(|offset| offset.offset_w(SPAWN_ANCHOR_W))
            .collect();
        ActivePiece::new(self.kind, cells, SPAWN_ANCHOR_W)
    }
}

const CUBE: [Cell; 1] = [IVec4::new(1, 1, 1, 0)];
const DOMINO: [Cell; 2] = [IVec4::new(1, 1, 1, 0), IVec4::new(-1, 1, 1, 0)];
const CORNER: [Cell; 3] = [
    IVec4::new(1, 1, 1, 0),
    IVec4::new(-1, 1, 1, 0),
    IVec4::new(1, -1, 1, 0),
];

/// The ordered template list; indices are referenced by the spawn distribution
pub static TEMPLATES: [PieceTemplate; 3] = [
    PieceTemplate { kind: PieceKind::Cube, offsets: &CUBE },
    PieceTemplate { kind: PieceKind::Domino, offsets: &DOMINO },
    PieceTemplate { kind: PieceKind::Corner, offsets: &CORNER },
];

/// Get the ordered template list
pub fn templates() -> &'static [PieceTemplate] {
    &TEMPLATES
}

/// Look up the template for a piece kind
pub fn template(kind: PieceKind) -> &'static PieceTemplate {
    match kind {
        PieceKind::Cube => &TEMPLATES[0],
        PieceKind::Domino => &TEMPLATES[1],
        PieceKind::Corner => &TEMPLATES[2],
    }
}

/// Weighted multiset of template indices, 3:3:2 toward the smaller shapes
const DEFAULT_SLOTS: [usize; 8] = [0, 0, 0, 1, 1, 1, 2, 2];

/// Weighted selector over template indices
///
/// Each draw picks one slot uniformly, so a template's probability is
/// its slot count over the total.
#[derive(Clone, Copy, Debug)]
pub struct SpawnDistribution {
    slots: &'static [usize],
}

impl Default for SpawnDistribution {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnDistribution {
    /// The built-in 3:3:2 distribution
    pub const fn new() -> Self {
        Self { slots: &DEFAULT_SLOTS }
    }

    /// Number of slots assigned to a template index
    pub fn weight(&self, index: usize) -> usize {
        self.slots.iter().filter(|&&slot| slot == index).count()
    }

    /// Total number of slots
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// Draw the next template
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static PieceTemplate {
        let slot = rng.gen_range(0..self.slots.len());
        &TEMPLATES[self.slots[slot]]
    }
}
