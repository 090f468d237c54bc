//! Surface extraction: unit hypercubes to a point/edge wireframe
//!
//! Each cell expands to its 16 corners. Within one shape a corner produced an
//! even number of times is interior (shared by neighbouring cubes) and is
//! dropped; the odd-count corners are the hull. Edges join hull corners of the
//! same shape that differ in exactly one coordinate.
//!
//! Corners are merged across shapes but never cancelled, so a falling piece
//! resting against the stack shows a seam where the two meet.

use std::collections::{HashMap, HashSet};

use tetra4d_core::{Board, Cell};
use tetra4d_math::lattice::CORNER_OFFSETS;
use tetra4d_math::IVec4;

use crate::camera::OrbitCamera;

/// A wireframe corner point (even coordinates)
pub type Point4 = IVec4;

/// Deduplicated points and index-pair edges ready for projection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wireframe {
    points: Vec<Point4>,
    edges: Vec<(usize, usize)>,
}

impl Wireframe {
    /// Create an empty wireframe
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the wireframe of a sequence of shapes
    ///
    /// Interior corners cancel only within a shape.
    pub fn extract<'a, I>(shapes: I) -> Self
    where
        I: IntoIterator<Item = &'a [Cell]>,
    {
        let mut wireframe = Self::new();
        let mut index_of: HashMap<Point4, usize> = HashMap::new();
        let mut seen_edges: HashSet<(usize, usize)> = HashSet::new();

        for cells in shapes {
            let hull = hull_corners(cells);

            let indices: Vec<usize> = hull
                .iter()
                .map(|&point| {
                    *index_of.entry(point).or_insert_with(|| {
                        wireframe.points.push(point);
                        wireframe.points.len() - 1
                    })
                })
                .collect();

            for i in 0..hull.len() {
                for j in (i + 1)..hull.len() {
                    if hull[i].differing_axes(&hull[j]) != 1 {
                        continue;
                    }
                    let edge = (indices[i].min(indices[j]), indices[i].max(indices[j]));
                    if seen_edges.insert(edge) {
                        wireframe.edges.push(edge);
                    }
                }
            }
        }

        wireframe
    }

    /// Build the wireframe of a board: the settled stack, then the falling piece
    pub fn from_board(board: &Board) -> Self {
        let settled: Vec<Cell> = board.settled().iter().copied().collect();
        let wireframe = Self::extract([settled.as_slice(), board.active_cells()]);
        log::trace!(
            "Wireframe: {} points, {} edges",
            wireframe.point_count(),
            wireframe.edge_count()
        );
        wireframe
    }

    /// The 4D points
    pub fn points(&self) -> &[Point4] {
        &self.points
    }

    /// Edges as index pairs into [`Wireframe::points`], lower index first
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Raw point data for upload to a vertex buffer
    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    /// Project every edge to a 2D line segment
    pub fn segments(&self, camera: &OrbitCamera) -> Vec<[[f32; 2]; 2]> {
        let projected: Vec<[f32; 2]> = self.points.iter().map(|&p| camera.project(p)).collect();
        self.edges
            .iter()
            .map(|&(a, b)| [projected[a], projected[b]])
            .collect()
    }
}

/// Odd-count corners of one shape, in first-seen order
fn hull_corners(cells: &[Cell]) -> Vec<Point4> {
    let mut counts: HashMap<Point4, u32> = HashMap::new();
    let mut order: Vec<Point4> = Vec::new();

    for &cell in cells {
        for offset in CORNER_OFFSETS {
            let count = counts.entry(cell + offset).or_insert(0);
            if *count == 0 {
                order.push(cell + offset);
            }
            *count += 1;
        }
    }

    order.retain(|p| counts[p] % 2 == 1);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn point_set(w: &Wireframe) -> BTreeSet<Point4> {
        w.points().iter().copied().collect()
    }

    fn edge_set(w: &Wireframe) -> BTreeSet<(Point4, Point4)> {
        w.edges()
            .iter()
            .map(|&(a, b)| {
                let (p, q) = (w.points()[a], w.points()[b]);
                (p.min(q), p.max(q))
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let w = Wireframe::extract(Vec::<&[Cell]>::new());
        assert!(w.is_empty());
        assert_eq!(w.edge_count(), 0);
    }

    #[test]
    fn test_single_cube_is_tesseract() {
        let cells = [IVec4::new(1, 1, 1, 33)];
        let w = Wireframe::extract([&cells[..]]);
        assert_eq!(w.point_count(), 16);
        assert_eq!(w.edge_count(), 32);
        for &(a, b) in w.edges() {
            assert_eq!(w.points()[a].differing_axes(&w.points()[b]), 1);
        }
    }

    #[test]
    fn test_domino_cancels_shared_face() {
        let cells = [IVec4::new(1, 1, 1, 33), IVec4::new(-1, 1, 1, 33)];
        let w = Wireframe::extract([&cells[..]]);
        assert_eq!(w.point_count(), 16);
        assert_eq!(w.edge_count(), 32);
        assert!(w.points().iter().all(|p| p.x == 2 || p.x == -2));
    }

    #[test]
    fn test_corner_keeps_concave_corner() {
        let cells = [
            IVec4::new(1, 1, 1, 33),
            IVec4::new(-1, 1, 1, 33),
            IVec4::new(1, -1, 1, 33),
        ];
        let w = Wireframe::extract([&cells[..]]);
        assert_eq!(w.point_count(), 24);
        assert_eq!(w.edge_count(), 48);
        // The inner corner of the L is shared by three cubes and survives
        assert!(point_set(&w).contains(&IVec4::new(0, 0, 0, 32)));
        assert!(!point_set(&w).contains(&IVec4::new(2, 0, 0, 32)));
    }

    #[test]
    fn test_shapes_merge_points_without_cancelling() {
        let settled = [IVec4::new(1, 1, 1, 5)];
        let active = [IVec4::new(1, 1, 1, 7)];
        let w = Wireframe::extract([&settled[..], &active[..]]);
        // 8 corners at w = 6 shared, 12 edges on that face shared
        assert_eq!(w.point_count(), 24);
        assert_eq!(w.edge_count(), 52);

        let fused = [IVec4::new(1, 1, 1, 5), IVec4::new(1, 1, 1, 7)];
        let w = Wireframe::extract([&fused[..]]);
        assert_eq!(w.point_count(), 16);
        assert_eq!(w.edge_count(), 32);
    }

    #[test]
    fn test_order_independent() {
        let cells = vec![
            IVec4::new(1, 1, 1, 7),
            IVec4::new(-1, 1, 1, 7),
            IVec4::new(1, -1, 1, 7),
            IVec4::new(1, -1, -1, 9),
            IVec4::new(1, 1, 1, 5),
        ];
        let reference = Wireframe::extract([cells.as_slice()]);

        let mut reversed = cells.clone();
        reversed.reverse();
        let mut rotated = cells.clone();
        rotated.rotate_left(2);

        for permuted in [reversed, rotated] {
            let w = Wireframe::extract([permuted.as_slice()]);
            assert_eq!(point_set(&w), point_set(&reference));
            assert_eq!(edge_set(&w), edge_set(&reference));
            assert_eq!(w.point_count(), reference.point_count());
            assert_eq!(w.edge_count(), reference.edge_count());
        }
    }

    #[test]
    fn test_idempotent() {
        let cells = [IVec4::new(-1, -1, 1, 11), IVec4::new(-1, -1, 1, 13)];
        let a = Wireframe::extract([&cells[..]]);
        let b = Wireframe::extract([&cells[..]]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_board_includes_active_piece() {
        let mut board = Board::with_settled([IVec4::new(-1, -1, -1, 5)]);
        assert_eq!(Wireframe::from_board(&board).point_count(), 16);

        board.spawn(tetra4d_core::catalog::template(tetra4d_core::PieceKind::Cube));
        assert_eq!(Wireframe::from_board(&board).point_count(), 32);
    }

    #[test]
    fn test_point_bytes() {
        let cells = [IVec4::new(1, 1, 1, 33)];
        let w = Wireframe::extract([&cells[..]]);
        assert_eq!(w.point_bytes().len(), 16 * 4 * std::mem::size_of::<i32>());
    }

    #[test]
    fn test_segments_match_edges() {
        let cells = [IVec4::new(1, 1, 1, 9)];
        let w = Wireframe::extract([&cells[..]]);
        let segments = w.segments(&OrbitCamera::new());
        assert_eq!(segments.len(), w.edge_count());
    }
}
