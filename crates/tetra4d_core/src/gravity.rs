//! Gravity and floor clearing
//!
//! The piece life cycle is
//! `NoPiece -> Falling -> (Landed | HardDropped) -> cleared? -> NoPiece`,
//! with `GameOver` reachable from any spawn attempt. Each function here runs
//! to completion: observers never see a half-applied step.

use rand::Rng;

use crate::{Board, Changes, PieceKind, Session, SpawnDistribution, SpawnResult};

/// What a gravity operation did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new piece entered play
    Spawned(PieceKind),
    /// The piece moved down one floor and is still falling
    Fell,
    /// The piece came to rest and merged into the stack
    Landed {
        /// Floors removed by the merge, lowest first
        cleared: Vec<i32>,
    },
    /// The piece was dropped straight to its resting place
    HardDropped {
        /// Number of floors it fell
        distance: u32,
        /// Floors removed by the merge, lowest first
        cleared: Vec<i32>,
    },
    /// The new piece was blocked on spawn
    GameOver,
    /// Not playing, or nothing to drop
    Ignored,
}

impl StepOutcome {
    /// The change flags this outcome implies
    pub fn changes(&self) -> Changes {
        match self {
            StepOutcome::Spawned(_) | StepOutcome::Fell => Changes::GEOMETRY,
            StepOutcome::Landed { cleared } | StepOutcome::HardDropped { cleared, .. } => {
                if cleared.is_empty() {
                    Changes::GEOMETRY
                } else {
                    Changes::GEOMETRY | Changes::SCORE
                }
            }
            StepOutcome::GameOver => Changes::PHASE,
            StepOutcome::Ignored => Changes::NONE,
        }
    }

    /// Whether the step ended the game
    pub fn is_game_over(&self) -> bool {
        matches!(self, StepOutcome::GameOver)
    }
}

/// Draw a template and place it as the falling piece
///
/// A blocked spawn ends the session.
pub fn spawn<R: Rng + ?Sized>(
    board: &mut Board,
    session: &mut Session,
    distribution: &SpawnDistribution,
    rng: &mut R,
) -> StepOutcome {
    let template = distribution.draw(rng);
    match board.spawn(template) {
        SpawnResult::Placed => {
            log::debug!("Spawned {:?}", template.kind);
            StepOutcome::Spawned(template.kind)
        }
        SpawnResult::Blocked => {
            session.end();
            log::info!("Game over - final score {}", session.score());
            StepOutcome::GameOver
        }
    }
}

/// Advance the simulation by one gravity step
///
/// Without a falling piece this spawns one. Otherwise the piece drops one
/// floor and merges if it can fall no further. A piece that is already
/// resting (possible after a rotation) merges without moving.
pub fn tick<R: Rng + ?Sized>(
    board: &mut Board,
    session: &mut Session,
    distribution: &SpawnDistribution,
    rng: &mut R,
) -> StepOutcome {
    if !session.is_playing() {
        return StepOutcome::Ignored;
    }
    if !board.has_active() {
        return spawn(board, session, distribution, rng);
    }

    if board.will_collide(board.active_cells()) {
        return StepOutcome::Landed { cleared: settle(board, session) };
    }

    if let Some(piece) = board.active_mut() {
        piece.descend();
    }

    if board.will_collide(board.active_cells()) {
        StepOutcome::Landed { cleared: settle(board, session) }
    } else {
        StepOutcome::Fell
    }
}

/// Drop the falling piece until it rests, then merge and clear
///
/// Does not spawn; the next tick does.
pub fn hard_drop(board: &mut Board, session: &mut Session) -> StepOutcome {
    if !session.is_playing() || !board.has_active() {
        return StepOutcome::Ignored;
    }

    let mut distance = 0;
    while !board.will_collide(board.active_cells()) {
        if let Some(piece) = board.active_mut() {
            piece.descend();
        }
        distance += 1;
    }

    StepOutcome::HardDropped {
        distance,
        cleared: settle(board, session),
    }
}

/// Merge the falling piece, clear full floors and award points
fn settle(board: &mut Board, session: &mut Session) -> Vec<i32> {
    board.merge();
    let cleared = board.clear_full_floors();
    if !cleared.is_empty() {
        let points = session.award_floors(cleared.len());
        log::info!(
            "Cleared floors {:?} (+{}), score {}",
            cleared,
            points,
            session.score()
        );
    }
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{template, SPAWN_ANCHOR_W};
    use crate::{Difficulty, FLOOR_W};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tetra4d_math::lattice::{cell_at, COLUMNS};
    use tetra4d_math::IVec4;

    fn playing() -> Session {
        let mut session = Session::new(Difficulty::Easy);
        session.begin();
        session
    }

    #[test]
    fn test_tick_ignored_when_idle() {
        let mut board = Board::new();
        let mut session = Session::default();
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = tick(&mut board, &mut session, &SpawnDistribution::new(), &mut rng);
        assert_eq!(outcome, StepOutcome::Ignored);
        assert!(!board.has_active());
    }

    #[test]
    fn test_tick_spawns_then_falls() {
        let mut board = Board::new();
        let mut session = playing();
        let mut rng = StdRng::seed_from_u64(1);
        let dist = SpawnDistribution::new();

        assert!(matches!(
            tick(&mut board, &mut session, &dist, &mut rng),
            StepOutcome::Spawned(_)
        ));
        assert_eq!(tick(&mut board, &mut session, &dist, &mut rng), StepOutcome::Fell);
        assert_eq!(board.active().unwrap().anchor(), SPAWN_ANCHOR_W - 2);
    }

    #[test]
    fn test_ticks_land_on_floor() {
        let mut board = Board::new();
        let mut session = playing();
        let mut rng = StdRng::seed_from_u64(3);
        let dist = SpawnDistribution::new();

        tick(&mut board, &mut session, &dist, &mut rng);
        let cells = board.active().unwrap().cells().len();
        let mut falls = 0;
        loop {
            match tick(&mut board, &mut session, &dist, &mut rng) {
                StepOutcome::Fell => falls += 1,
                StepOutcome::Landed { cleared } => {
                    assert!(cleared.is_empty());
                    break;
                }
                other => panic!("unexpected {:?}", other),
            }
        }
        // 33 -> 5 is 14 steps; the last one lands
        assert_eq!(falls, 13);
        assert!(!board.has_active());
        assert_eq!(board.settled().len(), cells);
        assert!(board.settled().iter().all(|c| c.w == FLOOR_W));
    }

    #[test]
    fn test_resting_piece_merges_without_moving() {
        let mut board = Board::with_settled([IVec4::new(-1, 1, 1, 31)]);
        let mut session = playing();
        let mut rng = StdRng::seed_from_u64(1);
        board.spawn(template(crate::PieceKind::Cube));
        // Turn the cube over the settled cell
        board.rotate_active(tetra4d_math::RotationPlane::XY);
        board.rotate_active(tetra4d_math::RotationPlane::XY);
        board.rotate_active(tetra4d_math::RotationPlane::XY);
        assert_eq!(board.active_cells(), &[IVec4::new(-1, 1, 1, 33)]);

        let outcome = tick(&mut board, &mut session, &SpawnDistribution::new(), &mut rng);
        assert_eq!(outcome, StepOutcome::Landed { cleared: vec![] });
        assert!(board.is_settled(&IVec4::new(-1, 1, 1, 33)));
        assert!(board.is_settled(&IVec4::new(-1, 1, 1, 31)));
    }

    #[test]
    fn test_hard_drop_lands_on_floor() {
        let mut board = Board::new();
        let mut session = playing();
        board.spawn(template(crate::PieceKind::Corner));

        let outcome = hard_drop(&mut board, &mut session);
        assert_eq!(outcome, StepOutcome::HardDropped { distance: 14, cleared: vec![] });
        assert!(!board.has_active());
        let lowest = board.settled().iter().map(|c| c.w).min();
        assert_eq!(lowest, Some(FLOOR_W));
    }

    #[test]
    fn test_hard_drop_without_piece_is_ignored() {
        let mut board = Board::new();
        let mut session = playing();
        assert_eq!(hard_drop(&mut board, &mut session), StepOutcome::Ignored);
    }

    #[test]
    fn test_hard_drop_completing_floor_scores() {
        let mut stack: Vec<_> = COLUMNS.iter().map(|&c| cell_at(c, FLOOR_W)).collect();
        stack.retain(|c| *c != IVec4::new(1, 1, 1, FLOOR_W));
        stack.push(IVec4::new(-1, -1, -1, 7));
        let mut board = Board::with_settled(stack);
        let mut session = playing();
        board.spawn(template(crate::PieceKind::Cube));

        let outcome = hard_drop(&mut board, &mut session);
        assert_eq!(outcome, StepOutcome::HardDropped { distance: 14, cleared: vec![FLOOR_W] });
        assert_eq!(outcome.changes(), Changes::GEOMETRY | Changes::SCORE);
        assert_eq!(session.score(), 100);
        let remaining: Vec<_> = board.settled().iter().copied().collect();
        assert_eq!(remaining, vec![IVec4::new(-1, -1, -1, FLOOR_W)]);
    }

    #[test]
    fn test_blocked_spawn_ends_session() {
        let mut board = Board::with_settled([IVec4::new(1, 1, 1, 31)]);
        let mut session = playing();
        let mut rng = StdRng::seed_from_u64(9);
        let outcome = spawn(&mut board, &mut session, &SpawnDistribution::new(), &mut rng);
        assert!(outcome.is_game_over());
        assert_eq!(outcome.changes(), Changes::PHASE);
        assert!(session.is_over());
    }
}
