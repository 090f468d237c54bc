//! The game: board, session and spawn randomness behind one command interface
//!
//! `Game` is the single owner of all mutable engine state. Every command is
//! applied to completion before the next one is accepted, so a caller on a
//! multi-threaded platform only needs to serialise calls to [`Game::apply`].

use rand::rngs::StdRng;
use rand::SeedableRng;
use tetra4d_math::RotationPlane;

use crate::gravity::{self, StepOutcome};
use crate::{Board, Changes, Command, Difficulty, Phase, RotateResult, Session, SpawnDistribution};

/// A complete TetraTris game
pub struct Game {
    board: Board,
    session: Session,
    distribution: SpawnDistribution,
    rng: StdRng,
}

impl Game {
    /// Create an idle game whose spawn sequence is determined by `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            session: Session::default(),
            distribution: SpawnDistribution::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Set the starting difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.session.set_difficulty(difficulty);
        self
    }

    /// Replace the board with a prepared one
    ///
    /// Use [`Game::start_on_board`] to play on it; [`Game::start_new_game`]
    /// clears it.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    /// Change the difficulty for the current and later games
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.session.set_difficulty(difficulty);
    }

    /// Apply one command, returning what changed
    pub fn apply(&mut self, command: Command) -> Changes {
        match command {
            Command::Tick => self.tick().changes(),
            Command::Rotate(plane) => match self.rotate(plane) {
                RotateResult::Rotated => Changes::GEOMETRY,
                RotateResult::Obstructed | RotateResult::NoPiece => Changes::NONE,
            },
            Command::HardDrop => self.hard_drop().changes(),
            Command::StartNewGame => self.start_new_game(),
            Command::RestartAfterGameOver => {
                if self.session.is_over() {
                    self.start_new_game()
                } else {
                    Changes::NONE
                }
            }
        }
    }

    /// Reset board and score, enter play and spawn the first piece
    pub fn start_new_game(&mut self) -> Changes {
        self.board.clear();
        self.start_on_board()
    }

    /// Like [`Game::start_new_game`] but keeps the current settled stack
    pub fn start_on_board(&mut self) -> Changes {
        self.session.begin();
        log::info!("New game ({})", self.session.difficulty().label());
        let outcome = gravity::spawn(
            &mut self.board,
            &mut self.session,
            &self.distribution,
            &mut self.rng,
        );
        Changes::ALL | outcome.changes()
    }

    /// One gravity step
    pub fn tick(&mut self) -> StepOutcome {
        gravity::tick(
            &mut self.board,
            &mut self.session,
            &self.distribution,
            &mut self.rng,
        )
    }

    /// Drop the falling piece to its resting place
    pub fn hard_drop(&mut self) -> StepOutcome {
        gravity::hard_drop(&mut self.board, &mut self.session)
    }

    /// Quarter-turn the falling piece
    pub fn rotate(&mut self, plane: RotationPlane) -> RotateResult {
        if !self.session.is_playing() {
            return RotateResult::NoPiece;
        }
        self.board.rotate_active(plane)
    }
}
