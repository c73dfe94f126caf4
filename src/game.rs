use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, FireResult},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Single-player session: one board and a shot counter.
pub struct GameEngine {
    board: Board,
    shots: usize,
}

impl GameEngine {
    /// Start a game on a freshly placed `size`×`size` board.
    pub fn new<R: Rng>(size: usize, rng: &mut R) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(size, rng)?))
    }

    /// Start a game on an already prepared board.
    pub fn from_board(board: Board) -> Self {
        Self { board, shots: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Fire at (row, col) and refresh the board's alive flag.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<FireResult, BoardError> {
        let result = self.board.fire(row, col)?;
        self.shots += 1;
        self.board.check_board();
        Ok(result)
    }

    /// Shots resolved so far, including misses and repeats.
    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_alive() {
            GameStatus::InProgress
        } else {
            GameStatus::Won
        }
    }

    /// Hand the board back, ending the session.
    pub fn into_board(self) -> Board {
        self.board
    }
}
