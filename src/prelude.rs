//! Commonly used types and utilities for ease of import.

pub use crate::{Board, BoardError, FireResult, GameEngine, GameStatus, Orientation, FLEET};

#[cfg(feature = "std")]
pub use crate::cli::{parse_move, render_board, run_game, Command};
