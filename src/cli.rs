//! Console front-end: input parsing, board rendering and the game loop.
//!
//! Rows are labelled with lowercase letters starting at `a` and columns are
//! 1-based, so `b 3` (or `b3`) targets row 1, column 2 of the core board.

#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use thiserror::Error;

use crate::{
    board::Board,
    config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE},
    game::{GameEngine, GameStatus},
};

pub const BOARD_SIZE_PROMPT: &str = "Enter Board Size:";
pub const READY_MSG: &str = "Ready to play";
pub const MOVE_PROMPT: &str = "enter coordinates:";
pub const INVALID_MOVE_MSG: &str = "Invalid move, try again.";
pub const GAME_OVER_MSG: &str = "Game over";
pub const EXIT_COMMAND: &str = "exit";

/// Problems with user-entered text. None of these reach the core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not valid board size!")]
    InvalidSize,
    #[error("board size not fitting!")]
    SizeOutOfRange { size: usize },
    #[error("missing coordinates")]
    Empty,
    #[error("row must be a single letter")]
    InvalidRow,
    #[error("column must be a number")]
    InvalidColumn,
    #[error("coordinate {row}{col} is off the board")]
    OffBoard { row: char, col: usize },
}

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fire at 0-based (row, col).
    Fire { row: usize, col: usize },
    Exit,
}

/// Parse a board size, accepting only `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
pub fn parse_board_size(input: &str) -> Result<usize, InputError> {
    let size: usize = input.trim().parse().map_err(|_| InputError::InvalidSize)?;
    validate_board_size(size)
}

pub fn validate_board_size(size: usize) -> Result<usize, InputError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(InputError::SizeOutOfRange { size });
    }
    Ok(size)
}

/// Parse `exit`, `<letter> <column>` or `<letter><column>`.
pub fn parse_move(input: &str, board_size: usize) -> Result<Command, InputError> {
    let input = input.trim();
    if input == EXIT_COMMAND {
        return Ok(Command::Exit);
    }
    let mut chars = input.chars();
    let row_ch = chars.next().ok_or(InputError::Empty)?;
    if !row_ch.is_ascii_lowercase() {
        return Err(InputError::InvalidRow);
    }
    let rest = chars.as_str();
    // a second letter glued to the first means a multi-letter token
    if rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(InputError::InvalidRow);
    }
    let col: usize = rest
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidColumn)?;
    let row = (row_ch as u8 - b'a') as usize;
    if row >= board_size || col == 0 || col > board_size {
        return Err(InputError::OffBoard { row: row_ch, col });
    }
    Ok(Command::Fire { row, col: col - 1 })
}

fn row_label(row: usize) -> char {
    char::from_u32('a' as u32 + row as u32).unwrap_or('?')
}

/// Text view of the board: a ` ,1,2,...` header and one lettered line per row.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from(" ");
    for c in 1..=size {
        let _ = write!(out, ",{}", c);
    }
    out.push('\n');
    for r in 0..size {
        out.push(row_label(r));
        for cell in board.row(r).unwrap_or_default() {
            out.push(' ');
            out.push(cell.status().symbol());
        }
        out.push('\n');
    }
    out
}

/// Drive a game from `input` until the board is cleared, the player types
/// `exit`, or input ends. Invalid moves are reported on `errors` and
/// re-prompted without limit.
pub fn run_game<R, W, E>(
    engine: &mut GameEngine,
    mut input: R,
    mut output: W,
    mut errors: E,
) -> anyhow::Result<GameStatus>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let size = engine.board().size();
    while engine.board().is_alive() {
        write!(output, "{}", render_board(engine.board()))?;
        let (row, col) = loop {
            write!(output, "{}", MOVE_PROMPT)?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                log::info!("input closed after {} shots", engine.shots());
                writeln!(output, "{}", GAME_OVER_MSG)?;
                return Ok(engine.status());
            }
            match parse_move(&line, size) {
                Ok(Command::Fire { row, col }) => break (row, col),
                Ok(Command::Exit) => {
                    writeln!(output, "{}", GAME_OVER_MSG)?;
                    return Ok(engine.status());
                }
                Err(e) => {
                    log::debug!("rejected move {:?}: {}", line.trim(), e);
                    writeln!(errors, "{}", INVALID_MOVE_MSG)?;
                }
            }
        };
        let result = engine.fire(row, col)?;
        writeln!(output, "{}", result)?;
    }
    log::info!("all ships sunk in {} shots", engine.shots());
    write!(output, "{}", render_board(engine.board()))?;
    writeln!(output, "{}", GAME_OVER_MSG)?;
    Ok(engine.status())
}
