//! Common types for Battleships: board errors and fire results.

use alloc::collections::TryReserveError;
use core::fmt;
use thiserror::Error;

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// No ship at the target.
    Miss,
    /// Struck a ship that is still afloat.
    Hit,
    /// Struck the last intact segment of a ship, carrying its name.
    Sunk(&'static str),
    /// The target was already hit; nothing changed.
    AlreadyHit,
}

impl FireResult {
    /// `true` for outcomes that damaged a ship.
    pub fn is_hit(&self) -> bool {
        matches!(self, FireResult::Hit | FireResult::Sunk(_))
    }
}

impl fmt::Display for FireResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireResult::Miss => write!(f, "Miss"),
            FireResult::Hit => write!(f, "Hit!"),
            FireResult::Sunk(_) => write!(f, "Hit and sunk."),
            FireResult::AlreadyHit => write!(f, "Already been Hit"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Grid or fleet storage could not be reserved.
    #[error("memory allocation failed: {0}")]
    Allocation(TryReserveError),
    #[error("board size {size} is below the minimum of {min}")]
    BoardTooSmall { size: usize, min: usize },
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("ship placement is out of bounds")]
    ShipOutOfBounds,
    #[error("ship placement overlaps with another ship")]
    ShipOverlaps,
    #[error("ship length must be at least 1")]
    InvalidShipLength,
    #[error("every fleet slot is already placed")]
    FleetFull,
    #[error("unable to place ship")]
    UnableToPlaceShip,
}

impl From<TryReserveError> for BoardError {
    fn from(err: TryReserveError) -> Self {
        BoardError::Allocation(err)
    }
}
