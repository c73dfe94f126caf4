//! Ship definitions, placements and damage bookkeeping.

use core::fmt;

use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A straight run of `length` cells anchored at (`row`, `col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    pub fn new(row: usize, col: usize, orientation: Orientation, length: usize) -> Self {
        Self {
            row,
            col,
            orientation,
            length,
        }
    }

    /// Check that the run stays on a `size`×`size` board.
    pub fn fits(&self, size: usize) -> Result<(), BoardError> {
        if self.length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        let (rows, cols) = match self.orientation {
            Orientation::Horizontal => (1, self.length),
            Orientation::Vertical => (self.length, 1),
        };
        let past = |start: usize, len: usize| start.checked_add(len).map_or(true, |end| end > size);
        if past(self.row, rows) || past(self.col, cols) {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(())
    }

    /// Cells covered by the run, from the anchor outward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            row,
            col,
            orientation,
            length,
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        let (along, across, start, line) = match self.orientation {
            Orientation::Horizontal => (col, row, self.col, self.row),
            Orientation::Vertical => (row, col, self.row, self.col),
        };
        across == line && along >= start && along < start + self.length
    }
}

/// Stable index of a ship inside its board's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Outcome of registering a hit on a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Hit,
    Sunk,
}

/// A ship with its damage count.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    hits: usize,
}

impl Ship {
    /// A fresh, undamaged ship.
    pub fn new(ship_type: ShipType) -> Self {
        Ship { ship_type, hits: 0 }
    }

    /// Record one hit. Saturates at the ship's size, so calling this on a
    /// sunk ship leaves it unchanged and reports `Sunk` again.
    pub fn register_hit(&mut self) -> HitOutcome {
        if self.hits < self.size() {
            self.hits += 1;
        }
        if self.is_alive() {
            HitOutcome::Hit
        } else {
            HitOutcome::Sunk
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hits < self.size()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", hits: {}/{}, alive: {} }}",
            self.name(),
            self.hits,
            self.size(),
            self.is_alive(),
        )
    }
}
