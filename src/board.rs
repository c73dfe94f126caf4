//! Game board: a size×size grid of cells over the fleet arena.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, FireResult};
use crate::config::{FLEET, MAX_LAYOUT_ATTEMPTS, MAX_RANDOM_ATTEMPTS, MIN_BOARD_SIZE};
use crate::fleet::Fleet;
use crate::ship::{HitOutcome, Orientation, Placement, Ship, ShipId, ShipType};

/// What the player has learned about a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellStatus {
    #[default]
    Unchecked,
    Miss,
    Hit,
}

impl CellStatus {
    /// Display mark for the cell.
    pub fn symbol(&self) -> char {
        match self {
            CellStatus::Unchecked => '_',
            CellStatus::Miss => 'o',
            CellStatus::Hit => 'x',
        }
    }
}

/// One grid position. `ship` is a lookup into the board's fleet, not ownership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    ship: Option<ShipId>,
    status: CellStatus,
}

impl Cell {
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    pub fn is_occupied(&self) -> bool {
        self.ship.is_some()
    }
}

pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    fleet: Fleet,
    alive: bool,
}

impl Board {
    /// Allocate an empty `size`×`size` board with no ships placed.
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::BoardTooSmall {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        // saturate so an absurd size surfaces as a reservation failure
        let total = size.saturating_mul(size);
        let mut cells = Vec::new();
        cells.try_reserve_exact(total)?;
        cells.resize(total, Cell::default());
        Ok(Board {
            size,
            cells,
            fleet: Fleet::new()?,
            alive: true,
        })
    }

    /// Create a board with the standard fleet placed at random.
    pub fn new<R: Rng>(size: usize, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Board::empty(size)?;
        for attempt in 1..=MAX_LAYOUT_ATTEMPTS {
            match board.place_fleet(rng) {
                Ok(()) => {
                    board.alive = true;
                    log::info!(
                        "created {}x{} board with {} ships",
                        size,
                        size,
                        board.fleet.len()
                    );
                    return Ok(board);
                }
                Err(BoardError::UnableToPlaceShip) => {
                    log::debug!("layout {} dead-ended, starting over", attempt);
                    board.reset();
                }
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for def in FLEET {
            let p = self.random_placement(rng, def.length())?;
            self.place(def, p.row, p.col, p.orientation)?;
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.cells.fill(Cell::default());
        self.fleet.clear();
        self.alive = true;
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.fleet.get(id)
    }

    /// Cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.size {
            return None;
        }
        Some(&self.cells[row * self.size..(row + 1) * self.size])
    }

    /// Coordinates occupied by ship `id`, in row-major order.
    pub fn ship_cells(&self, id: ShipId) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| cell.ship == Some(id))
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Number of cells holding a ship.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// `false` once every ship of the fleet is sunk and `check_board` has run.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Place a ship with its anchor at (`row`, `col`).
    pub fn place(
        &mut self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        if self.fleet.is_complete() {
            return Err(BoardError::FleetFull);
        }
        let placement = Placement::new(row, col, orientation, ship_type.length());
        placement.fits(self.size)?;
        if !self.is_free(&placement) {
            return Err(BoardError::ShipOverlaps);
        }
        let id = self.fleet.push(Ship::new(ship_type))?;
        for (r, c) in placement.cells() {
            let idx = r * self.size + c;
            self.cells[idx].ship = Some(id);
        }
        log::debug!(
            "placed {} at ({}, {}) {:?}",
            ship_type.name(),
            row,
            col,
            orientation
        );
        Ok(id)
    }

    /// Pick a random free run of `length` cells.
    ///
    /// Draws orientation and anchor uniformly, rejecting runs that touch
    /// another ship. After `MAX_RANDOM_ATTEMPTS` rejections every free run is
    /// enumerated and one is chosen uniformly, so this only fails when no
    /// free run exists at all.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Placement, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        if length > self.size {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Vertical => (self.size - length, self.size - 1),
                Orientation::Horizontal => (self.size - 1, self.size - length),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let p = Placement::new(r, c, orientation, length);
            if self.is_free(&p) {
                return Ok(p);
            }
        }
        log::debug!(
            "no free run of {} after {} draws, scanning",
            length,
            MAX_RANDOM_ATTEMPTS
        );
        let candidates: Vec<Placement> = self.free_placements(length).collect();
        if candidates.is_empty() {
            return Err(BoardError::UnableToPlaceShip);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    /// Every in-bounds run of `length` that touches no ship.
    pub fn free_placements(&self, length: usize) -> impl Iterator<Item = Placement> + '_ {
        let size = self.size;
        let span = if length == 0 || length > size {
            0
        } else {
            size - length + 1
        };
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .flat_map(move |o| {
                let (rows, cols) = match o {
                    Orientation::Horizontal => (size, span),
                    Orientation::Vertical => (span, size),
                };
                (0..rows).flat_map(move |r| {
                    (0..cols).map(move |c| Placement::new(r, c, o, length))
                })
            })
            .filter(move |p| self.is_free(p))
    }

    /// Resolve a shot at (row, col).
    pub fn fire(&mut self, row: usize, col: usize) -> Result<FireResult, BoardError> {
        let idx = self.index(row, col)?;
        let cell = &mut self.cells[idx];
        let Some(id) = cell.ship else {
            cell.status = CellStatus::Miss;
            log::debug!("fire ({}, {}): miss", row, col);
            return Ok(FireResult::Miss);
        };
        if cell.status == CellStatus::Hit {
            return Ok(FireResult::AlreadyHit);
        }
        cell.status = CellStatus::Hit;
        let ship = &mut self.fleet[id];
        let result = match ship.register_hit() {
            HitOutcome::Hit => FireResult::Hit,
            HitOutcome::Sunk => FireResult::Sunk(ship.name()),
        };
        log::debug!("fire ({}, {}): {:?}", row, col, result);
        Ok(result)
    }

    /// Recompute the board's alive flag from the fleet.
    pub fn check_board(&mut self) {
        let alive = !self.fleet.all_sunk();
        if self.alive && !alive {
            log::info!("every ship is sunk");
        }
        self.alive = alive;
    }

    /// Release the board. Consuming `self` makes a second release impossible.
    pub fn destroy(self) {
        log::debug!(
            "releasing {}x{} board with {} ships",
            self.size,
            self.size,
            self.fleet.len()
        );
    }

    fn is_free(&self, p: &Placement) -> bool {
        p.cells()
            .all(|(r, c)| self.cells[r * self.size + c].ship.is_none())
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(row * self.size + col)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {}, alive: {}", self.size, self.alive)?;
        for r in 0..self.size {
            write!(f, " ")?;
            for c in 0..self.size {
                let cell = self.cells[r * self.size + c];
                match (cell.ship, cell.status) {
                    (_, CellStatus::Hit) | (_, CellStatus::Miss) => {
                        write!(f, " {}", cell.status.symbol())?
                    }
                    (Some(id), CellStatus::Unchecked) => write!(f, " {}", id.index())?,
                    (None, CellStatus::Unchecked) => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  fleet: {:?} }}", self.fleet)
    }
}
