use crate::ship::ShipType;

pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Smallest board that fits the longest ship.
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board the console accepts; rows are labelled `a`..`z`.
pub const MAX_BOARD_SIZE: usize = 26;

/// Random draws per fleet slot before falling back to a full scan.
pub const MAX_RANDOM_ATTEMPTS: usize = 100;
/// Whole-fleet layouts tried before `Board::new` gives up.
pub const MAX_LAYOUT_ATTEMPTS: usize = 32;

