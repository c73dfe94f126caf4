#![allow(dead_code)]

use battleships::{Board, Orientation, ShipId, FLEET};

/// 5×5 board with every ship laid horizontally from column 0:
///
/// ```text
/// row 0: D D . . .
/// row 1: C C C C C
/// row 2: B B B B .
/// row 3: R R R . .
/// row 4: S S S . .
/// ```
pub fn fixed_board() -> Board {
    let mut board = Board::empty(5).unwrap();
    let rows = [1, 2, 3, 4, 0];
    for (def, row) in FLEET.iter().zip(rows) {
        board.place(*def, row, 0, Orientation::Horizontal).unwrap();
    }
    board
}

/// Id of the ship covering (row, col).
pub fn ship_at(board: &Board, row: usize, col: usize) -> ShipId {
    board.cell(row, col).unwrap().ship().expect("cell holds a ship")
}

/// Fire at every cell of a ship, leaving the board unchecked.
pub fn sink(board: &mut Board, id: ShipId) {
    let cells: Vec<_> = board.ship_cells(id).collect();
    for (r, c) in cells {
        board.fire(r, c).unwrap();
    }
}
