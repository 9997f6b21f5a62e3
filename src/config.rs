pub const BOARD_SIZE: u8 = 3;
pub const NUM_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
pub const NUM_LINES: usize = 8;

/// Every winning triple as `(row, col)` positions: rows, columns, then the
/// two diagonals.
pub const LINES: [[(usize, usize); 3]; NUM_LINES] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];
