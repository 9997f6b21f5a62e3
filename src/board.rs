//! The 3×3 grid, stored as one occupancy `BitBoard` per player.

use crate::bitboard::{BitBoard, BitBoardError};
use crate::common::{Cell, Player};
use crate::config::{BOARD_SIZE, LINES, NUM_CELLS};
use core::fmt;

/// Occupancy mask over the 3×3 grid.
pub type CellMask = BitBoard<u16, { BOARD_SIZE as usize }>;

fn line_mask(line: &[(usize, usize); 3]) -> CellMask {
    let raw = line
        .iter()
        .fold(0u16, |acc, &(r, c)| acc | 1 << (r * BOARD_SIZE as usize + c));
    CellMask::from_raw(raw)
}

/// Row-major 3×3 grid of cells. Copying a board yields an independent
/// snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    marks: [CellMask; 2],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            marks: [CellMask::new(); 2],
        }
    }

    /// Build a board from explicit cells in row-major order.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        let mut board = Board::new();
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(p) = cell.player() {
                    // indices come from a 3×3 array
                    let _ = board.marks[p.index()].set(r, c);
                }
            }
        }
        board
    }

    /// Cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BitBoardError> {
        for p in Player::ALL {
            if self.marks[p.index()].get(row, col)? {
                return Ok(Cell::from(p));
            }
        }
        Ok(Cell::Empty)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> [[Cell; 3]; 3] {
        core::array::from_fn(|r| {
            core::array::from_fn(|c| self.cell(r, c).unwrap_or(Cell::Empty))
        })
    }

    /// Occupancy mask of one player's marks.
    pub fn marks(&self, player: Player) -> CellMask {
        self.marks[player.index()]
    }

    /// Mask of every occupied cell.
    pub fn occupied(&self) -> CellMask {
        self.marks[0] | self.marks[1]
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        NUM_CELLS - self.occupied().count_ones()
    }

    /// Mask of every empty cell.
    pub fn empty_mask(&self) -> CellMask {
        !self.occupied()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == CellMask::full()
    }

    /// Mark (row, col) for `player`. The caller checks the cell is empty.
    pub(crate) fn place(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<(), BitBoardError> {
        self.marks[player.index()].set(row, col)
    }

    /// The player owning a complete line, if any. Rows are checked first,
    /// then columns, then diagonals.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let mask = line_mask(line);
            Player::ALL
                .into_iter()
                .find(|p| self.marks[p.index()].contains(mask))
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self)
    }
}

/// Compact form: rows separated by `/`, empty cells as `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells().iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                let ch = cell.player().map(Player::symbol).unwrap_or('.');
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
