//! Common types for Tic-Tac-Toe: players, cells, round outcomes and move errors.

use core::fmt;

/// One of the two players. X always opens a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark drawn for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

impl From<Player> for Cell {
    fn from(p: Player) -> Self {
        match p {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// The player owns a complete line.
    Win(Player),
    /// Board is full with no complete line.
    Tie,
}

impl RoundOutcome {
    pub fn is_over(self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

/// Errors returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates fall outside the 3×3 grid.
    OutOfBounds { row: usize, col: usize },
    /// Target cell already holds a mark.
    CellOccupied { row: usize, col: usize },
    /// The round has already been won or tied.
    RoundAlreadyOver,
}

impl MoveError {
    /// Only an occupied cell is an ordinary user mistake; the other variants
    /// mean the input layer emitted an event it should not have.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MoveError::CellOccupied { .. })
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            MoveError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
            MoveError::RoundAlreadyOver => write!(f, "The round is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
