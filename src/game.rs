use crate::{
    board::Board,
    common::{Cell, MoveError, Player, RoundOutcome},
};

/// State of a single round: the board and the player to move.
///
/// A round starts empty with X to move. Placing a mark does not pass the
/// turn; the caller decides that with [`GameState::advance_turn`] once it
/// knows the move did not end the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Player,
}

impl GameState {
    /// Create a fresh round with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
        }
    }

    /// Restore a round from an existing board and player to move.
    pub fn from_parts(board: Board, current: Player) -> Self {
        Self { board, current }
    }

    /// Player whose mark the next move places.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Copy of the board.
    pub fn board_snapshot(&self) -> Board {
        self.board
    }

    /// Number of marks on the board.
    pub fn moves_played(&self) -> usize {
        self.board.occupied().count_ones()
    }

    /// Place the current player's mark at (row, col).
    ///
    /// Fails without touching any state when the round is over, the
    /// coordinates are outside the grid, or the cell is taken.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.evaluate().is_over() {
            return Err(MoveError::RoundAlreadyOver);
        }
        let cell = self
            .board
            .cell(row, col)
            .map_err(|_| MoveError::OutOfBounds { row, col })?;
        if cell != Cell::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }
        self.board
            .place(row, col, self.current)
            .map_err(|_| MoveError::OutOfBounds { row, col })
    }

    /// Evaluate the board: a complete line wins, otherwise a full board ties.
    pub fn evaluate(&self) -> RoundOutcome {
        if let Some(p) = self.board.winner() {
            RoundOutcome::Win(p)
        } else if self.board.is_full() {
            RoundOutcome::Tie
        } else {
            RoundOutcome::InProgress
        }
    }

    /// Pass the turn to the other player.
    pub fn advance_turn(&mut self) {
        self.current = self.current.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
