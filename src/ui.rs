use crate::{board::Board, common::Player, history::HistorySummary};

/// Presentation side of the game. The controller calls these after every
/// state change; implementations own all widget or terminal state.
pub trait GameDisplay {
    /// Draw the nine cells and the player to move.
    fn render_board(&mut self, board: &Board, current: Player);

    /// Refresh the "current player" indicator.
    fn update_status(&mut self, current: Player);

    /// Replace the board with the between-rounds summary screen.
    fn render_history(&mut self, summary: &HistorySummary);
}

impl<D: GameDisplay + ?Sized> GameDisplay for &mut D {
    fn render_board(&mut self, board: &Board, current: Player) {
        (**self).render_board(board, current)
    }

    fn update_status(&mut self, current: Player) {
        (**self).update_status(current)
    }

    fn render_history(&mut self, summary: &HistorySummary) {
        (**self).render_history(summary)
    }
}

/// [`GameDisplay`] that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl GameDisplay for NullDisplay {
    fn render_board(&mut self, _board: &Board, _current: Player) {}
    fn update_status(&mut self, _current: Player) {}
    fn render_history(&mut self, _summary: &HistorySummary) {}
}

/// Input delivered from the display to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A board cell was selected.
    CellClicked { row: usize, col: usize },
    /// The history screen was dismissed.
    ContinueClicked,
}

/// Screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Board,
    History,
}
