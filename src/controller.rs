//! Round orchestration: moves in, display updates out.

use log::{debug, error, info, trace};

use crate::{
    common::{MoveError, RoundOutcome},
    game::GameState,
    history::MatchHistory,
    ui::{GameDisplay, InputEvent, View},
};

/// Drives rounds of play against a [`GameDisplay`].
///
/// Owns the live round, the match history and the display. History survives
/// from one round to the next; the round state is replaced on every
/// [`RoundController::start_round`].
pub struct RoundController<D: GameDisplay> {
    game: GameState,
    history: MatchHistory,
    display: D,
    view: View,
    rounds_completed: u32,
}

impl<D: GameDisplay> RoundController<D> {
    /// Create a controller with an empty history and open the first round.
    pub fn new(display: D) -> Self {
        let mut controller = Self {
            game: GameState::new(),
            history: MatchHistory::new(),
            display,
            view: View::Board,
            rounds_completed: 0,
        };
        controller.start_round();
        controller
    }

    /// Begin a new round with an empty board and X to move.
    pub fn start_round(&mut self) {
        self.game = GameState::new();
        self.view = View::Board;
        debug!("round {} started", self.rounds_completed + 1);
        self.display
            .render_board(&self.game.board_snapshot(), self.game.current_player());
    }

    /// Apply a move for the player to move and report the resulting outcome.
    ///
    /// On error nothing changes and the display is not touched.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<RoundOutcome, MoveError> {
        let player = self.game.current_player();
        self.game.apply_move(row, col)?;
        trace!("{} played ({}, {})", player, row, col);

        let outcome = self.game.evaluate();
        match outcome {
            RoundOutcome::Win(winner) => {
                info!("{} wins after {} moves", winner, self.game.moves_played());
                self.history.record(winner);
                self.end_round();
            }
            RoundOutcome::Tie => {
                info!("round tied");
                self.end_round();
            }
            RoundOutcome::InProgress => {
                self.game.advance_turn();
                let next = self.game.current_player();
                self.display.render_board(&self.game.board_snapshot(), next);
                self.display.update_status(next);
            }
        }
        Ok(outcome)
    }

    fn end_round(&mut self) {
        self.rounds_completed = self.rounds_completed.saturating_add(1);
        self.view = View::History;
        self.display.render_history(&self.history.summary());
    }

    /// Input boundary for a cell selection.
    ///
    /// A click on an occupied cell is ignored. Out-of-range coordinates and
    /// moves after the round ended are returned as errors; a correct display
    /// never produces them.
    pub fn cell_clicked(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        match self.submit_move(row, col) {
            Ok(_) => Ok(()),
            Err(e) if e.is_recoverable() => {
                debug!("ignored click: {}", e);
                Ok(())
            }
            Err(e) => {
                error!("rejected click at ({}, {}): {}", row, col, e);
                Err(e)
            }
        }
    }

    /// Leave the history screen and start the next round.
    pub fn continue_to_next_round(&mut self) {
        self.start_round();
    }

    /// Alias used by the input dispatch.
    pub fn continue_clicked(&mut self) {
        self.continue_to_next_round();
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), MoveError> {
        match event {
            InputEvent::CellClicked { row, col } => self.cell_clicked(row, col),
            InputEvent::ContinueClicked => {
                self.continue_clicked();
                Ok(())
            }
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Rounds that ended in a win or a tie.
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }
}
