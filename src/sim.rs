//! Self-play driver: random legal moves pushed through a `RoundController`.

use rand::Rng;

use crate::{
    common::{MoveError, RoundOutcome},
    controller::RoundController,
    history::HistorySummary,
    ui::GameDisplay,
};

/// Totals after a simulated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SimReport {
    pub summary: HistorySummary,
    pub rounds: u32,
    pub ties: u32,
}

/// Pick a uniformly random empty cell on the controller's board.
pub fn random_empty_cell<R: Rng, D: GameDisplay>(
    rng: &mut R,
    controller: &RoundController<D>,
) -> Option<(usize, usize)> {
    let board = controller.game().board_snapshot();
    let free = board.empty_count();
    if free == 0 {
        return None;
    }
    let pick = rng.random_range(0..free);
    board.empty_mask().iter_set_bits().nth(pick)
}

/// Play `rounds` complete rounds with random legal moves for both sides.
pub fn simulate_match<R: Rng, D: GameDisplay>(
    rng: &mut R,
    rounds: u32,
    display: D,
) -> Result<SimReport, MoveError> {
    let mut controller = RoundController::new(display);
    let mut ties = 0;
    for round in 0..rounds {
        if round > 0 {
            controller.continue_to_next_round();
        }
        loop {
            let (r, c) = random_empty_cell(rng, &controller).ok_or(MoveError::RoundAlreadyOver)?;
            match controller.submit_move(r, c)? {
                RoundOutcome::InProgress => continue,
                RoundOutcome::Tie => {
                    ties += 1;
                    break;
                }
                RoundOutcome::Win(_) => break,
            }
        }
    }
    Ok(SimReport {
        summary: controller.history().summary(),
        rounds: controller.rounds_completed(),
        ties,
    })
}
