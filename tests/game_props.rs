use proptest::prelude::*;
use tictactoe::{GameState, MoveError, Player, RoundOutcome};

fn move_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Playing cells in any order: outcome stays InProgress until a line or
    /// a full board, the turn flips once per non-terminal move, and the
    /// winner is always the player who just moved.
    #[test]
    fn random_round_follows_state_machine(order in move_order()) {
        let mut game = GameState::new();
        let mut played = 0;
        for idx in order {
            let (r, c) = (idx / 3, idx % 3);
            let mover = game.current_player();
            prop_assert_eq!(game.evaluate(), RoundOutcome::InProgress);

            game.apply_move(r, c).unwrap();
            played += 1;
            prop_assert_eq!(game.moves_played(), played);

            let outcome = game.evaluate();
            prop_assert_eq!(game.evaluate(), outcome);
            match outcome {
                RoundOutcome::InProgress => {
                    prop_assert!(played < 9);
                    game.advance_turn();
                    prop_assert_eq!(game.current_player(), mover.opponent());
                }
                RoundOutcome::Win(p) => {
                    prop_assert_eq!(p, mover);
                    prop_assert_eq!(game.board_snapshot().winner(), Some(p));
                    break;
                }
                RoundOutcome::Tie => {
                    prop_assert_eq!(played, 9);
                    prop_assert_eq!(game.board_snapshot().winner(), None);
                    break;
                }
            }
        }
        prop_assert!(game.evaluate().is_over());
    }

    /// Rejected moves never change the round.
    #[test]
    fn illegal_moves_do_not_mutate(
        order in move_order(),
        prefix in 0usize..9,
        row in 0usize..6,
        col in 0usize..6,
    ) {
        let mut game = GameState::new();
        for idx in order.into_iter().take(prefix) {
            if game.evaluate().is_over() {
                break;
            }
            game.apply_move(idx / 3, idx % 3).unwrap();
            if !game.evaluate().is_over() {
                game.advance_turn();
            }
        }

        let before = game;
        match game.apply_move(row, col) {
            Ok(()) => {
                prop_assert!(row < 3 && col < 3);
                prop_assert_eq!(game.moves_played(), before.moves_played() + 1);
            }
            Err(e) => {
                prop_assert_eq!(game, before);
                match e {
                    MoveError::RoundAlreadyOver => {
                        prop_assert!(before.evaluate().is_over());
                    }
                    MoveError::OutOfBounds { .. } => {
                        prop_assert!(row >= 3 || col >= 3);
                    }
                    MoveError::CellOccupied { .. } => {
                        let cell = before.board_snapshot().cell(row, col).unwrap();
                        prop_assert!(cell.player().is_some());
                    }
                }
            }
        }
    }

    /// X always has the same number of marks as O, or one more.
    #[test]
    fn mark_counts_alternate(order in move_order()) {
        let mut game = GameState::new();
        for idx in order {
            if game.evaluate().is_over() {
                break;
            }
            game.apply_move(idx / 3, idx % 3).unwrap();
            if !game.evaluate().is_over() {
                game.advance_turn();
            }
            let board = game.board_snapshot();
            let x = board.marks(Player::X).count_ones();
            let o = board.marks(Player::O).count_ones();
            prop_assert!(x == o || x == o + 1);
        }
    }
}
