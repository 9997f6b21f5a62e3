use tictactoe::{HistorySummary, MatchHistory, Player};

#[test]
fn test_new_history_is_empty() {
    let history = MatchHistory::new();
    assert_eq!(history.win_count(Player::X), 0);
    assert_eq!(history.win_count(Player::O), 0);
    assert_eq!(history.most_recent_winner(), None);
    assert_eq!(history.total_wins(), 0);
}

#[test]
fn test_record_counts_and_most_recent() {
    let mut history = MatchHistory::new();
    history.record(Player::X);
    assert_eq!(history.win_count(Player::X), 1);
    assert_eq!(history.win_count(Player::O), 0);
    assert_eq!(history.most_recent_winner(), Some(Player::X));

    history.record(Player::O);
    assert_eq!(history.win_count(Player::X), 1);
    assert_eq!(history.win_count(Player::O), 1);
    assert_eq!(history.most_recent_winner(), Some(Player::O));

    history.record(Player::O);
    assert_eq!(
        history.summary(),
        HistorySummary {
            x_wins: 1,
            o_wins: 2,
            most_recent_winner: Some(Player::O),
        }
    );
    assert_eq!(history.total_wins(), 3);
}

#[cfg(feature = "std")]
#[test]
fn test_summary_serializes() {
    let mut history = MatchHistory::new();
    history.record(Player::X);
    let json = serde_json::to_value(history.summary()).unwrap();
    assert_eq!(json["x_wins"], 1);
    assert_eq!(json["o_wins"], 0);
    assert_eq!(json["most_recent_winner"], "X");
}
