//! Match-level bookkeeping that outlives individual rounds.

use crate::common::Player;

/// Win counters for the current match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchHistory {
    wins: [u32; 2],
    most_recent_winner: Option<Player>,
}

/// Values shown on the history screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HistorySummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub most_recent_winner: Option<Player>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a round won by `winner`. Tied rounds are never recorded.
    pub fn record(&mut self, winner: Player) {
        let count = &mut self.wins[winner.index()];
        *count = count.saturating_add(1);
        self.most_recent_winner = Some(winner);
    }

    pub fn win_count(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    pub fn most_recent_winner(&self) -> Option<Player> {
        self.most_recent_winner
    }

    /// Total rounds that ended in a win.
    pub fn total_wins(&self) -> u32 {
        self.wins.iter().sum()
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            x_wins: self.win_count(Player::X),
            o_wins: self.win_count(Player::O),
            most_recent_winner: self.most_recent_winner,
        }
    }
}
