//! Cumulative player statistics

use serde::{Deserialize, Serialize};

/// Counters carried across days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub played: u32,
    pub won: u32,
    /// Current run of consecutive wins
    pub streak: u32,
    pub max_streak: u32,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into the counters and return the result
    pub fn record_completion(self, won: bool) -> Self {
        let mut next = Self {
            played: self.played.saturating_add(1),
            ..self
        };
        if won {
            next.won = next.won.saturating_add(1);
            next.streak = next.streak.saturating_add(1);
            next.max_streak = next.max_streak.max(next.streak);
        } else {
            next.streak = 0;
        }
        next
    }

    /// Share of played games that were won, as a percentage
    pub fn win_rate(&self) -> f32 {
        if self.played > 0 {
            self.won as f32 / self.played as f32 * 100.0
        } else {
            0.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Played: {} | Won: {} | Win rate: {:.0}% | Streak: {} | Max streak: {}",
            self.played,
            self.won,
            self.win_rate(),
            self.streak,
            self.max_streak
        )
    }
}
