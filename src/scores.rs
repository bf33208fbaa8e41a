//! Lap score book
//!
//! Session-only record of completed laps. Score is the number of launches a
//! lap took, so lower is better. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Maximum number of lap results kept in the history
pub const MAX_LAP_HISTORY: usize = 10;

/// Lap results for the current session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LapScores {
    /// Laps completed
    pub laps: u32,
    /// Fewest moves over all completed laps (None until the first lap)
    pub best: Option<u32>,
    /// Moves taken by the most recent lap
    pub previous: u32,
    /// Most recent lap results, newest first
    pub history: Vec<u32>,
}

impl LapScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a lap of `moves` would set a new best
    pub fn is_new_best(&self, moves: u32) -> bool {
        self.best.is_none_or(|best| moves < best)
    }

    /// Record a completed lap. Returns true if it set a new best.
    pub fn record_lap(&mut self, moves: u32) -> bool {
        self.laps += 1;
        self.previous = moves;

        self.history.insert(0, moves);
        self.history.truncate(MAX_LAP_HISTORY);

        let new_best = self.is_new_best(moves);
        if new_best {
            self.best = Some(moves);
        }
        new_best
    }

    pub fn is_empty(&self) -> bool {
        self.laps == 0
    }
}

/// Format a best score, "∞" until a lap has been completed
pub fn format_best(best: Option<u32>) -> String {
    match best {
        Some(moves) => moves.to_string(),
        None => "∞".to_string(),
    }
}
