use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Counters for the active round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    /// When the round (re)started.
    pub started_at: DateTime<Utc>,
    /// When the pool ran dry, if it has.
    pub finished_at: Option<DateTime<Utc>>,
    /// Correct guesses.
    pub correct: usize,
    /// Incorrect guesses.
    pub incorrect: usize,
    /// Items skipped because their image could not be shown.
    pub skipped: usize,
}

impl Default for RoundStats {
    fn default() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            correct: 0,
            incorrect: 0,
            skipped: 0,
        }
    }
}

impl RoundStats {
    /// Time spent in the round, frozen once it has finished.
    pub fn elapsed(&self) -> Duration {
        self.finished_at.unwrap_or_else(Utc::now) - self.started_at
    }

    /// Total guesses submitted.
    pub fn attempts(&self) -> usize {
        self.correct + self.incorrect
    }
}
