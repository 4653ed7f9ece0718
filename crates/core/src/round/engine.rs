use std::collections::HashSet;

use chrono::Utc;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use super::stats::RoundStats;
use crate::models::Identifier;

/// Errors raised by the round engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A guess arrived while nothing was being guessed.
    #[error("no identifier is currently being guessed")]
    InvalidState,
}

/// Lifecycle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Initialized, nothing drawn yet.
    NotStarted,
    /// An identifier is being guessed.
    Active,
    /// The pool ran dry.
    RoundOver,
}

/// Outcome of drawing from the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawResult {
    /// A new identifier became current.
    Drawn(Identifier),
    /// The pool is empty. `won` is set when anything was drawn this round.
    RoundOver {
        /// Whether the round had at least one item.
        won: bool,
    },
}

/// Outcome of a guess against the current identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The guess matched; the caller should draw the next item.
    Correct,
    /// The guess did not match; the current item stays.
    Incorrect,
}

/// Shuffled draw-without-replacement sequence over a set of identifiers.
///
/// `pool` and `used` are always disjoint and together hold every identifier
/// of the round. `current`, when set, is the last element of `used`.
#[derive(Debug)]
pub struct RoundEngine {
    pool: Vec<Identifier>,
    used: Vec<Identifier>,
    current: Option<Identifier>,
    phase: RoundPhase,
    stats: RoundStats,
    rng: StdRng,
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl RoundEngine {
    /// Empty engine with an entropy-seeded shuffle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty engine with a fixed seed, for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            pool: Vec::new(),
            used: Vec::new(),
            current: None,
            phase: RoundPhase::NotStarted,
            stats: RoundStats::default(),
            rng,
        }
    }

    /// Replace all state with a fresh pool. Repeated identifiers are dropped.
    pub fn initialize(&mut self, identifiers: impl IntoIterator<Item = Identifier>) {
        let mut seen = HashSet::new();
        self.pool = identifiers
            .into_iter()
            .filter(|identifier| seen.insert(identifier.clone()))
            .collect();
        self.used.clear();
        self.current = None;
        self.phase = RoundPhase::NotStarted;
        self.stats = RoundStats::default();
        info!(total = self.pool.len(), "Round initialized");
    }

    /// Shuffle the pool and draw from it.
    pub fn shuffle_and_draw(&mut self) -> DrawResult {
        self.pool.shuffle(&mut self.rng);
        self.draw_next()
    }

    /// Move one identifier from the pool to `used` and make it current.
    pub fn draw_next(&mut self) -> DrawResult {
        match self.pool.pop() {
            Some(next) => {
                self.used.push(next.clone());
                self.current = Some(next.clone());
                self.phase = RoundPhase::Active;
                self.stats.finished_at = None;
                debug!(identifier = %next, remaining = self.pool.len(), "Drew identifier");
                DrawResult::Drawn(next)
            }
            None => {
                self.current = None;
                self.phase = RoundPhase::RoundOver;
                if self.stats.finished_at.is_none() {
                    self.stats.finished_at = Some(Utc::now());
                }
                let won = !self.used.is_empty();
                info!(won, drawn = self.used.len(), "Round over");
                DrawResult::RoundOver { won }
            }
        }
    }

    /// Compare `text` against the current identifier's answer.
    ///
    /// Only case is folded; whitespace is compared as typed.
    pub fn check_guess(&mut self, text: &str) -> Result<GuessResult, RoundError> {
        let current = self.current.as_ref().ok_or(RoundError::InvalidState)?;
        if current.matches(text) {
            self.stats.correct += 1;
            Ok(GuessResult::Correct)
        } else {
            self.stats.incorrect += 1;
            Ok(GuessResult::Incorrect)
        }
    }

    /// Give up on the current identifier (e.g. its image would not decode)
    /// and draw the next one. The skipped identifier stays in `used`.
    pub fn skip_current(&mut self) -> DrawResult {
        if let Some(current) = self.current.take() {
            debug!(identifier = %current, "Skipping identifier");
            self.stats.skipped += 1;
        }
        self.draw_next()
    }

    /// Merge new identifiers into the pool, then reshuffle and draw.
    ///
    /// Whatever was current is abandoned and stays in `used`. Identifiers
    /// already in the round are not queued twice: those in `used` only come
    /// back with the next [`RoundEngine::restart`].
    pub fn load_more(&mut self, identifiers: impl IntoIterator<Item = Identifier>) -> DrawResult {
        let mut known: HashSet<Identifier> =
            self.pool.iter().chain(self.used.iter()).cloned().collect();
        let before = self.pool.len();
        for identifier in identifiers {
            if known.insert(identifier.clone()) {
                self.pool.push(identifier);
            }
        }
        info!(added = self.pool.len() - before, "Loaded more identifiers");
        self.shuffle_and_draw()
    }

    /// Return every drawn identifier to the pool and start over.
    pub fn restart(&mut self) -> DrawResult {
        self.pool.append(&mut self.used);
        self.current = None;
        self.stats = RoundStats::default();
        info!(total = self.pool.len(), "Round restarted");
        self.shuffle_and_draw()
    }

    /// The identifier being guessed, if any.
    pub fn current(&self) -> Option<&Identifier> {
        self.current.as_ref()
    }

    /// Identifiers not drawn yet.
    pub fn pool(&self) -> &[Identifier] {
        &self.pool
    }

    /// Identifiers drawn this round, in draw order.
    pub fn used(&self) -> &[Identifier] {
        &self.used
    }

    /// Number of identifiers still in the pool.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Number of identifiers in the round.
    pub fn total(&self) -> usize {
        self.pool.len() + self.used.len()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Counters for the round.
    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }
}
