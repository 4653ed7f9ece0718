use crate::{
    models::Identifier,
    resource::Picture,
    round::{RoundPhase, RoundStats},
};

/// What the session is showing after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// A decoded image is on screen for this identifier.
    Showing(Identifier),
    /// Nothing left to draw.
    RoundOver {
        /// Whether anything was drawn this round.
        won: bool,
    },
}

/// Result of submitting a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched `answer`; the session moved on to `next`.
    Correct {
        /// Answer that was guessed.
        answer: String,
        /// What is shown now.
        next: Presentation,
    },
    /// Wrong guess; the same image stays up.
    Incorrect,
}

/// Read-only snapshot handed to renderers.
#[derive(Debug)]
pub struct SessionView<'a> {
    /// Quiz title.
    pub title: &'a str,
    /// Image to draw, absent once the round is over.
    pub picture: Option<&'a Picture>,
    /// Round lifecycle phase.
    pub phase: RoundPhase,
    /// Round counters.
    pub stats: &'a RoundStats,
    /// Identifiers still waiting in the pool.
    pub remaining: usize,
    /// Identifiers in the round.
    pub total: usize,
    /// Game-over text, present only when the round is over.
    pub round_over_message: Option<String>,
}
