//! A playable quiz: round engine, catalog and image loading wired together.

mod models;
/// Session driving one quiz round after another.
pub mod quiz;

pub use models::{GuessOutcome, Presentation, SessionView};
pub use quiz::QuizSession;
