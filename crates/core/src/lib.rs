#![warn(clippy::all, missing_docs)]

//! Core logic for the image guessing quizzes.
//!
//! This crate hosts the draw-without-replacement round engine, image
//! discovery and decoding, the quiz session that ties them together,
//! and configuration. It has no knowledge of any user interface.

pub mod config;
pub mod models;
pub mod resource;
pub mod round;
pub mod session;

pub use crate::config::AppConfig;
pub use models::{Bounds, Identifier, QuizDefinition};
pub use round::{DrawResult, GuessResult, RoundEngine, RoundError, RoundPhase, RoundStats};
pub use session::{GuessOutcome, Presentation, QuizSession, SessionView};
