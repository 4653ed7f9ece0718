//! Draw-without-replacement round engine.

mod engine;
mod stats;

pub use engine::{DrawResult, GuessResult, RoundEngine, RoundError, RoundPhase};
pub use stats::RoundStats;
