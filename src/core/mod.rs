//! Core domain types for hangman
//!
//! Pure, synchronous types with no I/O: modes, the state of one round, and
//! the scoring formula.

mod mode;
mod round;
mod scoring;

pub use mode::{Mode, ModeCatalog, ModeError};
pub use round::{GuessOutcome, Miss, PLACEHOLDER, Round, RoundStatus};
pub use scoring::{Score, ScoreBreakdown, ScoringEngine};
