//! Hangman
//!
//! A terminal word-guessing game: pick a difficulty, then guess letters or
//! the whole word before the mistake budget runs out. Wins are scored by how
//! varied the word is and how few mistakes were spent on it.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessOutcome, Mode, Round, ScoringEngine};
//!
//! let mode = Mode::new("casual", 9).unwrap();
//! let mut round = Round::new("apple", mode.mistake_budget(), mode.allows_repeats());
//!
//! assert_eq!(round.guess("apple"), GuessOutcome::Solved { by_word: true });
//!
//! let points = ScoringEngine::default().compute_delta("apple", &mode, round.remaining_mistakes(), true);
//! assert_eq!(points, 325);
//! ```

// Core domain types
pub mod core;

// Settings file
pub mod config;

// Word lists
pub mod wordlists;

// Session state machine and console boundary
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
