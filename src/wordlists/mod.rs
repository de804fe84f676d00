//! Word lists for secret word selection
//!
//! Provides embedded word lists compiled into the binary, plus loading of
//! player-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{
    DEFAULT_WORDS, DEFAULT_WORDS_COUNT, EASY_WORDS, EASY_WORDS_COUNT, HARD_WORDS,
    HARD_WORDS_COUNT,
};
pub use loader::{WordSource, WordSourceError};
