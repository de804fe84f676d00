//! Command implementations

pub mod modes;
pub mod play;
pub mod score;

pub use modes::{ModeInfo, list_modes};
pub use play::{PlaySetup, resolve_mode_or_default, run_play};
pub use score::{ScoreRequest, ScoreResult, score_word};
