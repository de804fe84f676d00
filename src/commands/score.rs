//! Score preview command
//!
//! Works out what a win on a given word would be worth.

use crate::core::{Mode, ScoreBreakdown, ScoringEngine};

/// A hypothetical winning round
pub struct ScoreRequest {
    pub word: String,
    /// Mistakes still available at the moment of winning; defaults to the full budget
    pub remaining: Option<u32>,
    pub by_word: bool,
}

impl ScoreRequest {
    #[must_use]
    pub const fn new(word: String) -> Self {
        Self {
            word,
            remaining: None,
            by_word: false,
        }
    }
}

/// Result of scoring a hypothetical win
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub word: String,
    pub mode: String,
    pub mistake_budget: u32,
    pub remaining: u32,
    pub by_word: bool,
    pub breakdown: ScoreBreakdown,
}

/// Score a win on `request.word` in `mode`
///
/// # Errors
///
/// Returns an error if:
/// - The word is empty
/// - `remaining` is 0 (that round would have been lost) or above the mode's budget
pub fn score_word(
    request: ScoreRequest,
    mode: &Mode,
    engine: &ScoringEngine,
) -> Result<ScoreResult, String> {
    if request.word.is_empty() {
        return Err("Word must not be empty".to_string());
    }

    let budget = mode.mistake_budget();
    let remaining = request.remaining.unwrap_or(budget);
    if remaining == 0 || remaining > budget {
        return Err(format!(
            "Remaining mistakes must be between 1 and {budget} in {mode}, got {remaining}"
        ));
    }

    let breakdown = engine.breakdown(&request.word, mode, remaining, request.by_word);

    Ok(ScoreResult {
        mode: mode.name().to_string(),
        mistake_budget: budget,
        remaining,
        by_word: request.by_word,
        breakdown,
        word: request.word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn casual() -> Mode {
        Mode::new("casual", 9).unwrap()
    }

    #[test]
    fn defaults_to_full_budget() {
        let result = score_word(
            ScoreRequest::new("apple".to_string()),
            &casual(),
            &ScoringEngine::default(),
        )
        .unwrap();

        assert_eq!(result.remaining, 9);
        assert_eq!(result.breakdown.delta, 260);
        assert_eq!(result.mode, "CASUAL");
    }

    #[test]
    fn word_guess_applies_bonus() {
        let request = ScoreRequest {
            by_word: true,
            ..ScoreRequest::new("apple".to_string())
        };
        let result = score_word(request, &casual(), &ScoringEngine::default()).unwrap();
        assert_eq!(result.breakdown.delta, 325);
        assert!((result.breakdown.multiplier - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn remaining_out_of_range_rejected() {
        for remaining in [0, 10] {
            let request = ScoreRequest {
                remaining: Some(remaining),
                ..ScoreRequest::new("apple".to_string())
            };
            assert!(score_word(request, &casual(), &ScoringEngine::default()).is_err());
        }
    }

    #[test]
    fn empty_word_rejected() {
        let result = score_word(
            ScoreRequest::new(String::new()),
            &casual(),
            &ScoringEngine::default(),
        );
        assert!(result.is_err());
    }
}
