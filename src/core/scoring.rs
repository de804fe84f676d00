//! Score calculation
//!
//! A win is worth more when the word has many distinct letters and when few
//! mistakes were spent on it. Solving with a single whole-word guess applies
//! a multiplicative bonus.
//!
//! ```text
//! unique = distinct characters in the word
//! used   = max(budget - remaining, 1)
//! base   = max(F, F * (2F - unique) + ceil(14F / used) - 16F)
//! delta  = round_half_even(base * (B if by_word else 1))
//! ```

use crate::config::Config;
use crate::core::Mode;
use rustc_hash::FxHashSet;

/// Intermediate values of a score calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub unique_letters: usize,
    pub used_mistakes: u32,
    pub base: f64,
    pub multiplier: f64,
    pub delta: u64,
}

/// Pure scoring function parameterised by the score factor and word bonus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringEngine {
    score_factor: f64,
    word_guess_bonus: f64,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ScoringEngine {
    #[must_use]
    pub const fn new(score_factor: f64, word_guess_bonus: f64) -> Self {
        Self {
            score_factor,
            word_guess_bonus,
        }
    }

    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.score_factor, config.word_guess_bonus)
    }

    /// Work out every term of the score for a won round
    #[must_use]
    pub fn breakdown(
        &self,
        secret: &str,
        mode: &Mode,
        remaining_mistakes: u32,
        by_word: bool,
    ) -> ScoreBreakdown {
        let f = self.score_factor;
        let unique_letters = secret.chars().collect::<FxHashSet<char>>().len();
        let used_mistakes = mode
            .mistake_budget()
            .saturating_sub(remaining_mistakes)
            .max(1);

        let formula = f * (2.0 * f - unique_letters as f64)
            + (14.0 * f / f64::from(used_mistakes)).ceil()
            - 16.0 * f;
        let base = formula.max(f);
        let multiplier = if by_word { self.word_guess_bonus } else { 1.0 };
        let delta = (base * multiplier).round_ties_even().max(0.0) as u64;

        ScoreBreakdown {
            unique_letters,
            used_mistakes,
            base,
            multiplier,
            delta,
        }
    }

    /// Points earned by a won round
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Mode, ScoringEngine};
    ///
    /// let casual = Mode::new("casual", 9).unwrap();
    /// let engine = ScoringEngine::default();
    ///
    /// assert_eq!(engine.compute_delta("apple", &casual, 9, true), 325);
    /// assert_eq!(engine.compute_delta("apple", &casual, 9, false), 260);
    /// ```
    #[must_use]
    pub fn compute_delta(
        &self,
        secret: &str,
        mode: &Mode,
        remaining_mistakes: u32,
        by_word: bool,
    ) -> u64 {
        self.breakdown(secret, mode, remaining_mistakes, by_word).delta
    }

    /// Add the points for a won round to `score`, returning them
    pub fn award(
        &self,
        score: &mut Score,
        secret: &str,
        mode: &Mode,
        remaining_mistakes: u32,
        by_word: bool,
    ) -> u64 {
        let delta = self.compute_delta(secret, mode, remaining_mistakes, by_word);
        score.add(delta);
        delta
    }
}

/// Session-wide score; only ever grows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(u64);

impl Score {
    fn add(&mut self, delta: u64) {
        self.0 = self.0.saturating_add(delta);
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}
