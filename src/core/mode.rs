//! Difficulty modes
//!
//! A `Mode` fixes how many mistakes a round tolerates and, in the pooled
//! catalog, which words the secret is drawn from. `ModeCatalog` keeps the
//! modes in declaration order; the first one declared is the default.

use crate::config::Config;
use crate::wordlists::{EASY_WORDS, HARD_WORDS};
use std::fmt;

/// A named difficulty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    name: String,
    mistake_budget: u32,
    word_pool: Option<Vec<String>>,
    allows_repeats: bool,
}

/// Error type for mode construction and lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    UnknownMode(String),
    ZeroBudget(String),
    EmptyPool(String),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode(name) => write!(f, "Unknown mode '{name}'"),
            Self::ZeroBudget(name) => {
                write!(f, "Mode {name} must allow at least one mistake")
            }
            Self::EmptyPool(name) => write!(f, "Mode {name} has an empty word pool"),
        }
    }
}

impl std::error::Error for ModeError {}

impl Mode {
    /// Create a mode with the given mistake budget
    ///
    /// The name is stored uppercase and matched case-insensitively.
    ///
    /// # Errors
    /// Returns `ModeError::ZeroBudget` if `mistake_budget` is 0.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Mode;
    ///
    /// let mode = Mode::new("casual", 9).unwrap();
    /// assert_eq!(mode.name(), "CASUAL");
    /// assert_eq!(mode.mistake_budget(), 9);
    ///
    /// assert!(Mode::new("broken", 0).is_err());
    /// ```
    pub fn new(name: &str, mistake_budget: u32) -> Result<Self, ModeError> {
        let name = name.to_uppercase();
        if mistake_budget == 0 {
            return Err(ModeError::ZeroBudget(name));
        }

        Ok(Self {
            name,
            mistake_budget,
            word_pool: None,
            allows_repeats: false,
        })
    }

    /// Attach a dedicated word pool to this mode
    ///
    /// # Errors
    /// Returns `ModeError::EmptyPool` if the pool has no non-empty words.
    pub fn with_word_pool<I, S>(mut self, words: I) -> Result<Self, ModeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pool: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|word| !word.is_empty())
            .collect();

        if pool.is_empty() {
            return Err(ModeError::EmptyPool(self.name));
        }

        self.word_pool = Some(pool);
        Ok(self)
    }

    /// Mark this mode as the one where repeated letters are re-processed
    /// instead of rejected
    #[must_use]
    pub fn allowing_repeats(mut self) -> Self {
        self.allows_repeats = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn mistake_budget(&self) -> u32 {
        self.mistake_budget
    }

    #[inline]
    #[must_use]
    pub fn word_pool(&self) -> Option<&[String]> {
        self.word_pool.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn allows_repeats(&self) -> bool {
        self.allows_repeats
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ordered set of modes a session can be played in
///
/// Only `standard` and `pooled` build one, so there is always a default mode.
#[derive(Debug, Clone)]
pub struct ModeCatalog {
    modes: Vec<Mode>,
}

impl ModeCatalog {
    /// CASUAL, NORMAL and INSANE with budgets taken from the config
    ///
    /// INSANE is the repeats-allowed mode.
    ///
    /// # Errors
    /// Returns `ModeError::ZeroBudget` if any configured budget is 0.
    pub fn standard(config: &Config) -> Result<Self, ModeError> {
        Ok(Self {
            modes: vec![
                Mode::new("casual", config.casual_mistakes)?,
                Mode::new("normal", config.normal_mistakes)?,
                Mode::new("insane", config.insane_mistakes)?.allowing_repeats(),
            ],
        })
    }

    /// EASY and HARD, each with its own word pool
    ///
    /// # Errors
    /// Only fails if the embedded pools are empty.
    pub fn pooled() -> Result<Self, ModeError> {
        Ok(Self {
            modes: vec![
                Mode::new("easy", 7)?.with_word_pool(EASY_WORDS.iter().copied())?,
                Mode::new("hard", 5)?.with_word_pool(HARD_WORDS.iter().copied())?,
            ],
        })
    }

    #[must_use]
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// The first-declared mode
    #[must_use]
    pub fn default_mode(&self) -> &Mode {
        &self.modes[0]
    }

    /// Look a mode up by name, ignoring case
    ///
    /// # Errors
    /// Returns `ModeError::UnknownMode` if no mode has that name. Callers fall
    /// back to [`ModeCatalog::default_mode`] and say so.
    pub fn resolve(&self, name: &str) -> Result<&Mode, ModeError> {
        let wanted = name.trim();
        self.modes
            .iter()
            .find(|mode| mode.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModeError::UnknownMode(wanted.to_string()))
    }

    /// Map a line typed at the mode menu to a mode
    ///
    /// `0` is the first declared mode, `1` the second and so on. Anything
    /// else, including a name or an out-of-range index, gives the default mode.
    #[must_use]
    pub fn interactive_select(&self, line: &str) -> &Mode {
        line.trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| self.modes.get(index))
            .unwrap_or_else(|| self.default_mode())
    }

    /// Menu text shown before `interactive_select`
    #[must_use]
    pub fn menu_lines(&self) -> Vec<String> {
        let mut lines = vec!["Choose a Mode:".to_string()];
        lines.extend(
            self.modes
                .iter()
                .enumerate()
                .map(|(i, mode)| format!("{i} -> {}", mode.name)),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> ModeCatalog {
        ModeCatalog::standard(&Config::default()).unwrap()
    }

    #[test]
    fn standard_catalog_uses_config_budgets() {
        let catalog = standard();
        let budgets: Vec<u32> = catalog.modes().iter().map(Mode::mistake_budget).collect();
        assert_eq!(budgets, vec![9, 7, 5]);
        assert_eq!(catalog.default_mode().name(), "CASUAL");
    }

    #[test]
    fn only_insane_allows_repeats() {
        let catalog = standard();
        let repeats: Vec<bool> = catalog.modes().iter().map(Mode::allows_repeats).collect();
        assert_eq!(repeats, vec![false, false, true]);
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let catalog = standard();
        assert_eq!(catalog.resolve("normal").unwrap().name(), "NORMAL");
        assert_eq!(catalog.resolve("InSaNe").unwrap().name(), "INSANE");
        assert_eq!(catalog.resolve(" CASUAL ").unwrap().name(), "CASUAL");
    }

    #[test]
    fn resolve_unknown_fails() {
        let catalog = standard();
        assert_eq!(
            catalog.resolve("nightmare"),
            Err(ModeError::UnknownMode("nightmare".to_string()))
        );
    }

    #[test]
    fn interactive_select_by_index() {
        let catalog = standard();
        assert_eq!(catalog.interactive_select("0").name(), "CASUAL");
        assert_eq!(catalog.interactive_select("1").name(), "NORMAL");
        assert_eq!(catalog.interactive_select("2\n").name(), "INSANE");
    }

    #[test]
    fn interactive_select_falls_back_to_default() {
        let catalog = standard();
        for line in ["", "3", "-1", "insane", "one", "1.5"] {
            assert_eq!(
                catalog.interactive_select(line).name(),
                "CASUAL",
                "input {line:?} should pick the default"
            );
        }
    }

    #[test]
    fn zero_budget_rejected() {
        assert_eq!(
            Mode::new("casual", 0),
            Err(ModeError::ZeroBudget("CASUAL".to_string()))
        );

        let config = Config {
            normal_mistakes: 0,
            ..Config::default()
        };
        assert!(ModeCatalog::standard(&config).is_err());
    }

    #[test]
    fn empty_pool_rejected() {
        let result = Mode::new("easy", 7).unwrap().with_word_pool(["", ""]);
        assert_eq!(result, Err(ModeError::EmptyPool("EASY".to_string())));
    }

    #[test]
    fn every_catalog_defaults_to_first_mode() {
        let standard = ModeCatalog::standard(&Config::default()).unwrap();
        let pooled = ModeCatalog::pooled().unwrap();
        assert_eq!(standard.default_mode().name(), "CASUAL");
        assert_eq!(pooled.default_mode().name(), "EASY");
    }

    #[test]
    fn pooled_catalog_has_pools() {
        let catalog = ModeCatalog::pooled().unwrap();
        let easy = catalog.resolve("easy").unwrap();
        let hard = catalog.resolve("hard").unwrap();

        assert_eq!(easy.mistake_budget(), 7);
        assert_eq!(hard.mistake_budget(), 5);
        assert_eq!(easy.word_pool().map(<[String]>::len), Some(EASY_WORDS.len()));
        assert!(hard.word_pool().unwrap().iter().any(|w| w == "rhythm"));
        assert_eq!(catalog.interactive_select("7").name(), "EASY");
    }

    #[test]
    fn menu_lists_modes_in_order() {
        assert_eq!(
            standard().menu_lines(),
            vec!["Choose a Mode:", "0 -> CASUAL", "1 -> NORMAL", "2 -> INSANE"]
        );
    }
}
