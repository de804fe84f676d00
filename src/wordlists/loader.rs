//! Word list loading utilities
//!
//! A `WordSource` is never empty: building one from an empty list fails, and
//! [`WordSource::load`] falls back to the embedded list instead of failing.

use super::DEFAULT_WORDS;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Error type for word list problems
#[derive(Debug)]
pub enum WordSourceError {
    Unreadable { path: PathBuf, source: io::Error },
    EmptySource,
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "Cannot read word list {}: {source}", path.display())
            }
            Self::EmptySource => write!(f, "Word list contains no words"),
        }
    }
}

impl std::error::Error for WordSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::EmptySource => None,
        }
    }
}

/// Ordered, non-empty pool of candidate secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Vec<String>,
}

impl Default for WordSource {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WordSource {
    /// The embedded default list
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|&w| w.to_string()).collect(),
        }
    }

    /// Build a source from words, dropping empty entries
    ///
    /// # Errors
    /// Returns `WordSourceError::EmptySource` if nothing is left.
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::WordSource;
    ///
    /// let source = WordSource::from_words(["topaz", "", "quark"]).unwrap();
    /// assert_eq!(source.words(), &["topaz", "quark"]);
    ///
    /// assert!(WordSource::from_words([""]).is_err());
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, WordSourceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            Err(WordSourceError::EmptySource)
        } else {
            Ok(Self { words })
        }
    }

    /// Read one word per line from a file
    ///
    /// Only the line terminator (`\n` or `\r\n`) is stripped; blank lines are skipped.
    ///
    /// # Errors
    /// Returns `Unreadable` if the file cannot be read as UTF-8 text and
    /// `EmptySource` if it holds no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WordSourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_words(content.lines())
    }

    /// Load the player's list, or the embedded one
    ///
    /// With no path the embedded list is used. A path that cannot be used is
    /// reported as a warning and the embedded list is used instead.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };

        match Self::from_file(path) {
            Ok(source) => {
                debug!(path = %path.display(), words = source.len(), "loaded word list");
                source
            }
            Err(e) => {
                warn!("{e}. Defaulting to the built-in word list");
                Self::builtin()
            }
        }
    }

    /// Pick a word uniformly at random
    ///
    /// # Errors
    /// Returns `WordSourceError::EmptySource` if there is nothing to pick,
    /// which construction rules out.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, WordSourceError> {
        choose_word(&self.words, rng)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Pick a word uniformly at random from any slice of words
///
/// # Errors
/// Returns `WordSourceError::EmptySource` if `words` is empty.
pub fn choose_word<'a, R: Rng + ?Sized>(
    words: &'a [String],
    rng: &mut R,
) -> Result<&'a str, WordSourceError> {
    words
        .choose(rng)
        .map(String::as_str)
        .ok_or(WordSourceError::EmptySource)
}
