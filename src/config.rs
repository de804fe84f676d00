//! Game settings
//!
//! Settings live in a small JSON file (`config.json` by default). A missing
//! file is replaced by the defaults, which are written back so the player has
//! something to edit. A broken file is left alone and the defaults are used.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Default location of the settings file
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Tunable numbers for modes and scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub casual_mistakes: u32,
    pub normal_mistakes: u32,
    pub insane_mistakes: u32,
    pub score_factor: f64,
    pub word_guess_bonus: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            casual_mistakes: 9,
            normal_mistakes: 7,
            insane_mistakes: 5,
            score_factor: 13.0,
            word_guess_bonus: 1.25,
        }
    }
}

/// Error type for reading and validating settings
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Could not access config file: {e}"),
            Self::Parse(e) => write!(f, "Config file is not valid JSON: {e}"),
            Self::Invalid(reason) => write!(f, "Invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Where the active settings came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Settings plus the notices the player should see about them
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub notices: Vec<String>,
}

impl Config {
    /// Check the invariants modes and scoring rely on
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.casual_mistakes == 0 || self.normal_mistakes == 0 || self.insane_mistakes == 0 {
            return Err(ConfigError::Invalid("mistake counts must be at least 1"));
        }
        if !(self.score_factor.is_finite() && self.score_factor > 0.0) {
            return Err(ConfigError::Invalid("scoreFactor must be a positive number"));
        }
        if !(self.word_guess_bonus.is_finite() && self.word_guess_bonus >= 1.0) {
            return Err(ConfigError::Invalid("wordGuessBonus must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text
    ///
    /// Keys that are missing take their default values.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::Invalid` for out-of-range values.
    ///
    /// # Examples
    /// ```
    /// use hangman::config::Config;
    ///
    /// let config = Config::from_json(r#"{"casualMistakes": 12}"#).unwrap();
    /// assert_eq!(config.casual_mistakes, 12);
    /// assert_eq!(config.normal_mistakes, 7);
    ///
    /// assert!(Config::from_json(r#"{"insaneMistakes": 0}"#).is_err());
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read settings from `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Write these settings to `path` as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Read settings, falling back to the defaults
    ///
    /// Never fails: a missing file gets the defaults written in its place,
    /// any other problem is logged and the defaults are used as-is.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> LoadedConfig {
        let path = path.as_ref();

        match Self::load(path) {
            Ok(config) => {
                debug!(path = %path.display(), ?config, "loaded config");
                LoadedConfig {
                    config,
                    source: ConfigSource::File,
                    notices: Vec::new(),
                }
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                let config = Self::default();
                let mut notices = vec!["Config file not found, using default settings".to_string()];

                match config.save(path) {
                    Ok(()) => notices.push("Default settings written to config".to_string()),
                    Err(e) => warn!(path = %path.display(), "could not write default config: {e}"),
                }

                LoadedConfig {
                    config,
                    source: ConfigSource::Defaults,
                    notices,
                }
            }
            Err(e) => {
                warn!(path = %path.display(), "{e}");
                LoadedConfig {
                    config: Self::default(),
                    source: ConfigSource::Defaults,
                    notices: vec![format!("{e}; using default settings")],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "hangman-config-{}-{name}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.casual_mistakes, 9);
        assert_eq!(config.normal_mistakes, 7);
        assert_eq!(config.insane_mistakes, 5);
        assert!((config.score_factor - 13.0).abs() < f64::EPSILON);
        assert!((config.word_guess_bonus - 1.25).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["casualMistakes"], 9);
        assert_eq!(json["wordGuessBonus"], 1.25);
    }

    #[test]
    fn integer_score_factor_is_accepted() {
        let config = Config::from_json(r#"{"scoreFactor": 20}"#).unwrap();
        assert!((config.score_factor - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            Config::from_json(r#"{"scoreFactor": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"wordGuessBonus": 0.5}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_writes_defaults() {
        let path = scratch_path("missing");

        let loaded = Config::load_or_default(&path);
        assert_eq!(loaded.source, ConfigSource::Defaults);
        assert_eq!(loaded.config, Config::default());
        assert_eq!(loaded.notices.len(), 2);

        // The second load reads what the first one wrote
        let reloaded = Config::load_or_default(&path);
        assert_eq!(reloaded.source, ConfigSource::File);
        assert_eq!(reloaded.config, Config::default());
        assert!(reloaded.notices.is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn existing_file_is_read() {
        let path = scratch_path("existing");
        fs::write(&path, r#"{"casualMistakes": 3, "scoreFactor": 7.5}"#).unwrap();

        let loaded = Config::load_or_default(&path);
        assert_eq!(loaded.source, ConfigSource::File);
        assert_eq!(loaded.config.casual_mistakes, 3);
        assert_eq!(loaded.config.insane_mistakes, 5);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn broken_file_is_not_overwritten() {
        let path = scratch_path("broken");
        fs::write(&path, "casualMistakes = 3").unwrap();

        let loaded = Config::load_or_default(&path);
        assert_eq!(loaded.source, ConfigSource::Defaults);
        assert_eq!(loaded.config, Config::default());
        assert_eq!(loaded.notices.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "casualMistakes = 3");

        fs::remove_file(&path).unwrap();
    }
}
