//! Interactive play command
//!
//! Wires a mode catalog, word source and scoring engine into a
//! [`GameSession`] and runs it over a console.

use crate::core::{Mode, ModeCatalog, ScoringEngine};
use crate::session::{Console, GameSession, SessionSummary};
use crate::wordlists::WordSource;
use anyhow::Result;
use rand::Rng;
use tracing::warn;

/// Everything a session needs besides randomness and a console
pub struct PlaySetup {
    pub catalog: ModeCatalog,
    pub words: WordSource,
    pub scoring: ScoringEngine,
    /// Mode chosen up front; `None` shows the mode menu
    pub mode: Option<Mode>,
}

/// Look up a mode by name, falling back to the catalog default
///
/// An unknown name is reported with a warning naming the mode used instead.
#[must_use]
pub fn resolve_mode_or_default<'a>(catalog: &'a ModeCatalog, name: &str) -> &'a Mode {
    catalog.resolve(name).unwrap_or_else(|e| {
        let fallback = catalog.default_mode();
        warn!("{e}, playing {fallback} instead");
        fallback
    })
}

/// Play a full session
///
/// # Errors
///
/// Returns an error if the console fails or no secret word can be drawn.
///
/// # Examples
/// ```no_run
/// use hangman::commands::{PlaySetup, run_play};
/// use hangman::config::Config;
/// use hangman::core::{ModeCatalog, ScoringEngine};
/// use hangman::session::StdConsole;
/// use hangman::wordlists::WordSource;
///
/// let setup = PlaySetup {
///     catalog: ModeCatalog::standard(&Config::default()).unwrap(),
///     words: WordSource::builtin(),
///     scoring: ScoringEngine::default(),
///     mode: None,
/// };
/// let summary = run_play(setup, rand::rng(), &mut StdConsole::stdio()).unwrap();
/// println!("{}", summary.score);
/// ```
pub fn run_play<R: Rng, C: Console + ?Sized>(
    setup: PlaySetup,
    rng: R,
    console: &mut C,
) -> Result<SessionSummary> {
    let PlaySetup {
        catalog,
        words,
        scoring,
        mode,
    } = setup;

    let mut session = GameSession::new(catalog, words, scoring, rng);
    if let Some(mode) = mode {
        session = session.with_mode(mode);
    }

    session.run(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::ScriptedConsole;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> ModeCatalog {
        ModeCatalog::standard(&Config::default()).unwrap()
    }

    #[test]
    fn unknown_name_gives_default() {
        let catalog = catalog();
        assert_eq!(resolve_mode_or_default(&catalog, "expert").name(), "CASUAL");
        assert_eq!(resolve_mode_or_default(&catalog, "Insane").name(), "INSANE");
    }

    #[test]
    fn preset_mode_skips_menu() {
        let catalog = catalog();
        let mode = resolve_mode_or_default(&catalog, "normal").clone();
        let setup = PlaySetup {
            catalog,
            words: WordSource::from_words(["quad"]).unwrap(),
            scoring: ScoringEngine::default(),
            mode: Some(mode),
        };

        let mut console = ScriptedConsole::new(["quad", "no"]);
        let summary = run_play(setup, StdRng::seed_from_u64(5), &mut console).unwrap();

        assert_eq!(summary.mode.as_deref(), Some("NORMAL"));
        assert!(!console.saw("Choose a Mode"));
        // 13 * (26 - 4) + 182 - 208 = 260, times 1.25
        assert_eq!(summary.score, 325);
    }

    #[test]
    fn menu_shown_without_preset() {
        let setup = PlaySetup {
            catalog: catalog(),
            words: WordSource::from_words(["sly"]).unwrap(),
            scoring: ScoringEngine::default(),
            mode: None,
        };

        let mut console = ScriptedConsole::new(["2", "s", "l", "y", "no"]);
        let summary = run_play(setup, StdRng::seed_from_u64(5), &mut console).unwrap();

        assert!(console.saw("Choose a Mode:"));
        assert_eq!(summary.mode.as_deref(), Some("INSANE"));
        // 13 * (26 - 3) + 182 - 208 = 273
        assert_eq!(summary.score, 273);
    }
}
