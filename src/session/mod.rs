//! Game session state machine
//!
//! A `GameSession` owns everything that changes while playing: the chosen
//! mode, the current round, the running score and the random source. It
//! moves through [`SessionState`] one step at a time, reading at most one
//! line of input per step.
//!
//! ```text
//! ModeSelection -> RoundInProgress -> RoundWon  -> RestartPrompt -> RoundInProgress
//!                                  \-> RoundLost -> Terminated      \-> Terminated
//! ```

pub mod console;

pub use console::{Console, ScriptedConsole, StdConsole};

use crate::core::{GuessOutcome, Miss, Mode, ModeCatalog, Round, RoundStatus, Score, ScoringEngine};
use crate::output::formatters::format_letters;
use crate::wordlists::WordSource;
use crate::wordlists::loader::choose_word;
use anyhow::{Context, Result};
use rand::Rng;
use tracing::debug;

/// Where the session is between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    ModeSelection,
    RoundInProgress,
    RoundWon { by_word: bool },
    RoundLost,
    RestartPrompt,
    Terminated,
}

/// What a finished session reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u64,
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub mode: Option<String>,
}

/// One player's run of one or more rounds
pub struct GameSession<R> {
    catalog: ModeCatalog,
    words: WordSource,
    scoring: ScoringEngine,
    rng: R,
    mode: Option<Mode>,
    round: Option<Round>,
    score: Score,
    state: SessionState,
    rounds_played: usize,
    rounds_won: usize,
}

impl<R: Rng> GameSession<R> {
    /// Create a session that starts by asking for a mode
    pub fn new(catalog: ModeCatalog, words: WordSource, scoring: ScoringEngine, rng: R) -> Self {
        Self {
            catalog,
            words,
            scoring,
            rng,
            mode: None,
            round: None,
            score: Score::default(),
            state: SessionState::ModeSelection,
            rounds_played: 0,
            rounds_won: 0,
        }
    }

    /// Play in `mode` without asking the player
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Run until the session terminates
    ///
    /// # Errors
    /// Returns an error if the console fails or no secret word can be drawn.
    ///
    /// # Examples
    /// ```
    /// use hangman::config::Config;
    /// use hangman::core::{ModeCatalog, ScoringEngine};
    /// use hangman::session::{GameSession, ScriptedConsole};
    /// use hangman::wordlists::WordSource;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let catalog = ModeCatalog::standard(&Config::default()).unwrap();
    /// let words = WordSource::from_words(["apple"]).unwrap();
    /// let mut session = GameSession::new(
    ///     catalog,
    ///     words,
    ///     ScoringEngine::default(),
    ///     StdRng::seed_from_u64(1),
    /// );
    ///
    /// let mut console = ScriptedConsole::new(["0", "apple", "no"]);
    /// let summary = session.run(&mut console).unwrap();
    /// assert_eq!(summary.score, 325);
    /// assert!(console.saw("Your final score is >> 325!"));
    /// ```
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<SessionSummary> {
        while self.state != SessionState::Terminated {
            self.step(console)?;
        }
        Ok(self.summary())
    }

    /// Perform a single transition and return the new state
    ///
    /// # Errors
    /// Returns an error if the console fails or no secret word can be drawn.
    pub fn step<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<SessionState> {
        let next = match self.state {
            SessionState::ModeSelection => self.select_mode(console)?,
            SessionState::RoundInProgress => self.play_guess(console)?,
            SessionState::RoundWon { by_word } => self.finish_won(console, by_word)?,
            SessionState::RoundLost => self.finish_lost(console)?,
            SessionState::RestartPrompt => self.prompt_restart(console)?,
            SessionState::Terminated => SessionState::Terminated,
        };

        if next != self.state {
            debug!(from = ?self.state, to = ?next, "session transition");
        }
        self.state = next;
        Ok(next)
    }

    fn select_mode<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<SessionState> {
        if self.mode.is_none() {
            for line in self.catalog.menu_lines() {
                console.write_line(&line)?;
            }
            let line = read_or_empty(console)?;
            let mode = self.catalog.interactive_select(&line).clone();
            debug!(input = %line, mode = %mode, "mode selected");
            self.mode = Some(mode);
        }

        self.start_round()
    }

    fn start_round(&mut self) -> Result<SessionState> {
        let mode = self.mode.as_ref().context("round started before a mode was chosen")?;

        let secret = match mode.word_pool() {
            Some(pool) => choose_word(pool, &mut self.rng),
            None => self.words.choose(&mut self.rng),
        }
        .context("cannot draw a secret word")?;

        debug!(mode = %mode, secret, "round started");
        self.round = Some(Round::new(secret, mode.mistake_budget(), mode.allows_repeats()));
        self.rounds_played += 1;
        Ok(SessionState::RoundInProgress)
    }

    fn play_guess<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<SessionState> {
        let round = self.round.as_mut().context("no round in progress")?;

        console.write_line(&format!("Word Progress          : {}", round.progress_text()))?;
        console.write_line(&format!(
            "Letters guessed so far : {}",
            format_letters(round.guessed_letters())
        ))?;
        console.write_line(&format!(
            "Mistakes left          : {}",
            round.remaining_mistakes()
        ))?;
        console.write_line("Choose a letter or guess the word.")?;

        let guess = read_or_empty(console)?;
        match round.guess(&guess) {
            GuessOutcome::Revealed { .. } | GuessOutcome::Solved { by_word: false } => {
                console.write_line("Correct.")?;
            }
            GuessOutcome::Solved { by_word: true } => {}
            GuessOutcome::Missed(miss) => {
                console.write_line("Incorrect.")?;
                if miss == Miss::EmptyGuess {
                    console.write_line("Please guess a letter or the whole word.")?;
                }
            }
            GuessOutcome::Repeated(_) => {
                console.write_line("You have already guessed this letter. Try another one.")?;
            }
        }

        Ok(match round.status() {
            RoundStatus::InProgress => SessionState::RoundInProgress,
            RoundStatus::Won { by_word } => SessionState::RoundWon { by_word },
            RoundStatus::Lost => SessionState::RoundLost,
        })
    }

    fn finish_won<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        by_word: bool,
    ) -> Result<SessionState> {
        let round = self.round.take().context("no round to score")?;
        let mode = self.mode.as_ref().context("round won without a mode")?;

        console.write_line("You got the right answer.")?;
        let delta = self.scoring.award(
            &mut self.score,
            round.secret(),
            mode,
            round.remaining_mistakes(),
            by_word,
        );
        debug!(delta, total = self.score.value(), by_word, "round won");

        self.rounds_won += 1;
        Ok(SessionState::RestartPrompt)
    }

    fn finish_lost<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<SessionState> {
        let round = self.round.take().context("no round to end")?;
        console.write_line(&format!("The word was {}.", round.secret()))?;
        self.terminate(console)
    }

    fn prompt_restart<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<SessionState> {
        console.write_line("Would you like to play again? Yes/No:")?;
        let choice = read_or_empty(console)?;
        let choice = choice.trim();

        if choice.eq_ignore_ascii_case("yes") || choice.eq_ignore_ascii_case("y") {
            self.start_round()
        } else {
            self.terminate(console)
        }
    }

    fn terminate<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<SessionState> {
        console.write_line(&format!("Your final score is >> {}!", self.score.value()))?;
        Ok(SessionState::Terminated)
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub const fn mode(&self) -> Option<&Mode> {
        self.mode.as_ref()
    }

    /// The round being played, if any
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score.value(),
            rounds_played: self.rounds_played,
            rounds_won: self.rounds_won,
            mode: self.mode.as_ref().map(|mode| mode.name().to_string()),
        }
    }
}

/// Read a line, treating end of input as an empty line
fn read_or_empty<C: Console + ?Sized>(console: &mut C) -> Result<String> {
    Ok(console
        .read_line()
        .context("failed to read player input")?
        .unwrap_or_default())
}
