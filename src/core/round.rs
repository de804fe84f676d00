//! Round state and guess evaluation
//!
//! A `Round` owns everything that lives for one secret word: the word itself,
//! the revealed positions, the mistakes left and the letters tried so far.

use std::fmt;

/// Character shown for a position that has not been revealed yet
pub const PLACEHOLDER: char = '-';

/// Why a guess cost a mistake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// Whole-word guess that did not match
    WrongWord,
    /// Nothing was typed
    EmptyGuess,
    /// Single letter that is not in the word
    AbsentLetter(char),
}

/// Result of evaluating one guess line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A present letter, with the number of positions it occupies
    Revealed { letter: char, occurrences: usize },
    /// The word is complete
    Solved { by_word: bool },
    /// A mistake was charged
    Missed(Miss),
    /// Letter already tried in a mode that rejects repeats; nothing changed
    Repeated(char),
}

/// Where the round stands after the last guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won { by_word: bool },
    Lost,
}

/// Mutable state of a single round
#[derive(Debug, Clone)]
pub struct Round {
    secret: String,
    progress: Vec<Option<char>>,
    remaining_mistakes: u32,
    guessed: Vec<char>,
    allows_repeats: bool,
    status: RoundStatus,
}

impl Round {
    /// Start a round for `secret` with `mistake_budget` mistakes allowed
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessOutcome, Round, RoundStatus};
    ///
    /// let mut round = Round::new("kayak", 5, false);
    /// assert_eq!(round.progress_text(), "-----");
    ///
    /// round.guess("k");
    /// assert_eq!(round.progress_text(), "k---k");
    ///
    /// assert_eq!(round.guess("kayak"), GuessOutcome::Solved { by_word: true });
    /// assert_eq!(round.status(), RoundStatus::Won { by_word: true });
    /// ```
    #[must_use]
    pub fn new(secret: impl Into<String>, mistake_budget: u32, allows_repeats: bool) -> Self {
        let secret = secret.into();
        let progress = vec![None; secret.chars().count()];

        Self {
            secret,
            progress,
            remaining_mistakes: mistake_budget,
            guessed: Vec::new(),
            allows_repeats,
            status: RoundStatus::InProgress,
        }
    }

    /// Evaluate one line of player input
    ///
    /// Input of more than one character is a whole-word guess, an empty line
    /// is always a mistake, and a single character is a letter guess. Callers
    /// stop asking once [`Round::status`] leaves `InProgress`.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        debug_assert_eq!(self.status, RoundStatus::InProgress);

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => self.miss(Miss::EmptyGuess),
            (Some(letter), None) => self.guess_letter(letter),
            (Some(_), Some(_)) => {
                if input == self.secret {
                    self.reveal_all();
                    self.win(true)
                } else {
                    self.miss(Miss::WrongWord)
                }
            }
        }
    }

    fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if self.guessed.contains(&letter) {
            if !self.allows_repeats {
                return GuessOutcome::Repeated(letter);
            }
        } else {
            self.guessed.push(letter);
        }

        let occurrences = self.reveal(letter);
        if occurrences == 0 {
            return self.miss(Miss::AbsentLetter(letter));
        }

        if self.is_revealed() {
            self.win(false)
        } else {
            GuessOutcome::Revealed {
                letter,
                occurrences,
            }
        }
    }

    /// Reveal every position holding `letter`, returning how many there are
    fn reveal(&mut self, letter: char) -> usize {
        let mut count = 0;
        for (slot, ch) in self.progress.iter_mut().zip(self.secret.chars()) {
            if ch == letter {
                *slot = Some(ch);
                count += 1;
            }
        }
        count
    }

    fn reveal_all(&mut self) {
        for (slot, ch) in self.progress.iter_mut().zip(self.secret.chars()) {
            *slot = Some(ch);
        }
    }

    fn win(&mut self, by_word: bool) -> GuessOutcome {
        self.status = RoundStatus::Won { by_word };
        GuessOutcome::Solved { by_word }
    }

    fn miss(&mut self, miss: Miss) -> GuessOutcome {
        self.remaining_mistakes = self.remaining_mistakes.saturating_sub(1);
        if self.remaining_mistakes == 0 {
            self.status = RoundStatus::Lost;
        }
        GuessOutcome::Missed(miss)
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn remaining_mistakes(&self) -> u32 {
        self.remaining_mistakes
    }

    /// Letters tried so far, in the order they were first guessed
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub fn progress(&self) -> &[Option<char>] {
        &self.progress
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.progress.iter().all(Option::is_some)
    }

    /// Progress with unrevealed positions shown as [`PLACEHOLDER`]
    #[must_use]
    pub fn progress_text(&self) -> String {
        self.progress
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
            .collect()
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.progress_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_is_all_placeholders() {
        let round = Round::new("apple", 9, false);
        assert_eq!(round.progress_text(), "-----");
        assert_eq!(round.remaining_mistakes(), 9);
        assert!(round.guessed_letters().is_empty());
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn letter_reveals_every_occurrence() {
        let mut round = Round::new("apple", 9, false);
        assert_eq!(
            round.guess("p"),
            GuessOutcome::Revealed {
                letter: 'p',
                occurrences: 2
            }
        );
        assert_eq!(round.progress_text(), "-pp--");
        assert_eq!(round.remaining_mistakes(), 9);
    }

    #[test]
    fn absent_letter_costs_one_mistake() {
        let mut round = Round::new("apple", 9, false);
        assert_eq!(round.guess("z"), GuessOutcome::Missed(Miss::AbsentLetter('z')));
        assert_eq!(round.remaining_mistakes(), 8);
        assert_eq!(round.guessed_letters(), &['z']);
    }

    #[test]
    fn empty_guess_costs_one_mistake_and_reveals_nothing() {
        let mut round = Round::new("apple", 9, false);
        assert_eq!(round.guess(""), GuessOutcome::Missed(Miss::EmptyGuess));
        assert_eq!(round.remaining_mistakes(), 8);
        assert_eq!(round.progress_text(), "-----");
        assert!(round.guessed_letters().is_empty());
    }

    #[test]
    fn wrong_word_costs_one_mistake() {
        let mut round = Round::new("apple", 9, false);
        assert_eq!(round.guess("apply"), GuessOutcome::Missed(Miss::WrongWord));
        assert_eq!(round.remaining_mistakes(), 8);
        assert_eq!(round.progress_text(), "-----");
    }

    #[test]
    fn whole_word_comparison_is_exact() {
        let mut round = Round::new("apple", 9, false);
        assert_eq!(round.guess("Apple"), GuessOutcome::Missed(Miss::WrongWord));
        assert_eq!(round.guess("apple "), GuessOutcome::Missed(Miss::WrongWord));
    }

    #[test]
    fn whole_word_guess_wins() {
        let mut round = Round::new("apple", 9, false);
        round.guess("x");
        assert_eq!(round.guess("apple"), GuessOutcome::Solved { by_word: true });
        assert_eq!(round.status(), RoundStatus::Won { by_word: true });
        assert!(round.is_revealed());
        assert_eq!(round.progress_text(), "apple");
    }

    #[test]
    fn revealing_every_letter_wins() {
        let mut round = Round::new("apple", 9, false);
        round.guess("a");
        round.guess("p");
        round.guess("l");
        assert_eq!(round.guess("e"), GuessOutcome::Solved { by_word: false });
        assert_eq!(round.status(), RoundStatus::Won { by_word: false });
        assert_eq!(round.guessed_letters(), &['a', 'p', 'l', 'e']);
    }

    #[test]
    fn repeated_letter_rejected_without_cost() {
        let mut round = Round::new("apple", 9, false);
        round.guess("p");
        round.guess("z");
        let before = (round.remaining_mistakes(), round.progress_text());

        assert_eq!(round.guess("p"), GuessOutcome::Repeated('p'));
        assert_eq!(round.guess("z"), GuessOutcome::Repeated('z'));
        assert_eq!((round.remaining_mistakes(), round.progress_text()), before);
        assert_eq!(round.guessed_letters(), &['p', 'z']);
    }

    #[test]
    fn repeats_reprocessed_when_allowed() {
        let mut round = Round::new("apple", 5, true);
        round.guess("p");
        assert_eq!(
            round.guess("p"),
            GuessOutcome::Revealed {
                letter: 'p',
                occurrences: 2
            }
        );
        assert_eq!(round.remaining_mistakes(), 5);

        round.guess("z");
        assert_eq!(round.guess("z"), GuessOutcome::Missed(Miss::AbsentLetter('z')));
        assert_eq!(round.remaining_mistakes(), 3);
        assert_eq!(round.guessed_letters(), &['p', 'z']);
    }

    #[test]
    fn running_out_of_mistakes_loses_at_exactly_zero() {
        let mut round = Round::new("sly", 2, false);
        round.guess("a");
        assert_eq!(round.status(), RoundStatus::InProgress);
        round.guess("");
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.remaining_mistakes(), 0);
    }

    #[test]
    fn mistakes_never_increase() {
        let mut round = Round::new("rhythm", 7, false);
        let mut last = round.remaining_mistakes();
        for guess in ["r", "a", "", "rhyme", "h", "a", "e"] {
            round.guess(guess);
            assert!(round.remaining_mistakes() <= last);
            last = round.remaining_mistakes();
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn single_letter_secret_won_by_letter() {
        let mut round = Round::new("a", 3, false);
        assert_eq!(round.guess("a"), GuessOutcome::Solved { by_word: false });
    }

    #[test]
    fn multibyte_letters_count_as_single_characters() {
        let mut round = Round::new("ĉevalo", 5, false);
        assert_eq!(round.progress_text(), "------");
        assert_eq!(
            round.guess("ĉ"),
            GuessOutcome::Revealed {
                letter: 'ĉ',
                occurrences: 1
            }
        );
        assert_eq!(round.to_string(), "ĉ-----");
    }
}
