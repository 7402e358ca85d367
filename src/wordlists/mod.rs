//! Word lists and solution selection
//!
//! Provides the embedded word list compiled into the binary, custom list
//! loading, and the `WordList` word source used by the game.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {} contains no valid 5-letter words", .0.display())]
    Empty(PathBuf),
}

/// Fixed, non-empty set of playable words
///
/// Every solution is drawn from this set and every guess must belong to it.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<[u8; 5]>,
}

impl WordList {
    /// Build a list from words, dropping duplicates while keeping order
    ///
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(*word.chars()))
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(Self { words, index })
        }
    }

    /// The list compiled into the binary
    ///
    /// # Panics
    /// Panics if the embedded list is empty, which the build script rules out.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS)).expect("embedded word list is never empty")
    }

    /// Load a custom list from a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or has no valid words.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, WordListError> {
        let path = path.into();
        let words = loader::load_from_file(&path)?;
        Self::new(words).ok_or(WordListError::Empty(path))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a `WordList` cannot be built empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Case-insensitive membership test
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let words = WordList::embedded();
    /// assert!(words.is_valid_word("apple"));
    /// assert!(words.is_valid_word("APPLE"));
    /// assert!(!words.is_valid_word("qwert"));
    /// assert!(!words.is_valid_word("apples"));
    /// ```
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains(&w))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Uniformly random word
    #[must_use]
    pub fn random_word(&self) -> &Word {
        self.random_word_with(&mut rand::rng())
    }

    /// Uniformly random word drawn from the given generator
    ///
    /// # Panics
    /// Never panics: the list is non-empty by construction.
    #[must_use]
    pub fn random_word_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .expect("word list is never empty")
    }

    /// Deterministic word for a calendar date
    ///
    /// Same date, same word. See [`date_key`] and [`seed_hash`].
    #[must_use]
    pub fn daily_word(&self, date: NaiveDate) -> &Word {
        self.word_for_seed(&date_key(date))
    }

    /// Deterministic word for an arbitrary seed string
    #[must_use]
    pub fn word_for_seed(&self, seed: &str) -> &Word {
        let index = seed_hash(seed).unsigned_abs() as usize % self.words.len();
        &self.words[index]
    }
}

/// Calendar key for a date: `year-month-day` without zero padding
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_game::wordlists::date_key;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(date_key(date), "2024-1-5");
/// ```
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Polynomial string hash (`h * 31 + c`) with 32-bit signed wraparound
#[must_use]
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_keeps_every_word() {
        let list = WordList::embedded();
        assert_eq!(list.len(), WORDS_COUNT);
        assert_eq!(list.words()[0].text(), "APPLE");
        assert!(!list.is_empty());
    }

    #[test]
    fn new_rejects_empty_and_drops_duplicates() {
        assert!(WordList::new(Vec::new()).is_none());

        let list = WordList::new(loader::words_from_slice(&["apple", "APPLE", "grape"])).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let list = WordList::embedded();
        assert!(list.is_valid_word("zesty"));
        assert!(list.is_valid_word("ZeStY"));
        assert!(!list.is_valid_word("zzzzz"));
        assert!(!list.is_valid_word(""));
    }

    #[test]
    fn random_word_comes_from_list() {
        let list = WordList::embedded();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(list.contains(list.random_word_with(&mut rng)));
        }
        assert!(list.contains(list.random_word()));
    }

    #[test]
    fn seed_hash_wraps_like_32_bit_integers() {
        assert_eq!(seed_hash(""), 0);
        assert_eq!(seed_hash("a"), 97);
        assert_eq!(seed_hash("2024-1-1"), -1_922_422_968);
        assert_eq!(seed_hash("2026-10-17"), 1_162_559_497);
    }

    #[test]
    fn daily_word_matches_reference_selection() {
        let list = WordList::embedded();
        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        assert_eq!(list.daily_word(day(2024, 1, 1)).text(), "JUICE");
        assert_eq!(list.daily_word(day(2025, 12, 31)).text(), "CHALK");
        assert_eq!(list.daily_word(day(2026, 10, 17)).text(), "YOUTH");
    }

    #[test]
    fn daily_word_is_deterministic() {
        let list = WordList::embedded();
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(list.daily_word(date), list.daily_word(date));
    }

    #[test]
    fn date_key_is_not_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(date_key(date), "2025-3-9");
    }
}
