//! Keyboard status aggregation
//!
//! Folds scored guesses into the best status seen per letter, used to color
//! the on-screen keyboard. Statuses only ever improve within a game.

use super::{Feedback, TileStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Best status observed for each letter this game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyboardStatus(BTreeMap<char, TileStatus>);

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new map with `feedback` folded in
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, KeyboardStatus, TileStatus, Word};
    ///
    /// let solution = Word::new("apple").unwrap();
    /// let feedback = Feedback::evaluate(&Word::new("plant").unwrap(), &solution);
    ///
    /// let keyboard = KeyboardStatus::new().aggregate(&feedback);
    /// assert_eq!(keyboard.status_of('P'), TileStatus::Present);
    /// assert_eq!(keyboard.status_of('T'), TileStatus::Absent);
    /// assert_eq!(keyboard.status_of('Z'), TileStatus::Empty);
    /// ```
    #[must_use]
    pub fn aggregate(&self, feedback: &Feedback) -> Self {
        let mut next = self.clone();
        next.record(feedback);
        next
    }

    /// Fold `feedback` into this map in place
    pub fn record(&mut self, feedback: &Feedback) {
        for (letter, status) in feedback.iter() {
            let current = self.status_of(letter);
            if status.priority() > current.priority() {
                self.0.insert(letter, status);
            }
        }
    }

    /// Status for a letter, `Empty` if never guessed
    #[must_use]
    pub fn status_of(&self, letter: char) -> TileStatus {
        self.0
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
