//! Game session: state, statistics and persistence
//!
//! A session owns the running `GameState` and writes it to the injected
//! `KeyValueStore` after every change, so a game can be resumed later the
//! same day. Finished games update the statistics exactly once.

use super::state::{GameState, Transition};
use crate::config::{ConfigError, GameConfig, WordMode};
use crate::core::Word;
use crate::stats::{self, Stats};
use crate::storage::{self, KeyValueStore};
use crate::wordlists::{WordList, date_key};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store key of the saved game blob
pub const GAME_KEY: &str = "game_state";

/// Store key of the first-visit flag
pub const VISITED_KEY: &str = "has_visited";

/// Persisted game together with the day it was played
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub date: String,
    pub state: GameState,
}

/// One player's game, bound to a store
pub struct GameSession<S: KeyValueStore> {
    store: S,
    words: WordList,
    config: GameConfig,
    today: NaiveDate,
    state: GameState,
    stats: Stats,
    first_visit: bool,
    restored: bool,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Open a session for `today`
    ///
    /// Restores the saved game when it belongs to today and still matches
    /// the configuration, otherwise starts a fresh one. Missing or corrupt
    /// blobs are treated as absent.
    ///
    /// # Errors
    /// Returns an error if `config` does not validate against `words`.
    pub fn open(
        store: S,
        words: WordList,
        config: GameConfig,
        today: NaiveDate,
    ) -> Result<Self, ConfigError> {
        config.validate(&words)?;
        let rows = config.max_rows;
        let stats = Stats::load(&store, rows);

        let first_visit = !matches!(store.get(VISITED_KEY), Ok(Some(_)));
        if first_visit && let Err(e) = store.set(VISITED_KEY, "true") {
            tracing::warn!("Failed to record first visit: {e}");
        }

        let restored_state = Self::restore(&store, &words, &config, today);
        let restored = restored_state.is_some();
        let state = restored_state.unwrap_or_else(|| {
            GameState::new(Self::initial_solution(&words, &config, today), rows)
        });

        tracing::info!(
            mode = ?config.mode,
            rows,
            restored,
            first_visit,
            "Opened game session"
        );

        let session = Self {
            store,
            words,
            config,
            today,
            state,
            stats,
            first_visit,
            restored,
        };
        if !restored {
            session.persist();
        }
        Ok(session)
    }

    fn restore(
        store: &S,
        words: &WordList,
        config: &GameConfig,
        today: NaiveDate,
    ) -> Option<GameState> {
        if config.solution.is_some() {
            tracing::debug!("Solution override set, not restoring saved game");
            return None;
        }

        let saved: SavedGame = storage::load_json(store, GAME_KEY)?;

        if saved.date != date_key(today) {
            tracing::debug!("Saved game from {} is stale", saved.date);
            return None;
        }
        if let Err(e) = saved.state.validate() {
            tracing::warn!("Discarding invalid saved game: {e}");
            return None;
        }
        if saved.state.row_count() != config.max_rows {
            tracing::debug!(
                "Saved game has {} rows, configured {}",
                saved.state.row_count(),
                config.max_rows
            );
            return None;
        }
        if !words.contains(saved.state.solution()) {
            tracing::debug!("Saved solution is not in the current word list");
            return None;
        }
        if config.mode == WordMode::Daily && saved.state.solution() != words.daily_word(today) {
            tracing::debug!("Saved game is not today's daily word");
            return None;
        }

        Some(saved.state)
    }

    fn initial_solution(words: &WordList, config: &GameConfig, today: NaiveDate) -> Word {
        match (&config.solution, config.mode) {
            (Some(solution), _) => solution.clone(),
            (None, WordMode::Daily) => words.daily_word(today).clone(),
            (None, WordMode::Random) => words.random_word().clone(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    /// True when this profile had never been opened before
    #[must_use]
    pub const fn is_first_visit(&self) -> bool {
        self.first_visit
    }

    /// True when the game was resumed from the store
    #[must_use]
    pub const fn was_restored(&self) -> bool {
        self.restored
    }

    pub fn type_letter(&mut self, letter: char) -> Transition {
        let transition = self.state.type_letter(letter);
        self.after(&transition);
        transition
    }

    pub fn backspace(&mut self) -> Transition {
        let transition = self.state.backspace();
        self.after(&transition);
        transition
    }

    pub fn submit_guess(&mut self) -> Transition {
        let transition = self.state.submit_guess(&self.words);
        if let Some(feedback) = transition.feedback() {
            tracing::debug!(
                guesses = self.state.guesses_used(),
                pattern = %feedback.pattern(),
                "Scored guess"
            );
        }
        self.after(&transition);
        transition
    }

    /// Type a whole word, then submit it
    ///
    /// Replaces any partial input. If the word is rejected the state is
    /// left exactly as it was before the call.
    pub fn enter_word(&mut self, word: &str) -> Transition {
        let before = self.state.clone();
        while self.state.current_column() > 0 {
            if self.state.backspace() != Transition::Edited {
                break;
            }
        }
        for letter in word.chars() {
            if let Transition::Rejected(advisory) = self.state.type_letter(letter) {
                self.state = before;
                return Transition::Rejected(advisory);
            }
        }

        let transition = self.submit_guess();
        if transition.advisory().is_some() {
            self.state = before;
        }
        transition
    }

    /// Abandon the current game and start another
    ///
    /// Uses the configured override if any, otherwise a random word.
    pub fn new_game(&mut self) {
        let solution = self
            .config
            .solution
            .clone()
            .unwrap_or_else(|| self.words.random_word().clone());
        tracing::info!("Starting new game");
        self.state.reset(solution);
        self.persist();
    }

    /// Forget all recorded statistics
    ///
    /// # Errors
    /// Returns an error if the store cannot clear the stats.
    pub fn reset_stats(&mut self) -> storage::Result<()> {
        stats::reset(&self.store)?;
        self.stats = Stats::with_rows(self.config.max_rows);
        Ok(())
    }

    fn after(&mut self, transition: &Transition) {
        match transition {
            Transition::Rejected(_) => return,
            Transition::Won { attempts, .. } => {
                let rows = self.config.max_rows;
                self.stats = stats::record(&self.store, rows, true, Some(*attempts));
            }
            Transition::Lost { .. } => {
                self.stats = stats::record(&self.store, self.config.max_rows, false, None);
            }
            Transition::Edited | Transition::Scored(_) => {}
        }
        self.persist();
    }

    fn persist(&self) {
        let saved = SavedGame {
            date: date_key(self.today),
            state: self.state.clone(),
        };
        if let Err(e) = storage::save_json(&self.store, GAME_KEY, &saved) {
            tracing::warn!("Failed to save game: {e}");
        }
    }
}
