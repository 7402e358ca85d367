//! Game statistics
//!
//! Played/won counts, streaks and the guess-count distribution. Stats are
//! only updated when a game ends and are persisted through a
//! `KeyValueStore` under [`STATS_KEY`].

use crate::game::DEFAULT_MAX_ROWS;
use crate::storage::{self, KeyValueStore};
use serde::{Deserialize, Serialize};

/// Store key of the statistics blob
pub const STATS_KEY: &str = "game_stats";

/// Aggregate results across games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub played: u32,
    pub wins: u32,
    pub streak: u32,
    pub max_streak: u32,
    /// Wins by guess count: index 0 holds wins on the first guess
    pub distribution: Vec<u32>,
}

impl Default for Stats {
    fn default() -> Self {
        Self::with_rows(DEFAULT_MAX_ROWS)
    }
}

impl Stats {
    /// Empty stats with a distribution bucket per board row
    #[must_use]
    pub fn with_rows(rows: usize) -> Self {
        Self {
            played: 0,
            wins: 0,
            streak: 0,
            max_streak: 0,
            distribution: vec![0; rows],
        }
    }

    /// Grow the distribution to at least `rows` buckets (never shrinks)
    pub fn ensure_rows(&mut self, rows: usize) {
        if self.distribution.len() < rows {
            self.distribution.resize(rows, 0);
        }
    }

    /// Record a finished game
    ///
    /// `attempts` is the number of guesses used; it only feeds the
    /// distribution when the game was won and it falls within the board.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::stats::Stats;
    ///
    /// let mut stats = Stats::default();
    /// stats.record_result(true, Some(3));
    /// stats.record_result(false, None);
    ///
    /// assert_eq!(stats.played, 2);
    /// assert_eq!(stats.wins, 1);
    /// assert_eq!(stats.streak, 0);
    /// assert_eq!(stats.max_streak, 1);
    /// assert_eq!(stats.distribution, vec![0, 0, 1, 0, 0, 0]);
    /// ```
    pub fn record_result(&mut self, won: bool, attempts: Option<usize>) {
        self.played = self.played.saturating_add(1);

        if won {
            self.wins = self.wins.saturating_add(1);
            self.streak = self.streak.saturating_add(1);
            self.max_streak = self.max_streak.max(self.streak);

            if let Some(attempts) = attempts
                && let Some(bucket) = attempts
                    .checked_sub(1)
                    .and_then(|i| self.distribution.get_mut(i))
            {
                *bucket = bucket.saturating_add(1);
            }
        } else {
            self.streak = 0;
        }
    }

    /// Rounded win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            (f64::from(self.wins) / f64::from(self.played) * 100.0).round() as u32
        }
    }

    /// Largest distribution bucket (at least 1, for bar scaling)
    #[must_use]
    pub fn max_distribution(&self) -> u32 {
        self.distribution.iter().copied().max().unwrap_or(0).max(1)
    }

    /// Load stats from a store; missing or corrupt blobs yield fresh stats
    #[must_use]
    pub fn load(store: &impl KeyValueStore, rows: usize) -> Self {
        let mut stats = storage::load_json::<Self>(store, STATS_KEY)
            .unwrap_or_else(|| Self::with_rows(rows));
        stats.ensure_rows(rows);
        stats
    }

    /// Persist stats to a store
    ///
    /// # Errors
    /// Returns an error if the store write fails.
    pub fn save(&self, store: &impl KeyValueStore) -> storage::Result<()> {
        storage::save_json(store, STATS_KEY, self)
    }
}

/// Read-modify-write a finished game into the stored stats
///
/// Re-reads the stored blob so the update applies to the latest persisted
/// totals, then writes the result back. The updated stats are returned even
/// if the write fails; the failure is logged.
pub fn record(store: &impl KeyValueStore, rows: usize, won: bool, attempts: Option<usize>) -> Stats {
    let mut stats = Stats::load(store, rows);
    stats.record_result(won, attempts);

    tracing::info!(
        won,
        ?attempts,
        played = stats.played,
        streak = stats.streak,
        "Recorded game result"
    );

    if let Err(e) = stats.save(store) {
        tracing::warn!("Failed to save stats: {e}");
    }
    stats
}

/// Remove stored stats
///
/// # Errors
/// Returns an error if the store cannot clear the key.
pub fn reset(store: &impl KeyValueStore) -> storage::Result<()> {
    tracing::info!("Resetting stats");
    store.clear(STATS_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn wins_then_loss() {
        let mut stats = Stats::default();
        assert_eq!(stats.distribution, vec![0; 6]);

        stats.record_result(true, Some(3));
        stats.record_result(true, Some(2));
        assert_eq!(
            stats,
            Stats {
                played: 2,
                wins: 2,
                streak: 2,
                max_streak: 2,
                distribution: vec![0, 1, 1, 0, 0, 0],
            }
        );

        stats.record_result(false, None);
        assert_eq!(stats.played, 3);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.distribution, vec![0, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn max_streak_survives_new_streak() {
        let mut stats = Stats::default();
        for _ in 0..3 {
            stats.record_result(true, Some(4));
        }
        stats.record_result(false, Some(6));
        stats.record_result(true, Some(1));

        assert_eq!(stats.streak, 1);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.distribution, vec![1, 0, 0, 3, 0, 0]);
    }

    #[test]
    fn out_of_range_attempts_skip_distribution() {
        let mut stats = Stats::default();
        stats.record_result(true, Some(0));
        stats.record_result(true, Some(7));
        stats.record_result(true, None);

        assert_eq!(stats.wins, 3);
        assert_eq!(stats.distribution, vec![0; 6]);
    }

    #[test]
    fn saturated_counters_do_not_overflow() {
        let mut stats = Stats {
            played: u32::MAX,
            wins: u32::MAX,
            streak: u32::MAX,
            max_streak: u32::MAX,
            distribution: vec![u32::MAX; 6],
        };
        stats.record_result(true, Some(1));

        assert_eq!(stats.played, u32::MAX);
        assert_eq!(stats.wins, u32::MAX);
        assert_eq!(stats.streak, u32::MAX);
        assert_eq!(stats.distribution[0], u32::MAX);

        stats.record_result(false, None);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.max_streak, u32::MAX);
    }

    #[test]
    fn win_percentage_rounds() {
        let mut stats = Stats::default();
        assert_eq!(stats.win_percentage(), 0);

        stats.record_result(true, Some(1));
        stats.record_result(true, Some(1));
        stats.record_result(false, None);
        assert_eq!(stats.win_percentage(), 67);
    }

    #[test]
    fn max_distribution_is_at_least_one() {
        let mut stats = Stats::default();
        assert_eq!(stats.max_distribution(), 1);
        stats.distribution = vec![0, 4, 2, 0, 0, 0];
        assert_eq!(stats.max_distribution(), 4);
    }

    #[test]
    fn ensure_rows_never_shrinks() {
        let mut stats = Stats::with_rows(6);
        stats.ensure_rows(8);
        assert_eq!(stats.distribution.len(), 8);
        stats.ensure_rows(4);
        assert_eq!(stats.distribution.len(), 8);
    }

    #[test]
    fn record_persists_through_store() {
        let store = MemoryStore::new();
        record(&store, 6, true, Some(3));
        let stats = record(&store, 6, true, Some(2));
        assert_eq!(stats.played, 2);

        let reloaded = Stats::load(&store, 6);
        assert_eq!(reloaded, stats);
        assert_eq!(reloaded.distribution, vec![0, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn corrupt_blob_loads_as_fresh() {
        let store = MemoryStore::new();
        store.set(STATS_KEY, "not json").unwrap();
        assert_eq!(Stats::load(&store, 6), Stats::default());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&Stats::default()).unwrap();
        assert!(json.contains("\"maxStreak\":0"));
    }

    #[test]
    fn reset_clears_store() {
        let store = MemoryStore::new();
        record(&store, 6, true, Some(1));
        reset(&store).unwrap();
        assert_eq!(Stats::load(&store, 6).played, 0);
    }
}
