//! Game configuration
//!
//! Assembled by the binary from command-line flags and environment; the
//! library only consumes it.

use crate::core::Word;
use crate::game::DEFAULT_MAX_ROWS;
use crate::wordlists::WordList;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest supported board
pub const MAX_ROWS_LIMIT: usize = 10;

/// How the solution of a fresh game is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordMode {
    /// A random word per game
    #[default]
    Random,
    /// The same word for everyone on a given day
    Daily,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rows must be between 1 and {max}, got {rows}", max = MAX_ROWS_LIMIT)]
    InvalidRows { rows: usize },

    #[error("solution {0} is not in the word list")]
    UnknownSolution(String),

    #[error("profile name {0:?} must be non-empty and use letters, digits, '-' or '_'")]
    InvalidProfile(String),
}

/// Settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses per game (board rows)
    pub max_rows: usize,
    pub mode: WordMode,
    /// Name of the persisted player profile
    pub profile: String,
    /// Root directory for profiles and logs
    pub data_dir: PathBuf,
    /// Fixed solution for every game, bypassing word selection
    pub solution: Option<Word>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            mode: WordMode::Random,
            profile: "default".to_string(),
            data_dir: default_data_dir(),
            solution: None,
        }
    }
}

impl GameConfig {
    /// Check the settings against the word list in use
    ///
    /// # Errors
    /// Returns the first invalid setting.
    pub fn validate(&self, words: &WordList) -> Result<(), ConfigError> {
        if !(1..=MAX_ROWS_LIMIT).contains(&self.max_rows) {
            return Err(ConfigError::InvalidRows {
                rows: self.max_rows,
            });
        }

        let profile_ok = !self.profile.is_empty()
            && self
                .profile
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !profile_ok {
            return Err(ConfigError::InvalidProfile(self.profile.clone()));
        }

        if let Some(solution) = &self.solution
            && !words.contains(solution)
        {
            return Err(ConfigError::UnknownSolution(solution.to_string()));
        }

        Ok(())
    }

    /// Directory backing this profile's key-value store
    #[must_use]
    pub fn profile_dir(&self) -> PathBuf {
        self.data_dir.join("profiles").join(&self.profile)
    }

    /// Directory for log files
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

/// Platform data directory for the game
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/wordle_game`
/// - Linux: `~/.local/share/wordle_game` (or `$XDG_DATA_HOME/wordle_game`)
/// - Windows: `%APPDATA%\wordle_game`
/// - Fallback: `./save_data`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "wordle_game")
        .map_or_else(|| PathBuf::from("./save_data"), |dirs| dirs.data_dir().to_path_buf())
}

/// Resolve an optional override against the platform default
#[must_use]
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(default_data_dir, Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.max_rows, 6);
        assert_eq!(config.mode, WordMode::Random);
        assert_eq!(config.validate(&WordList::embedded()), Ok(()));
    }

    #[test]
    fn rows_must_be_in_range() {
        let words = WordList::embedded();
        for rows in [0, 11] {
            let config = GameConfig {
                max_rows: rows,
                ..GameConfig::default()
            };
            assert_eq!(config.validate(&words), Err(ConfigError::InvalidRows { rows }));
        }
    }

    #[test]
    fn solution_must_be_in_word_list() {
        let config = GameConfig {
            solution: Some(Word::new("qwert").unwrap()),
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(&WordList::embedded()),
            Err(ConfigError::UnknownSolution("QWERT".to_string()))
        );
    }

    #[test]
    fn profile_names_are_restricted() {
        let config = GameConfig {
            profile: "../other".to_string(),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(&WordList::embedded()),
            Err(ConfigError::InvalidProfile(_))
        ));
    }

    #[test]
    fn directories_hang_off_data_dir() {
        let config = GameConfig {
            data_dir: PathBuf::from("/tmp/wordle"),
            profile: "alice".to_string(),
            ..GameConfig::default()
        };
        assert_eq!(config.profile_dir(), PathBuf::from("/tmp/wordle/profiles/alice"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/wordle/logs"));
    }

    #[test]
    fn explicit_data_dir_wins() {
        assert_eq!(
            resolve_data_dir(Some(Path::new("/srv/wordle"))),
            PathBuf::from("/srv/wordle")
        );
    }
}
