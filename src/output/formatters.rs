//! Formatting utilities for terminal output

use crate::core::Tile;
use crate::game::{GameState, GameStatus};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Emoji line for one row of tiles
#[must_use]
pub fn row_to_emoji(row: &[Tile]) -> String {
    row.iter().map(|tile| tile.status.emoji()).collect()
}

/// Spoiler-free result grid for sharing a finished game
///
/// Returns `None` while the game is still being played.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::GameState;
/// use wordle_game::output::formatters::share_text;
/// use wordle_game::wordlists::WordList;
///
/// let words = WordList::embedded();
/// let mut state = GameState::new(Word::new("apple").unwrap(), 6);
/// for letter in "apple".chars() {
///     state.type_letter(letter);
/// }
/// state.submit_guess(&words);
///
/// assert_eq!(share_text(&state).unwrap(), "Wordle 1/6\n\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(state: &GameState) -> Option<String> {
    let score = match state.status() {
        GameStatus::Playing => return None,
        GameStatus::Won => state.guesses_used().to_string(),
        GameStatus::Lost => "X".to_string(),
    };

    let grid: Vec<String> = state.board().scored_rows().map(|row| row_to_emoji(row)).collect();
    Some(format!(
        "Wordle {score}/{}\n\n{}",
        state.row_count(),
        grid.join("\n")
    ))
}
