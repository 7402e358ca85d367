//! Core domain types for Wordle
//!
//! Pure types with no I/O: words, tile statuses, guess evaluation,
//! keyboard aggregation and the board grid.

mod board;
mod feedback;
mod keyboard;
mod status;
mod word;

pub use board::{Board, Tile};
pub use feedback::Feedback;
pub use keyboard::KeyboardStatus;
pub use status::TileStatus;
pub use word::{WORD_LENGTH, Word, WordError};
