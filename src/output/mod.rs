//! Terminal output formatting
//!
//! Display utilities for the line-oriented front end and share text.

pub mod display;
pub mod formatters;

pub use display::{
    KEYBOARD_ROWS, print_board, print_feedback, print_game_over, print_keyboard, print_stats,
};
pub use formatters::share_text;
