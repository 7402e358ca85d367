//! Wordle
//!
//! A terminal Wordle game: duplicate-aware guess evaluation, a daily or
//! random hidden word, persisted games and statistics, with TUI and
//! line-oriented front ends.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::core::{Feedback, Word};
//!
//! let guess = Word::new("erase").unwrap();
//! let solution = Word::new("speed").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &solution);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine and sessions
pub mod game;

// Statistics tracking
pub mod stats;

// Key-value persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Runtime configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
