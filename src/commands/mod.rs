//! Command implementations

pub mod score;
pub mod simple;
pub mod stats;

pub use score::score_guess;
pub use simple::{run_simple, run_simple_with};
pub use stats::{reset_stats, show_stats};
