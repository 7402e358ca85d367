//! Statistics command

use crate::output::print_stats;
use crate::stats::{self, Stats};
use crate::storage::{self, KeyValueStore};

/// Print the stored statistics
pub fn show_stats(store: &impl KeyValueStore, rows: usize) {
    let stats = Stats::load(store, rows);
    if stats.played == 0 {
        println!("\nNo games played yet.");
    }
    print_stats(&stats, None);
}

/// Clear the stored statistics
///
/// # Errors
///
/// Returns an error if the store cannot clear the stats.
pub fn reset_stats(store: &impl KeyValueStore) -> storage::Result<()> {
    stats::reset(store)?;
    println!("Statistics cleared.");
    Ok(())
}
