//! Display functions for the line-oriented front end

use super::formatters::{create_progress_bar, share_text};
use crate::core::{Feedback, Tile, TileStatus};
use crate::game::{GameState, GameStatus};
use crate::stats::Stats;
use colored::{ColoredString, Colorize};

/// Keyboard layout shared by both front ends
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn paint(letter: char, status: TileStatus) -> ColoredString {
    let cell = format!(" {letter} ");
    match status {
        TileStatus::Correct => cell.black().on_green().bold(),
        TileStatus::Present => cell.black().on_yellow().bold(),
        TileStatus::Absent => cell.white().on_bright_black(),
        TileStatus::Pending => cell.bright_white().bold(),
        TileStatus::Empty => cell.bright_black(),
    }
}

fn paint_tile(tile: &Tile) -> ColoredString {
    paint(tile.letter.unwrap_or('·'), tile.status)
}

/// Print the full board
pub fn print_board(state: &GameState) {
    println!();
    for row in state.board().rows() {
        let cells: Vec<String> = row.iter().map(|tile| paint_tile(tile).to_string()).collect();
        println!("    {}", cells.join(" "));
    }
    println!();
}

/// Print the keyboard colored by letter status
pub fn print_keyboard(state: &GameState) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| {
                paint(letter, state.keyboard_status().status_of(letter)).to_string()
            })
            .collect();
        println!("{}{}", " ".repeat(2 + indent * 2), keys.join(""));
    }
    println!();
}

/// Print a single evaluated guess
pub fn print_feedback(feedback: &Feedback) {
    let cells: Vec<String> = feedback
        .iter()
        .map(|(letter, status)| paint(letter, status).to_string())
        .collect();
    println!("    {}   {}", cells.join(" "), feedback.to_emoji());
}

/// Print the end-of-game summary
pub fn print_game_over(state: &GameState) {
    match state.status() {
        GameStatus::Playing => return,
        GameStatus::Won => {
            let tries = state.guesses_used();
            println!(
                "{}",
                format!(
                    "🎉 You won! You guessed it in {tries} {}",
                    if tries == 1 { "try" } else { "tries" }
                )
                .green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!("{}", "Game over!".red().bold());
        }
    }
    println!(
        "The word was {}",
        state.solution().text().bright_yellow().bold()
    );

    if let Some(share) = share_text(state) {
        println!("\n{share}\n");
    }
}

/// Print statistics with the guess distribution
///
/// `highlight` marks the distribution bar of the game just won.
pub fn print_stats(stats: &Stats, highlight: Option<usize>) {
    println!("\n{}", "═".repeat(44).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(44).cyan());

    println!(
        "\n   {:>6} {:>6} {:>6} {:>6}",
        stats.played.to_string().bold(),
        stats.win_percentage().to_string().bold(),
        stats.streak.to_string().bold(),
        stats.max_streak.to_string().bold()
    );
    println!("   {:>6} {:>6} {:>6} {:>6}", "Played", "Win %", "Streak", "Max");

    println!("\n📈 {}", "Guess Distribution:".bright_cyan().bold());
    let max = f64::from(stats.max_distribution());
    for (i, &count) in stats.distribution.iter().enumerate() {
        let guess_count = i + 1;
        let bar = create_progress_bar(f64::from(count), max, 30);
        let bar = if highlight == Some(guess_count) {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!("   {guess_count}: {bar} {count}");
    }
    println!();
}
