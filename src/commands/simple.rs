//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::game::{GameSession, GameStatus, Transition, praise};
use crate::output::{print_board, print_game_over, print_keyboard, print_stats};
use crate::storage::KeyValueStore;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: KeyValueStore>(session: &mut GameSession<S>) -> io::Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock())
}

/// Run the simple mode reading commands from any buffered reader
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple_with<S: KeyValueStore, R: BufRead>(
    session: &mut GameSession<S>,
    input: &mut R,
) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if session.is_first_visit() {
        print_instructions(session.state().row_count());
    }
    println!("Commands: ':new' for a new game, ':stats' for statistics, ':quit' to exit\n");

    if session.was_restored() {
        println!("{}", "Resuming today's game.".bright_black());
    }
    print_board(session.state());

    loop {
        let Some(line) = prompt(input, session.state().status())? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" | ":n" => {
                session.new_game();
                println!("\n🔄 New game started with a fresh word!");
                print_board(session.state());
            }
            ":stats" | ":s" => print_stats(session.stats(), None),
            ":help" | ":h" => print_instructions(session.state().row_count()),
            "" => {}
            guess => play_line(session, guess),
        }
    }
}

fn play_line<S: KeyValueStore>(session: &mut GameSession<S>, guess: &str) {
    if session.state().status().is_terminal() {
        println!("The game is over. Type ':new' to play again.\n");
        return;
    }

    match session.enter_word(guess) {
        Transition::Rejected(advisory) => {
            println!("{}\n", format!("❌ {advisory}").red());
        }
        Transition::Scored(_) => {
            print_board(session.state());
            print_keyboard(session.state());
        }
        Transition::Won { attempts, .. } => {
            print_board(session.state());
            println!("{}", praise(attempts).bright_yellow().bold());
            finish(session, Some(attempts));
        }
        Transition::Lost { .. } => {
            print_board(session.state());
            finish(session, None);
        }
        Transition::Edited => {}
    }
}

fn finish<S: KeyValueStore>(session: &GameSession<S>, won_in: Option<usize>) {
    print_game_over(session.state());
    print_stats(session.stats(), won_in);
    println!("Type ':new' to play again or ':quit' to exit.\n");
}

fn print_instructions(rows: usize) {
    println!("Guess the word in {rows} tries.");
    println!("Each guess must be a valid 5-letter word from the word list.");
    println!("After each guess the tiles show how close you were:\n");
    println!("  {} the letter is in the word and in the right spot", " A ".black().on_green());
    println!("  {} the letter is in the word but in the wrong spot", " B ".black().on_yellow());
    println!("  {} the letter is not in the word\n", " C ".white().on_bright_black());
}

/// Read one trimmed line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, status: GameStatus) -> io::Result<Option<String>> {
    let label = if status.is_terminal() { "Command" } else { "Guess" };
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
