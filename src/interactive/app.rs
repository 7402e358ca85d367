//! TUI application state and logic

use crate::game::{Advisory, GameSession, GameStatus, Transition, praise};
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: KeyValueStore> {
    pub session: GameSession<S>,
    pub messages: Vec<Message>,
    pub overlay: Overlay,
    /// Row highlighted after a rejected guess, cleared by the next key
    pub rejected_row: Option<usize>,
    pub should_quit: bool,
}

/// Popup drawn over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Stats,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore> App<S> {
    #[must_use]
    pub fn new(session: GameSession<S>) -> Self {
        let overlay = if session.is_first_visit() {
            Overlay::Help
        } else {
            Overlay::None
        };
        let greeting = if session.was_restored() {
            "Welcome back! Resuming today's game."
        } else {
            "Guess the hidden word. Type letters and press Enter."
        };

        let mut app = Self {
            session,
            messages: Vec::new(),
            overlay,
            rejected_row: None,
            should_quit: false,
        };
        app.add_message(greeting, MessageStyle::Info);
        if app.session.state().status().is_terminal() {
            app.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        }
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.messages.clear();
        self.overlay = Overlay::None;
        self.add_message("New game started!", MessageStyle::Info);
    }

    fn toggle(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == overlay {
            Overlay::None
        } else {
            overlay
        };
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.rejected_row = None;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => {
                if self.overlay == Overlay::None {
                    self.should_quit = true;
                } else {
                    self.overlay = Overlay::None;
                }
            }
            KeyCode::Tab => self.toggle(Overlay::Stats),
            KeyCode::F(1) => self.toggle(Overlay::Help),
            _ if self.session.state().status().is_terminal() => self.handle_game_over_key(key),
            _ => self.handle_play_key(key),
        }
    }

    fn handle_game_over_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q' | 'Q') => self.should_quit = true,
            KeyCode::Char('n' | 'N') => self.new_game(),
            _ => {}
        }
    }

    fn handle_play_key(&mut self, key: KeyEvent) {
        let transition = match key.code {
            KeyCode::Char(c) => {
                self.overlay = Overlay::None;
                self.session.type_letter(c)
            }
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Enter => self.session.submit_guess(),
            _ => return,
        };
        self.on_transition(&transition);
    }

    fn on_transition(&mut self, transition: &Transition) {
        match transition {
            Transition::Rejected(advisory) => self.on_rejected(*advisory),
            Transition::Won { attempts, .. } => {
                let attempts = *attempts;
                self.add_message(
                    &format!("🎉 {}! Solved in {attempts}.", praise(attempts)),
                    MessageStyle::Success,
                );
                self.finish();
            }
            Transition::Lost { .. } => {
                let solution = self.session.state().solution().to_string();
                self.add_message(&format!("The word was {solution}."), MessageStyle::Error);
                self.finish();
            }
            Transition::Edited | Transition::Scored(_) => {}
        }
    }

    fn on_rejected(&mut self, advisory: Advisory) {
        match advisory {
            Advisory::NotInWordList => {
                self.rejected_row = Some(self.session.state().current_row());
                self.add_message(&advisory.to_string(), MessageStyle::Error);
            }
            Advisory::NotEnoughLetters => {
                self.add_message(&advisory.to_string(), MessageStyle::Error);
            }
            // Typing into a full row or erasing an empty one is not worth a message
            Advisory::RowFull | Advisory::RowEmpty | Advisory::NotALetter | Advisory::GameOver => {}
        }
    }

    fn finish(&mut self) {
        self.overlay = Overlay::Stats;
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.state().status() != GameStatus::Playing
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("TUI loop failed: {err:#}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Word;
    use crate::storage::MemoryStore;
    use crate::wordlists::WordList;
    use chrono::NaiveDate;

    fn new_app(store: &MemoryStore) -> App<&MemoryStore> {
        let config = GameConfig {
            solution: Some(Word::new("apple").unwrap()),
            ..GameConfig::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let session = GameSession::open(store, WordList::embedded(), config, today).unwrap();
        App::new(session)
    }

    fn press(app: &mut App<&MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<&MemoryStore>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn first_visit_shows_help() {
        let store = MemoryStore::new();
        assert_eq!(new_app(&store).overlay, Overlay::Help);
        assert_eq!(new_app(&store).overlay, Overlay::None);
    }

    #[test]
    fn typing_closes_overlay_and_fills_row() {
        let store = MemoryStore::new();
        let mut app = new_app(&store);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.session.state().current_guess(), "G");
    }

    #[test]
    fn rejected_row_highlight_clears_on_next_key() {
        let store = MemoryStore::new();
        let mut app = new_app(&store);
        type_word(&mut app, "qwert");
        assert_eq!(app.rejected_row, Some(0));
        assert_eq!(app.messages.last().unwrap().text, "Not in word list");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.rejected_row, None);
        assert_eq!(app.session.state().current_guess(), "QWER");
    }

    #[test]
    fn win_shows_stats_and_accepts_new_game() {
        let store = MemoryStore::new();
        let mut app = new_app(&store);
        type_word(&mut app, "apple");
        assert!(app.is_game_over());
        assert_eq!(app.overlay, Overlay::Stats);

        press(&mut app, KeyCode::Char('x'));
        assert!(app.is_game_over());

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.is_game_over());
        assert_eq!(app.session.stats().wins, 1);
    }

    #[test]
    fn quit_keys() {
        let store = MemoryStore::new();
        let mut app = new_app(&store);
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit, "first Esc closes the help overlay");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app(&store);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_n_abandons_game() {
        let store = MemoryStore::new();
        let mut app = new_app(&store);
        type_word(&mut app, "grape");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.session.state().current_row(), 0);
        assert_eq!(app.session.stats().played, 0);
    }

    #[test]
    fn tab_toggles_stats() {
        let store = MemoryStore::new();
        let mut app = new_app(&store);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.overlay, Overlay::Stats);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.overlay, Overlay::None);
    }
}
