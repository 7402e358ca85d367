//! TUI rendering with ratatui

use super::app::{App, MessageStyle, Overlay};
use crate::config::WordMode;
use crate::core::{Tile, TileStatus};
use crate::game::GameStatus;
use crate::output::KEYBOARD_ROWS;
use crate::output::formatters::{create_progress_bar, share_text};
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    match app.overlay {
        Overlay::None => {}
        Overlay::Help => render_help(f, app),
        Overlay::Stats => render_stats(f, app),
    }
}

fn tile_style(status: TileStatus) -> Style {
    match status {
        TileStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TileStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TileStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        TileStatus::Pending => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        TileStatus::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_header<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mode = match app.session.config().mode {
        WordMode::Daily => "Daily",
        WordMode::Random => "Random",
    };
    let header = Paragraph::new(format!("WORDLE  ·  {mode} word"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn board_line(row: &[Tile], rejected: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for tile in row {
        let letter = tile.letter.unwrap_or('·');
        let mut style = tile_style(tile.status);
        if rejected {
            style = style.fg(Color::Red).add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

fn render_board<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut lines = Vec::new();
    for (index, row) in app.session.state().board().rows().enumerate() {
        lines.push(board_line(row, app.rejected_row == Some(index)));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let keyboard_status = app.session.state().keyboard_status();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    Span::styled(
                        format!(" {letter} "),
                        tile_style(keyboard_status.status_of(letter)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = app.session.stats();
    let stats_text = format!(
        "Played: {} | Win: {}% | Streak: {}",
        stats.played,
        stats.win_percentage(),
        stats.streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if app.is_game_over() {
        "n: New Game | q: Quit | Tab: Stats"
    } else {
        "Enter: Submit | Ctrl+N: New | Tab: Stats | F1: Help | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

/// Centered rectangle of at most `width` x `height` inside `area`
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(Color::Cyan))
}

fn example_line(word: &str, index: usize, status: TileStatus, text: &str) -> Line<'static> {
    let mut spans: Vec<Span> = word
        .chars()
        .enumerate()
        .map(|(i, letter)| {
            let status = if i == index { status } else { TileStatus::Empty };
            Span::styled(format!(" {letter} "), tile_style(status))
        })
        .collect();
    spans.push(Span::raw(format!("  {text}")));
    Line::from(spans)
}

fn render_help<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let rows = app.session.state().row_count();
    let content = vec![
        Line::from(format!("Guess the word in {rows} tries.")),
        Line::from("Each guess must be a valid 5-letter word."),
        Line::from("The colors show how close your guess was."),
        Line::default(),
        example_line("WEARY", 0, TileStatus::Correct, "W is in the right spot"),
        example_line("PILLS", 1, TileStatus::Present, "I is in the wrong spot"),
        example_line("VAGUE", 3, TileStatus::Absent, "U is not in the word"),
        Line::default(),
        Line::from(Span::styled(
            "Press F1 or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let area = popup_area(f.area(), 52, 13);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(content)
            .style(Style::default().fg(Color::White))
            .block(popup_block(" How to play "))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_stats<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let state = app.session.state();
    let stats = app.session.stats();
    let winning_row = (state.status() == GameStatus::Won).then(|| state.guesses_used());

    let mut content = vec![
        Line::from(format!(
            "Played {}   Win % {}   Streak {}   Max {}",
            stats.played,
            stats.win_percentage(),
            stats.streak,
            stats.max_streak
        )),
        Line::default(),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let max = f64::from(stats.max_distribution());
    for (index, &count) in stats.distribution.iter().enumerate() {
        let style = if winning_row == Some(index + 1) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        content.push(Line::from(vec![
            Span::raw(format!("{:>2} ", index + 1)),
            Span::styled(create_progress_bar(f64::from(count), max, 24), style),
            Span::raw(format!(" {count}")),
        ]));
    }

    if let Some(share) = share_text(state) {
        content.push(Line::default());
        content.extend(share.lines().map(|line| Line::from(line.to_string())));
    }

    let height = u16::try_from(content.len() + 2).unwrap_or(u16::MAX);
    let area = popup_area(f.area(), 46, height);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(content)
            .style(Style::default().fg(Color::White))
            .block(popup_block(" Statistics ")),
        area,
    );
}
