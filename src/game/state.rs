//! Game state machine
//!
//! Tracks the board, the cursor and the overall status. Every transition is
//! synchronous and either applies fully or leaves the state untouched,
//! returning an [`Advisory`] that explains why.

use crate::core::{Board, Feedback, KeyboardStatus, Tile, WORD_LENGTH, Word};
use crate::wordlists::WordList;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Default number of guesses per game
pub const DEFAULT_MAX_ROWS: usize = 6;

/// Overall game status. Moves forward only: playing, then won or lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Why an input was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    GameOver,
    RowFull,
    RowEmpty,
    NotEnoughLetters,
    NotInWordList,
    NotALetter,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::GameOver => "Game is over",
            Self::RowFull => "Row is full",
            Self::RowEmpty => "Row is empty",
            Self::NotEnoughLetters => "Not enough letters",
            Self::NotInWordList => "Not in word list",
            Self::NotALetter => "Only letters A-Z",
        };
        f.write_str(text)
    }
}

/// Result of applying one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A letter was typed or erased
    Edited,
    /// A guess was scored and the game goes on
    Scored(Feedback),
    /// The guess matched the solution
    Won { feedback: Feedback, attempts: usize },
    /// The last row was used without a match
    Lost { feedback: Feedback },
    /// Nothing changed
    Rejected(Advisory),
}

impl Transition {
    /// Whether this transition ended the game
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }

    #[must_use]
    pub const fn advisory(&self) -> Option<Advisory> {
        match self {
            Self::Rejected(advisory) => Some(*advisory),
            _ => None,
        }
    }

    /// Feedback of the guess scored by this transition, if any
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        match self {
            Self::Scored(feedback) | Self::Won { feedback, .. } | Self::Lost { feedback } => {
                Some(feedback)
            }
            Self::Edited | Self::Rejected(_) => None,
        }
    }
}

/// A deserialized state that breaks the board invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("board has no rows")]
    NoRows,
    #[error("current row {row} outside board of {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },
    #[error("current column {0} beyond row length")]
    ColumnOutOfRange(usize),
}

/// Everything needed to resume a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    board: Board,
    current_row: usize,
    current_column: usize,
    solution: Word,
    status: GameStatus,
    keyboard_status: KeyboardStatus,
}

impl GameState {
    /// Start a game on a board of `rows` rows
    ///
    /// # Panics
    /// Panics if `rows` is zero.
    #[must_use]
    pub fn new(solution: Word, rows: usize) -> Self {
        assert!(rows > 0, "a board needs at least one row");
        Self {
            board: Board::new(rows),
            current_row: 0,
            current_column: 0,
            solution,
            status: GameStatus::Playing,
            keyboard_status: KeyboardStatus::new(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_column(&self) -> usize {
        self.current_column
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn keyboard_status(&self) -> &KeyboardStatus {
        &self.keyboard_status
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.board.row_count()
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current_guess(&self) -> String {
        self.board.row_word(self.current_row)
    }

    /// Number of guesses scored so far
    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        if self.status.is_terminal() {
            self.current_row + 1
        } else {
            self.current_row
        }
    }

    /// Type a letter into the next free cell of the current row
    pub fn type_letter(&mut self, letter: char) -> Transition {
        if self.status.is_terminal() {
            return Transition::Rejected(Advisory::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return Transition::Rejected(Advisory::NotALetter);
        }
        if self.current_column >= WORD_LENGTH {
            return Transition::Rejected(Advisory::RowFull);
        }

        self.board.set_tile(
            self.current_row,
            self.current_column,
            Tile::pending(letter.to_ascii_uppercase()),
        );
        self.current_column += 1;
        Transition::Edited
    }

    /// Erase the last typed letter of the current row
    pub fn backspace(&mut self) -> Transition {
        if self.status.is_terminal() {
            return Transition::Rejected(Advisory::GameOver);
        }
        if self.current_column == 0 {
            return Transition::Rejected(Advisory::RowEmpty);
        }

        self.current_column -= 1;
        self.board
            .set_tile(self.current_row, self.current_column, Tile::EMPTY);
        Transition::Edited
    }

    /// Score the current row against the solution
    ///
    /// The row must be full and spell a word from `words`; otherwise nothing
    /// changes.
    pub fn submit_guess(&mut self, words: &WordList) -> Transition {
        if self.status.is_terminal() {
            return Transition::Rejected(Advisory::GameOver);
        }
        if self.current_column < WORD_LENGTH {
            return Transition::Rejected(Advisory::NotEnoughLetters);
        }

        let guess = match Word::new(self.current_guess()) {
            Ok(guess) if words.contains(&guess) => guess,
            _ => return Transition::Rejected(Advisory::NotInWordList),
        };

        let feedback = Feedback::evaluate(&guess, &self.solution);
        self.board.write_feedback(self.current_row, &feedback);
        self.keyboard_status.record(&feedback);

        if feedback.is_win() {
            self.status = GameStatus::Won;
            Transition::Won {
                feedback,
                attempts: self.current_row + 1,
            }
        } else if self.current_row + 1 == self.board.row_count() {
            self.status = GameStatus::Lost;
            Transition::Lost { feedback }
        } else {
            self.current_row += 1;
            self.current_column = 0;
            Transition::Scored(feedback)
        }
    }

    /// Start over with a new solution on a board of the same size
    pub fn reset(&mut self, solution: Word) {
        *self = Self::new(solution, self.board.row_count());
    }

    /// Check the invariants of a state read back from storage
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), StateError> {
        let rows = self.board.row_count();
        if rows == 0 {
            return Err(StateError::NoRows);
        }
        if self.current_row >= rows {
            return Err(StateError::RowOutOfRange {
                row: self.current_row,
                rows,
            });
        }
        if self.current_column > WORD_LENGTH {
            return Err(StateError::ColumnOutOfRange(self.current_column));
        }
        Ok(())
    }
}

/// Celebration line for a win after `attempts` guesses
#[must_use]
pub fn praise(attempts: usize) -> &'static str {
    match attempts {
        0 | 1 => "Genius!",
        2 => "Magnificent!",
        3 => "Impressive!",
        4 => "Splendid!",
        5 => "Great!",
        _ => "Phew!",
    }
}
