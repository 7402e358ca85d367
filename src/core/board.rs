//! Game board: a fixed grid of tiles

use super::word::WORD_LENGTH;
use super::{Feedback, TileStatus};
use serde::{Deserialize, Serialize};

/// One letter cell on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub letter: Option<char>,
    pub status: TileStatus,
}

impl Tile {
    pub const EMPTY: Self = Self {
        letter: None,
        status: TileStatus::Empty,
    };

    #[must_use]
    pub const fn pending(letter: char) -> Self {
        Self {
            letter: Some(letter),
            status: TileStatus::Pending,
        }
    }
}

/// Rows of exactly five tiles. Dimensions never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<[Tile; WORD_LENGTH]>,
}

impl Board {
    /// Create an empty board with `row_count` rows
    #[must_use]
    pub fn new(row_count: usize) -> Self {
        Self {
            rows: vec![[Tile::EMPTY; WORD_LENGTH]; row_count],
        }
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub const fn column_count(&self) -> usize {
        WORD_LENGTH
    }

    /// Tiles of one row
    ///
    /// # Panics
    /// Panics if `row` is out of range
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile; WORD_LENGTH] {
        &self.rows[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile; WORD_LENGTH]> {
        self.rows.iter()
    }

    /// Overwrite a single tile
    ///
    /// # Panics
    /// Panics if `row` or `column` is out of range
    pub fn set_tile(&mut self, row: usize, column: usize, tile: Tile) {
        self.rows[row][column] = tile;
    }

    /// Letters typed into a row, skipping empty cells
    #[must_use]
    pub fn row_word(&self, row: usize) -> String {
        self.rows[row].iter().filter_map(|tile| tile.letter).collect()
    }

    /// Replace a row with scored tiles
    ///
    /// # Panics
    /// Panics if `row` is out of range
    pub fn write_feedback(&mut self, row: usize, feedback: &Feedback) {
        for (tile, (letter, status)) in self.rows[row].iter_mut().zip(feedback.iter()) {
            *tile = Tile {
                letter: Some(letter),
                status,
            };
        }
    }

    /// Leading rows whose tiles have all been scored
    pub fn scored_rows(&self) -> impl Iterator<Item = &[Tile; WORD_LENGTH]> {
        self.rows
            .iter()
            .take_while(|row| row.iter().all(|tile| tile.status.is_scored()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6);
        assert_eq!(board.row_count(), 6);
        assert_eq!(board.column_count(), 5);
        assert!(board.rows().flatten().all(|tile| *tile == Tile::EMPTY));
    }

    #[test]
    fn row_word_collects_typed_letters() {
        let mut board = Board::new(6);
        board.set_tile(0, 0, Tile::pending('A'));
        board.set_tile(0, 1, Tile::pending('P'));
        assert_eq!(board.row_word(0), "AP");
        assert_eq!(board.row_word(1), "");
    }

    #[test]
    fn write_feedback_scores_row() {
        let mut board = Board::new(6);
        let feedback =
            Feedback::evaluate(&Word::new("plant").unwrap(), &Word::new("apple").unwrap());
        board.write_feedback(0, &feedback);

        assert_eq!(board.row_word(0), "PLANT");
        assert_eq!(board.row(0)[0].status, TileStatus::Present);
        assert_eq!(board.row(0)[4].status, TileStatus::Absent);
        assert_eq!(board.scored_rows().count(), 1);
    }
}
