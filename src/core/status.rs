//! Tile and letter statuses

use serde::{Deserialize, Serialize};

/// Status of a single board tile or keyboard letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStatus {
    /// No letter entered
    #[default]
    Empty,
    /// Letter typed but not yet scored
    Pending,
    /// Letter in the solution at this position
    Correct,
    /// Letter in the solution at another position
    Present,
    /// Letter not in the solution (or all occurrences already accounted for)
    Absent,
}

impl TileStatus {
    /// Merge priority for keyboard coloring: correct > present > absent > unset
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Pending => 0,
        }
    }

    /// Whether this status is the result of scoring a guess
    #[must_use]
    pub const fn is_scored(self) -> bool {
        self.priority() > 0
    }

    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Empty | Self::Pending => '⬜',
        }
    }
}
