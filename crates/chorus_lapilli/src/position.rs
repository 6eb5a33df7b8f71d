//! Board positions and their human-readable labels.

use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Row labels, top to bottom.
const ROW_LABELS: [&str; 3] = ["upper", "middle", "lower"];

/// Column labels, left to right.
const COL_LABELS: [&str; 3] = ["left", "middle", "right"];

/// A position on the 3x3 board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[display("{}", self.label())]
pub enum Position {
    /// Upper-left (position 0)
    UpperLeft,
    /// Upper-middle (position 1)
    UpperMiddle,
    /// Upper-right (position 2)
    UpperRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Lower-left (position 6)
    LowerLeft,
    /// Lower-middle (position 7)
    LowerMiddle,
    /// Lower-right (position 8)
    LowerRight,
}

impl Position {
    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Row of this position (0 = upper).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0 = left).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Label such as `"upper left"` or `"middle middle"`.
    pub fn label(self) -> String {
        format!("{} {}", ROW_LABELS[self.row()], COL_LABELS[self.col()])
    }

    /// True if `other` is a horizontal, vertical or diagonal neighbour.
    ///
    /// A position counts as adjacent to itself.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row().abs_diff(other.row()) <= 1 && self.col().abs_diff(other.col()) <= 1
    }

    /// Neighbouring positions, excluding `self`.
    pub fn neighbors(self) -> Vec<Position> {
        Self::iter()
            .filter(|other| *other != self && self.is_adjacent(*other))
            .collect()
    }

    /// Parse from label or number (0-8).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let lower = s.to_lowercase();
        let wanted = lower.split_whitespace().collect::<Vec<_>>().join(" ");
        if wanted == "center" || wanted == "centre" {
            return Some(Position::Center);
        }
        Self::iter().find(|pos| pos.label() == wanted)
    }

    /// Filters positions by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn empty_cells(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::iter().count(), 9);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Position::UpperLeft.label(), "upper left");
        assert_eq!(Position::UpperMiddle.label(), "upper middle");
        assert_eq!(Position::Center.label(), "middle middle");
        assert_eq!(Position::LowerRight.label(), "lower right");
    }

    #[test]
    fn test_display_matches_label() {
        for pos in Position::iter() {
            assert_eq!(pos.to_string(), pos.label());
        }
        assert_eq!(format!("{}", Position::MiddleLeft), "middle left");
    }

    #[test]
    fn test_center_neighbors_everything() {
        assert_eq!(Position::Center.neighbors().len(), 8);
        assert_eq!(Position::UpperLeft.neighbors().len(), 3);
        assert_eq!(Position::UpperMiddle.neighbors().len(), 5);
    }

    #[test]
    fn test_parse_label_or_number() {
        assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
        assert_eq!(
            Position::from_label_or_number("  Lower   Left "),
            Some(Position::LowerLeft)
        );
        assert_eq!(
            Position::from_label_or_number("center"),
            Some(Position::Center)
        );
        assert_eq!(Position::from_label_or_number("9"), None);
        assert_eq!(Position::from_label_or_number("sideways"), None);
    }

    #[test]
    fn test_empty_cells() {
        let board = Board::with_pieces(&[Position::Center], &[]);
        let empty = Position::empty_cells(&board);
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&Position::Center));
    }
}
