use std::fmt;

use knight_core::Point;

/// Errors returned by knight searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The board side length was less than 1.
    InvalidBoardSize(i32),
    /// A start or end cell lies outside the board.
    InvalidPosition { pos: Point, size: i32 },
    /// Every cell reachable from `start` was expanded without meeting `end`.
    Unreachable { start: Point, end: Point },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoardSize(size) => {
                write!(f, "invalid board size {size}: must be at least 1")
            }
            Self::InvalidPosition { pos, size } => {
                write!(f, "position {pos} is outside the {size}x{size} board")
            }
            Self::Unreachable { start, end } => {
                write!(f, "no knight path from {start} to {end}")
            }
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            PathError::InvalidBoardSize(0).to_string(),
            "invalid board size 0: must be at least 1"
        );
        assert_eq!(
            PathError::InvalidPosition {
                pos: Point::new(-1, 0),
                size: 8
            }
            .to_string(),
            "position (-1, 0) is outside the 8x8 board"
        );
        assert_eq!(
            PathError::Unreachable {
                start: Point::new(0, 0),
                end: Point::new(1, 1)
            }
            .to_string(),
            "no knight path from (0, 0) to (1, 1)"
        );
    }
}
