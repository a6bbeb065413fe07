//! The square chess [`Board`].

use std::fmt;

use crate::geom::{Point, Range};

/// A square board of side `size`, covering the cells `[0, size)²`.
///
/// The board is implicit: it stores no cell contents, only its extent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: i32,
}

impl Board {
    /// The classic 8×8 chess board.
    pub const CHESS: Self = Self { size: 8 };

    /// Create a board of side `size`. Returns `None` if `size < 1`.
    #[inline]
    pub fn new(size: i32) -> Option<Self> {
        if size < 1 { None } else { Some(Self { size }) }
    }

    /// Side length.
    #[inline]
    pub fn size(self) -> i32 {
        self.size
    }

    /// The half-open rectangle covered by the board.
    #[inline]
    pub fn range(self) -> Range {
        Range::new(0, 0, self.size, self.size)
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.range().len()
    }

    /// Always `false`: a board has at least one cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Whether `p` is a cell of this board.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// Convert a `Point` to a flat row-major index. Returns `None` if off the
    /// board.
    #[inline]
    pub fn idx(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.size as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let w = self.size as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn cells(self) -> crate::geom::RangeIter {
        self.range().iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::CHESS
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_boards() {
        assert!(Board::new(0).is_none());
        assert!(Board::new(-3).is_none());
        assert_eq!(Board::new(1).map(Board::size), Some(1));
    }

    #[test]
    fn bounds() {
        let b = Board::CHESS;
        assert!(b.contains(Point::new(0, 0)));
        assert!(b.contains(Point::new(7, 7)));
        assert!(!b.contains(Point::new(8, 0)));
        assert!(!b.contains(Point::new(0, -1)));
        assert_eq!(b.len(), 64);
    }

    #[test]
    fn index_round_trip() {
        let b = Board::new(5).unwrap();
        for (i, p) in b.cells().enumerate() {
            assert_eq!(b.idx(p), Some(i));
            assert_eq!(b.point(i), p);
        }
        assert_eq!(b.idx(Point::new(5, 0)), None);
    }

    #[test]
    fn display() {
        assert_eq!(Board::CHESS.to_string(), "8x8");
    }
}
