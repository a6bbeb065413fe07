use knight_core::{Board, Point};

/// The eight knight offsets: every sign combination of (1, 2) and (2, 1).
pub const KNIGHT_OFFSETS: [Point; 8] = [
    Point::new(2, -1),
    Point::new(2, 1),
    Point::new(-2, 1),
    Point::new(-2, -1),
    Point::new(1, 2),
    Point::new(1, -2),
    Point::new(-1, 2),
    Point::new(-1, -2),
];

/// Whether `a` and `b` are exactly one knight move apart.
#[inline]
pub fn is_knight_move(a: Point, b: Point) -> bool {
    let dx = (i64::from(b.x) - i64::from(a.x)).abs();
    let dy = (i64::from(b.y) - i64::from(a.y)).abs();
    (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
}

/// Cached knight-move enumeration.
///
/// Reuses one buffer so that expanding many cells does not allocate.
pub struct KnightMoves {
    buf: Vec<Point>,
}

impl Default for KnightMoves {
    fn default() -> Self {
        Self::new()
    }
}

impl KnightMoves {
    /// Create a new `KnightMoves` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the cells of `board` a knight on `p` can jump to.
    ///
    /// Offsets that would leave the `i32` coordinate space are skipped, so
    /// cells on the edge of the largest boards are handled like any other.
    pub fn from(&mut self, board: Board, p: Point) -> &[Point] {
        self.buf.clear();
        for d in KNIGHT_OFFSETS {
            let (Some(x), Some(y)) = (p.x.checked_add(d.x), p.y.checked_add(d.y)) else {
                continue;
            };
            let n = Point::new(x, y);
            if board.contains(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_distinct_knight_moves() {
        for (i, &a) in KNIGHT_OFFSETS.iter().enumerate() {
            assert!(is_knight_move(Point::ZERO, a));
            for &b in &KNIGHT_OFFSETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn corner_has_two_moves() {
        let mut moves = KnightMoves::new();
        let got = moves.from(Board::CHESS, Point::new(0, 0));
        assert_eq!(got, &[Point::new(2, 1), Point::new(1, 2)]);
    }

    #[test]
    fn centre_has_eight_moves() {
        let mut moves = KnightMoves::new();
        assert_eq!(moves.from(Board::CHESS, Point::new(3, 3)).len(), 8);
    }

    #[test]
    fn tiny_boards_have_no_moves() {
        let mut moves = KnightMoves::new();
        for size in 1..=2 {
            let board = Board::new(size).unwrap();
            for p in board.cells() {
                assert!(moves.from(board, p).is_empty());
            }
        }
    }

    #[test]
    fn edge_of_largest_board() {
        let board = Board::new(i32::MAX).unwrap();
        let mut moves = KnightMoves::new();
        let far = i32::MAX - 1;
        assert_eq!(
            moves.from(board, Point::new(far, far)),
            &[Point::new(far - 2, far - 1), Point::new(far - 1, far - 2)]
        );
        assert_eq!(
            moves.from(board, Point::new(far, 0)),
            &[Point::new(far - 2, 1), Point::new(far - 1, 2)]
        );
    }

    #[test]
    fn knight_move_check_far_apart() {
        assert!(!is_knight_move(Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)));
        assert!(is_knight_move(Point::new(i32::MAX, 0), Point::new(i32::MAX - 2, 1)));
    }

    #[test]
    fn knight_move_check() {
        assert!(is_knight_move(Point::new(4, 4), Point::new(2, 3)));
        assert!(!is_knight_move(Point::new(4, 4), Point::new(4, 4)));
        assert!(!is_knight_move(Point::new(4, 4), Point::new(6, 6)));
        assert!(!is_knight_move(Point::new(4, 4), Point::new(4, 7)));
    }
}
