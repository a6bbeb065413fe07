//! Connected components of the knight-move graph.

use knight_core::{Board, Point};

use crate::moves::KnightMoves;

/// Connected-component labelling of every cell of a board.
///
/// Two cells share a label iff a knight can travel between them. Boards of
/// side 4 or more form a single component; smaller boards do not.
#[derive(Debug, Clone)]
pub struct Components {
    board: Board,
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    /// Label every cell of `board`.
    pub fn new(board: Board) -> Self {
        let len = board.len();
        let mut labels = vec![usize::MAX; len];
        let mut stack: Vec<usize> = Vec::new();
        let mut moves = KnightMoves::new();
        let mut count = 0;

        for start in 0..len {
            if labels[start] != usize::MAX {
                continue;
            }

            // Iterative DFS from `start`.
            stack.clear();
            stack.push(start);
            labels[start] = count;

            while let Some(ci) = stack.pop() {
                for &np in moves.from(board, board.point(ci)) {
                    if let Some(ni) = board.idx(np) {
                        if labels[ni] == usize::MAX {
                            labels[ni] = count;
                            stack.push(ni);
                        }
                    }
                }
            }

            count += 1;
        }

        Self {
            board,
            labels,
            count,
        }
    }

    /// Component label of `p`, or `None` if off the board.
    pub fn label(&self, p: Point) -> Option<usize> {
        self.board.idx(p).map(|i| self.labels[i])
    }

    /// Number of components.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether a knight can travel from `a` to `b`.
    pub fn connected(&self, a: Point, b: Point) -> bool {
        match (self.label(a), self.label(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }
}
