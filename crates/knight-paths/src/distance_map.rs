use std::collections::VecDeque;

use knight_core::{Board, Point};

use crate::error::PathError;
use crate::moves::KnightMoves;
use crate::path::PathNode;

/// Knight-move distances from one source to every cell of a board.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    board: Board,
    source: Point,
    map: Vec<Option<usize>>,
    reached: Vec<PathNode>,
}

impl DistanceMap {
    /// Run a breadth-first search from `source` over the whole board.
    pub fn new(board: Board, source: Point) -> Result<Self, PathError> {
        let si = board.idx(source).ok_or(PathError::InvalidPosition {
            pos: source,
            size: board.size(),
        })?;

        let mut map = vec![None; board.len()];
        let mut reached = Vec::with_capacity(board.len());
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut moves = KnightMoves::new();

        map[si] = Some(0);
        queue.push_back(si);
        reached.push(PathNode { pos: source, cost: 0 });

        while let Some(ci) = queue.pop_front() {
            let cp = board.point(ci);
            let nd = map[ci].unwrap_or_default() + 1;
            for &np in moves.from(board, cp) {
                let Some(ni) = board.idx(np) else {
                    continue;
                };
                if map[ni].is_some() {
                    continue;
                }
                map[ni] = Some(nd);
                queue.push_back(ni);
                reached.push(PathNode { pos: np, cost: nd });
            }
        }

        log::debug!("distance map from {source} reached {} of {} cells", reached.len(), board.len());
        Ok(Self {
            board,
            source,
            map,
            reached,
        })
    }

    /// The cell distances are measured from.
    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    /// Minimum knight moves from the source to `p`.
    ///
    /// Returns `None` if `p` is off the board or unreachable.
    pub fn at(&self, p: Point) -> Option<usize> {
        self.board.idx(p).and_then(|i| self.map[i])
    }

    /// Greatest finite distance on the board.
    pub fn max_distance(&self) -> usize {
        self.reached.last().map_or(0, |n| n.cost)
    }

    /// All reached cells in breadth-first order.
    pub fn reached(&self) -> &[PathNode] {
        &self.reached
    }
}
