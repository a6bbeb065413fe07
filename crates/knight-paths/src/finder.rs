//! Breadth-first shortest knight path.

use std::collections::{HashSet, VecDeque};

use knight_core::{Board, Point};

use crate::error::PathError;
use crate::moves::KnightMoves;
use crate::path::KnightPath;

/// One cell reached during a search.
///
/// Nodes live in a per-search arena; `predecessor` indexes the node this one
/// was reached from and is `None` only for the start node.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    position: Point,
    distance: usize,
    predecessor: Option<usize>,
}

/// Shortest-path search for a knight on a fixed [`Board`].
///
/// The finder holds no search state: every call to [`find`](Self::find)
/// allocates its own frontier and visited set, so one finder can serve any
/// number of queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightPathFinder {
    board: Board,
}

impl KnightPathFinder {
    /// Create a finder for `board`.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The board being searched.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Compute the minimum number of knight moves from `start` to `end` and
    /// one path achieving it.
    ///
    /// Fails with [`PathError::InvalidPosition`] if either cell is off the
    /// board (`start` is checked first) and with [`PathError::Unreachable`]
    /// if `end` is not in the knight-move component of `start`.
    pub fn find(&self, start: Point, end: Point) -> Result<KnightPath, PathError> {
        self.check(start)?;
        self.check(end)?;
        log::debug!("finding shortest path {start} -> {end} on {}", self.board);

        let mut nodes = vec![SearchNode {
            position: start,
            distance: 0,
            predecessor: None,
        }];
        let mut frontier: VecDeque<usize> = VecDeque::from([0]);
        let mut visited: HashSet<Point> = HashSet::new();
        let mut moves = KnightMoves::new();

        while let Some(ci) = frontier.pop_front() {
            let current = nodes[ci];

            // Checked before the visited filter so that start == end ends here.
            if current.position == end {
                log::debug!("found {end} after {} moves", current.distance);
                return Ok(KnightPath {
                    start,
                    distance: current.distance,
                    path: reconstruct(&nodes, ci),
                });
            }

            // Stale duplicate.
            if !visited.insert(current.position) {
                continue;
            }

            log::trace!("expanding {} at distance {}", current.position, current.distance);
            for &np in moves.from(self.board, current.position) {
                nodes.push(SearchNode {
                    position: np,
                    distance: current.distance + 1,
                    predecessor: Some(ci),
                });
                frontier.push_back(nodes.len() - 1);
            }
        }

        log::debug!("{end} not reachable from {start} ({} cells visited)", visited.len());
        Err(PathError::Unreachable { start, end })
    }

    fn check(&self, p: Point) -> Result<(), PathError> {
        if self.board.contains(p) {
            Ok(())
        } else {
            Err(PathError::InvalidPosition {
                pos: p,
                size: self.board.size(),
            })
        }
    }
}

/// Walk predecessors from `goal` back to the root, returning the cells in
/// travel order without the root.
fn reconstruct(nodes: &[SearchNode], goal: usize) -> Vec<Point> {
    let mut path = Vec::with_capacity(nodes[goal].distance);
    let mut ci = goal;
    while let Some(parent) = nodes[ci].predecessor {
        path.push(nodes[ci].position);
        ci = parent;
    }
    path.reverse();
    path
}

/// Minimum knight moves from `start` to `end` on a `board_size`×`board_size`
/// board, together with the cells visited along one shortest path.
///
/// ```
/// use knight_core::Point;
/// use knight_paths::find_shortest_path;
///
/// let found = find_shortest_path(8, Point::new(0, 0), Point::new(3, 3)).unwrap();
/// assert_eq!(found.distance, 2);
/// assert_eq!(found.path.last(), Some(&Point::new(3, 3)));
/// ```
pub fn find_shortest_path(board_size: i32, start: Point, end: Point) -> Result<KnightPath, PathError> {
    let board = Board::new(board_size).ok_or(PathError::InvalidBoardSize(board_size))?;
    KnightPathFinder::new(board).find(start, end)
}
