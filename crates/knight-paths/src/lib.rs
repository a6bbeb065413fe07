//! Shortest knight paths on square boards.
//!
//! The central operation is [`find_shortest_path`] (or
//! [`KnightPathFinder::find`] for a finder bound to a [`Board`]): a
//! breadth-first search over the implicit knight-move graph that returns the
//! minimum number of moves and one path achieving it.
//!
//! Supporting queries:
//!
//! - [`DistanceMap`]: distances from one cell to every other cell.
//! - [`Components`]: which cells a knight can reach at all. Only boards of
//!   side 1 to 3 have more than one component.
//!
//! [`Board`]: knight_core::Board

mod cc;
mod distance_map;
mod error;
mod finder;
mod moves;
mod path;

pub use cc::Components;
pub use distance_map::DistanceMap;
pub use error::PathError;
pub use finder::{KnightPathFinder, find_shortest_path};
pub use moves::{KNIGHT_OFFSETS, KnightMoves, is_knight_move};
pub use path::{KnightPath, PathNode};
