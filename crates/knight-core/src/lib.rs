//! **knight-core** — geometry types shared by the knight-rs crates.
//!
//! Provides [`Point`] and [`Range`] primitives and the square [`Board`]
//! that bounds every knight search.

pub mod board;
pub mod geom;

pub use board::Board;
pub use geom::{Point, Range, RangeIter};
