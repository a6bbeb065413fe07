//! Interactive knight board: select a start and a destination cell and see
//! the shortest knight path between them.
//!
//! [`BoardModel`] holds the selection state and produces text frames;
//! [`term`] paints them in a terminal and feeds mouse and keyboard input back.

mod config;
mod model;
pub mod term;

pub use config::BoardConfig;
pub use model::{Action, BOARD_ORIGIN, BoardModel, CELL_WIDTH, Line, Marker, Msg, Span, Tone};
