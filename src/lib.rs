#![warn(missing_docs)]

//! # `huarong`
//!
//! A solver for the Hua Rong Dao sliding-block puzzle (also known as
//! Klotski): a 4-wide by 5-tall board holding one 2x2 goal piece, any
//! number of 1x2/2x1 double pieces and 1x1 single pieces, with the rest of
//! the cells empty. The puzzle is complete when a sequence of legal
//! single-step slides brings the goal piece to the target quadrant at the
//! bottom of the board.
//!
//! Begin by building a board with a [`BoardBuilder`](builder::BoardBuilder)
//! or by parsing the 5-line textual form via
//! [`FromStr`](std::str::FromStr). Call [`solve()`](Board::solve) with an
//! [`Algorithm`] to search for a goal configuration; the [`Solution`]
//! carries the path of boards from start to goal, or nothing if the puzzle
//! has no solution, together with search-effort counters.
//!
//! # Internals
//! The flat grid of cell symbols is the sole search state. Boards hash by
//! cell contents, so two configurations reached along different move
//! sequences deduplicate to one visited state. Successor generation scans
//! empty cells and aligned empty-cell pairs (which goal-piece and sideways
//! double-piece moves require) and copies the board once per legal slide;
//! nothing is mutated in place. [`AStar`](Algorithm::AStar) orders its
//! frontier by moves so far plus an admissible Manhattan estimate and is
//! therefore move-optimal; [`Dfs`](Algorithm::Dfs) explores a stack
//! frontier and guarantees only termination. Both carry a visited set:
//! every slide is reversible, so an unchecked search would cycle forever.

pub use board::{Board, HEIGHT, WIDTH};
pub use location::Location;
pub use piece::{Piece, PieceKind};
pub use solver::{Algorithm, Solution, Stats, UnknownAlgorithm};

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub(crate) mod location;
pub(crate) mod piece;
pub mod builder;
pub(crate) mod solver;
pub(crate) mod step;
pub(crate) mod successor;
