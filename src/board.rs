use std::fmt::{Debug, Display, Formatter, Write};

use ndarray::Array2;

use crate::cell::Cell;
use crate::location::Location;
use crate::solver::{self, Algorithm, Solution};

/// Width of the board, in cells.
pub const WIDTH: usize = 4;
/// Height of the board, in cells.
pub const HEIGHT: usize = 5;

/// Top left corner of the 2x2 target region the goal piece must reach.
pub(crate) const GOAL_TARGET: Location = Location(1, 3);

/// One configuration of the puzzle: a 5-row by 4-column grid of cell
/// symbols.
///
/// Boards are immutable once constructed; the successor generator always
/// produces fresh boards rather than mutating its input. Build one with a
/// [`BoardBuilder`](crate::builder::BoardBuilder) or parse the 5-line
/// textual form with [`FromStr`](std::str::FromStr).
///
/// Two boards with identical cell contents are the same search state no
/// matter how they were reached: [`Hash`] and [`Eq`] are pure functions of
/// the cells, equivalent to keying on the canonical [`Display`] rendering.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
}

impl Board {
    /// The cell at `location`, or `None` if out of range.
    pub(crate) fn cell(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    /// Top left corner of the goal piece.
    pub(crate) fn goal_origin(&self) -> Location {
        // row-major scan, so the first goal cell found is the piece's top
        // left corner; builders guarantee exactly one goal piece exists
        let (index, _) = self
            .cells
            .indexed_iter()
            .find(|(_, cell)| **cell == Cell::Goal)
            .unwrap();
        Location::from(index)
    }

    /// Whether the goal piece occupies the target quadrant, i.e. the four
    /// cells at rows 3-4, columns 1-2 all belong to it.
    pub fn is_goal(&self) -> bool {
        [Location(1, 3), Location(2, 3), Location(1, 4), Location(2, 4)]
            .into_iter()
            .all(|location| self.cell(location) == Some(Cell::Goal))
    }

    /// Manhattan distance from the goal piece's top left corner to the
    /// target corner.
    ///
    /// A slide moves a piece by exactly one cell, so this never
    /// overestimates the number of slides left; it is admissible and
    /// consistent, which makes the first goal [`astar`](Algorithm::AStar)
    /// pops move-optimal.
    pub fn heuristic(&self) -> usize {
        self.goal_origin().manhattan_distance(GOAL_TARGET)
    }

    /// Search for a goal configuration reachable from this board, using
    /// `algorithm` to drive the exploration.
    pub fn solve(&self, algorithm: Algorithm) -> Solution {
        solver::solve(self, algorithm)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                f.write_char(cell.symbol())?;
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
