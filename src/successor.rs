use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::AssignElem;
use strum::VariantArray;

use crate::board::{Board, HEIGHT, WIDTH};
use crate::cell::Cell;
use crate::location::Location;
use crate::step::Step;

/// All boards reachable from `board` by one legal slide.
///
/// Moves are enumerated in a fixed order so that searches expand states
/// deterministically: moves into lone empty cells first (single pieces and
/// double pieces sliding along their axis), then moves into vertically
/// adjacent empty pairs (the goal piece and vertical doubles sliding
/// sideways), then moves into horizontally adjacent pairs (the goal piece
/// and horizontal doubles sliding up or down). Cells are scanned row by
/// row within each pass.
///
/// A board lacking a piece category simply yields no moves of that
/// category. Duplicate successors are not filtered here; the search engine
/// deduplicates against its visited set.
pub(crate) fn successors(board: &Board) -> Vec<Board> {
    let mut out = Vec::new();
    lone_empty_moves(board, &mut out);
    vertical_pair_moves(board, &mut out);
    horizontal_pair_moves(board, &mut out);
    out
}

/// Copy `board` with the given cells replaced.
fn apply(board: &Board, edits: &[(Location, Cell)]) -> Board {
    let mut next = board.clone();
    for (location, cell) in edits {
        next.cells.index_mut(location.as_index()).assign_elem(*cell);
    }
    next
}

/// Moves enabled by a single empty cell: a 1x1 piece sliding in from any
/// side, or a double piece advancing one cell along its own axis.
fn lone_empty_moves(board: &Board, out: &mut Vec<Board>) {
    for (y, x) in (0..HEIGHT).cartesian_product(0..WIDTH) {
        let empty = Location(x, y);
        if board.cell(empty) != Some(Cell::Empty) {
            continue;
        }

        for &step in Step::VARIANTS {
            let neighbor = step.attempt_from(empty);
            let Some(cell) = board.cell(neighbor) else {
                // off the board; no move from this direction
                continue;
            };

            match (step, cell) {
                (_, Cell::Single) => {
                    out.push(apply(board, &[(neighbor, Cell::Empty), (empty, Cell::Single)]));
                }
                // `v` directly above the empty cell: the piece slides down
                (Step::Up, Cell::VerticalBottom) => {
                    let top = Step::Up.attempt_from(neighbor);
                    if board.cell(top) == Some(Cell::VerticalTop) {
                        out.push(apply(board, &[
                            (top, Cell::Empty),
                            (neighbor, Cell::VerticalTop),
                            (empty, Cell::VerticalBottom),
                        ]));
                    }
                }
                // `^` directly below: the piece slides up
                (Step::Down, Cell::VerticalTop) => {
                    let bottom = Step::Down.attempt_from(neighbor);
                    if board.cell(bottom) == Some(Cell::VerticalBottom) {
                        out.push(apply(board, &[
                            (bottom, Cell::Empty),
                            (neighbor, Cell::VerticalBottom),
                            (empty, Cell::VerticalTop),
                        ]));
                    }
                }
                // `>` directly to the left: the piece slides right
                (Step::Left, Cell::HorizontalRight) => {
                    let left = Step::Left.attempt_from(neighbor);
                    if board.cell(left) == Some(Cell::HorizontalLeft) {
                        out.push(apply(board, &[
                            (left, Cell::Empty),
                            (neighbor, Cell::HorizontalLeft),
                            (empty, Cell::HorizontalRight),
                        ]));
                    }
                }
                // `<` directly to the right: the piece slides left
                (Step::Right, Cell::HorizontalLeft) => {
                    let right = Step::Right.attempt_from(neighbor);
                    if board.cell(right) == Some(Cell::HorizontalRight) {
                        out.push(apply(board, &[
                            (right, Cell::Empty),
                            (neighbor, Cell::HorizontalRight),
                            (empty, Cell::HorizontalLeft),
                        ]));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Moves enabled by two vertically stacked empty cells: the goal piece or a
/// vertical double in the two rows beside the pair slides sideways into it.
/// The left side is tried before the right.
fn vertical_pair_moves(board: &Board, out: &mut Vec<Board>) {
    for (y, x) in (0..HEIGHT - 1).cartesian_product(0..WIDTH) {
        let upper = Location(x, y);
        let lower = Location(x, y + 1);
        if board.cell(upper) != Some(Cell::Empty) || board.cell(lower) != Some(Cell::Empty) {
            continue;
        }

        for step in [Step::Left, Step::Right] {
            let side_upper = step.attempt_from(upper);
            let side_lower = step.attempt_from(lower);
            let far_upper = step.attempt_from(side_upper);
            let far_lower = step.attempt_from(side_lower);

            match (board.cell(side_upper), board.cell(side_lower)) {
                // the whole 2x2 block shifts one column; its far column vacates
                (Some(Cell::Goal), Some(Cell::Goal))
                    if board.cell(far_upper) == Some(Cell::Goal)
                        && board.cell(far_lower) == Some(Cell::Goal) =>
                {
                    out.push(apply(board, &[
                        (far_upper, Cell::Empty),
                        (far_lower, Cell::Empty),
                        (upper, Cell::Goal),
                        (lower, Cell::Goal),
                    ]));
                }
                (Some(Cell::VerticalTop), Some(Cell::VerticalBottom)) => {
                    out.push(apply(board, &[
                        (side_upper, Cell::Empty),
                        (side_lower, Cell::Empty),
                        (upper, Cell::VerticalTop),
                        (lower, Cell::VerticalBottom),
                    ]));
                }
                _ => {}
            }
        }
    }
}

/// The mirror of [`vertical_pair_moves`] along the row axis: the goal piece
/// or a horizontal double beside a horizontally adjacent empty pair slides
/// into it. The side above is tried before the side below.
fn horizontal_pair_moves(board: &Board, out: &mut Vec<Board>) {
    for (y, x) in (0..HEIGHT).cartesian_product(0..WIDTH - 1) {
        let left = Location(x, y);
        let right = Location(x + 1, y);
        if board.cell(left) != Some(Cell::Empty) || board.cell(right) != Some(Cell::Empty) {
            continue;
        }

        for step in [Step::Up, Step::Down] {
            let side_left = step.attempt_from(left);
            let side_right = step.attempt_from(right);
            let far_left = step.attempt_from(side_left);
            let far_right = step.attempt_from(side_right);

            match (board.cell(side_left), board.cell(side_right)) {
                (Some(Cell::Goal), Some(Cell::Goal))
                    if board.cell(far_left) == Some(Cell::Goal)
                        && board.cell(far_right) == Some(Cell::Goal) =>
                {
                    out.push(apply(board, &[
                        (far_left, Cell::Empty),
                        (far_right, Cell::Empty),
                        (left, Cell::Goal),
                        (right, Cell::Goal),
                    ]));
                }
                (Some(Cell::HorizontalLeft), Some(Cell::HorizontalRight)) => {
                    out.push(apply(board, &[
                        (side_left, Cell::Empty),
                        (side_right, Cell::Empty),
                        (left, Cell::HorizontalLeft),
                        (right, Cell::HorizontalRight),
                    ]));
                }
                _ => {}
            }
        }
    }
}
