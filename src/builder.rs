use std::ops::IndexMut;
use std::str::FromStr;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use thiserror::Error;

use crate::board::{Board, HEIGHT, WIDTH};
use crate::cell::Cell;
use crate::location::Location;
use crate::piece::{Piece, PieceKind};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// A piece's footprint extends outside the 4x5 grid.
    #[error("a piece extends outside the 4x5 grid")]
    PieceOutOfBounds,
    /// Two pieces would write the same cell. Overlaps indicate a malformed
    /// input and are never silently overwritten.
    #[error("two pieces overlap")]
    OverlappingPieces,
    /// No 2x2 goal piece was added.
    #[error("the board has no goal piece")]
    MissingGoalPiece,
    /// More than one 2x2 goal piece was added.
    #[error("the board has more than one goal piece")]
    DuplicateGoalPiece,
}

/// Builder for [`Board`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save
/// their state at some point.
#[derive(Clone)]
pub struct BoardBuilder {
    cells: Array2<Cell>,
    goal_pieces: usize,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            cells: Array2::from_shape_simple_fn((HEIGHT, WIDTH), Cell::default),
            goal_pieces: 0,
            invalid_reasons: Default::default(),
        }
    }
}

impl BoardBuilder {
    /// Construct a builder holding an empty 4x5 grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `piece` on the board under construction.
    ///
    /// May cause the builder to enter a
    /// [`PieceOutOfBounds`](BuilderInvalidReason::PieceOutOfBounds) or
    /// [`OverlappingPieces`](BuilderInvalidReason::OverlappingPieces)
    /// invalid state. If the builder is already in an invalid state, this
    /// function does nothing.
    pub fn add_piece(&mut self, piece: Piece) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let footprint = piece.footprint();
        for (location, _) in &footprint {
            match self.cells.get(location.as_index()) {
                None => {
                    self.invalid_reasons.push(BuilderInvalidReason::PieceOutOfBounds);
                    return self;
                }
                Some(Cell::Empty) => {}
                Some(_) => {
                    self.invalid_reasons.push(BuilderInvalidReason::OverlappingPieces);
                    return self;
                }
            }
        }

        if piece.kind == PieceKind::Goal {
            self.goal_pieces += 1;
        }
        for (location, cell) in footprint {
            self.cells.index_mut(location.as_index()).assign_elem(cell);
        }

        self
    }

    /// Convert the state of this builder into a [`Board`].
    ///
    /// Besides any invalid state entered while adding pieces, the board must
    /// hold exactly one goal piece; the goal test and the heuristic are
    /// meaningless without it.
    pub fn build(&self) -> Result<Board, Vec<BuilderInvalidReason>> {
        let mut invalid_reasons = self.invalid_reasons.clone();
        if invalid_reasons.is_empty() {
            match self.goal_pieces {
                1 => {}
                0 => invalid_reasons.push(BuilderInvalidReason::MissingGoalPiece),
                _ => invalid_reasons.push(BuilderInvalidReason::DuplicateGoalPiece),
            }
        }

        if !invalid_reasons.is_empty() {
            return Err(invalid_reasons);
        }

        Ok(Board { cells: self.cells.clone() })
    }
}

/// Reasons an input text fails to parse into a [`Board`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not exactly 5 lines of exactly 4 symbols.
    #[error("expected 5 lines of 4 symbols")]
    BadDimensions,
    /// A character outside `1 2 < > ^ v .` appeared.
    #[error("unrecognized symbol `{symbol}` at {location:?}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Where it appeared.
        location: Location,
    },
    /// A multi-cell piece did not line up with its top left marker: a stray
    /// `>` or `v` half, a lone goal cell, or a second goal block.
    #[error("inconsistent piece at {0:?}")]
    InconsistentPiece(Location),
    /// The pieces named by the text do not form a valid board.
    #[error("invalid board: {}", .0.iter().join(", "))]
    Invalid(Vec<BuilderInvalidReason>),
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parse the canonical 5-line textual form.
    ///
    /// Pieces are located by their top left markers (the first `1`, each
    /// `2`, `<` and `^`) and replayed through a [`BoardBuilder`]; the
    /// rebuilt grid must then match the input cell for cell, which rejects
    /// any inconsistent multi-cell piece before a search can see it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines().map(|line| line.chars().collect_vec()).collect_vec();
        if rows.len() != HEIGHT || rows.iter().any(|row| row.len() != WIDTH) {
            return Err(ParseError::BadDimensions);
        }

        let mut builder = BoardBuilder::new();
        let mut goal_found = false;
        for (y, row) in rows.iter().enumerate() {
            for (x, &symbol) in row.iter().enumerate() {
                let location = Location(x, y);
                let kind = match Cell::from_symbol(symbol) {
                    None => return Err(ParseError::UnknownSymbol { symbol, location }),
                    Some(Cell::Goal) if !goal_found => {
                        goal_found = true;
                        Some(PieceKind::Goal)
                    }
                    Some(Cell::Single) => Some(PieceKind::Single),
                    Some(Cell::HorizontalLeft) => Some(PieceKind::Horizontal),
                    Some(Cell::VerticalTop) => Some(PieceKind::Vertical),
                    // remaining goal cells, `>`/`v` halves and empties are
                    // accounted for by a top left marker elsewhere
                    Some(_) => None,
                };
                if let Some(kind) = kind {
                    builder.add_piece(Piece::new(kind, location));
                }
            }
        }

        let board = builder.build().map_err(ParseError::Invalid)?;

        for (index, cell) in board.cells.indexed_iter() {
            let location = Location::from(index);
            if cell.symbol() != rows[location.1][location.0] {
                return Err(ParseError::InconsistentPiece(location));
            }
        }

        Ok(board)
    }
}
