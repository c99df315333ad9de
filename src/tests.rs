#[cfg(test)]
mod tests {
    use crate::builder::{BoardBuilder, BuilderInvalidReason, ParseError};
    use crate::piece::{Piece, PieceKind};
    use crate::successor::successors;
    use crate::{Algorithm, Board, Location};

    // the classic opening: the goal piece at the top centre, flanked by
    // vertical doubles, a horizontal double and the four singles below
    const CLASSIC: &str = "^11^
v11v
^<>^
v22v
2..2
";

    fn classic_builder() -> BoardBuilder {
        let mut builder = BoardBuilder::new();
        builder
            .add_piece(Piece::new(PieceKind::Vertical, Location(0, 0)))
            .add_piece(Piece::new(PieceKind::Goal, Location(1, 0)))
            .add_piece(Piece::new(PieceKind::Vertical, Location(3, 0)))
            .add_piece(Piece::new(PieceKind::Vertical, Location(0, 2)))
            .add_piece(Piece::new(PieceKind::Horizontal, Location(1, 2)))
            .add_piece(Piece::new(PieceKind::Vertical, Location(3, 2)))
            .add_piece(Piece::new(PieceKind::Single, Location(1, 3)))
            .add_piece(Piece::new(PieceKind::Single, Location(2, 3)))
            .add_piece(Piece::new(PieceKind::Single, Location(0, 4)))
            .add_piece(Piece::new(PieceKind::Single, Location(3, 4)));
        builder
    }

    fn renderings(boards: &[Board]) -> Vec<String> {
        let mut out = boards.iter().map(|board| format!("{}", board)).collect::<Vec<_>>();
        out.sort();
        out
    }

    #[test]
    fn build_and_render() {
        let board = classic_builder().build().unwrap();
        assert_eq!(format!("{}", board), CLASSIC);
    }

    #[test]
    fn parse_round_trip() {
        let board: Board = CLASSIC.parse().unwrap();
        assert_eq!(format!("{}", board), CLASSIC);
    }

    #[test]
    fn parse_rejects_wrong_dimensions() {
        assert!(matches!("11..\n11..\n....\n....".parse::<Board>(), Err(ParseError::BadDimensions)));
        assert!(matches!(
            "11...\n11...\n.....\n.....\n.....\n".parse::<Board>(),
            Err(ParseError::BadDimensions)
        ));
    }

    #[test]
    fn parse_rejects_unknown_symbol() {
        let err = "11x.\n11..\n....\n....\n....\n".parse::<Board>().unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownSymbol { symbol: 'x', location: Location(2, 0) }
        ));
    }

    #[test]
    fn parse_rejects_stray_half() {
        // a `>` with no `<` to its left spawns no piece, so the rebuilt
        // grid has an empty cell where the input claims a piece half
        let err = ">...\n11..\n11..\n....\n....\n".parse::<Board>().unwrap_err();
        assert!(matches!(err, ParseError::InconsistentPiece(Location(0, 0))));
    }

    #[test]
    fn parse_rejects_lone_goal_cell() {
        let err = "1...\n....\n....\n....\n....\n".parse::<Board>().unwrap_err();
        assert!(matches!(err, ParseError::InconsistentPiece(_)));
    }

    #[test]
    fn parse_rejects_out_of_bounds_piece() {
        // the `^` on the bottom row would put its `v` half off the board
        let err = "11..\n11..\n....\n....\n..^.\n".parse::<Board>().unwrap_err();
        match err {
            ParseError::Invalid(reasons) => {
                assert_eq!(reasons.as_slice(), [BuilderInvalidReason::PieceOutOfBounds])
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_missing_goal() {
        let err = "....\n....\n....\n....\n....\n".parse::<Board>().unwrap_err();
        match err {
            ParseError::Invalid(reasons) => {
                assert_eq!(reasons.as_slice(), [BuilderInvalidReason::MissingGoalPiece])
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_overlapping_pieces() {
        // the second `^` claims a cell already covered by the first
        let err = "^...\n^...\nv...\n....\n....\n".parse::<Board>().unwrap_err();
        match err {
            ParseError::Invalid(reasons) => {
                assert_eq!(reasons.as_slice(), [BuilderInvalidReason::OverlappingPieces])
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn builder_rejects_overlap() {
        let err = BoardBuilder::new()
            .add_piece(Piece::new(PieceKind::Goal, Location(1, 0)))
            .add_piece(Piece::new(PieceKind::Single, Location(2, 1)))
            .build()
            .unwrap_err();
        assert_eq!(err.as_slice(), [BuilderInvalidReason::OverlappingPieces]);
    }

    #[test]
    fn builder_rejects_duplicate_goal() {
        let err = BoardBuilder::new()
            .add_piece(Piece::new(PieceKind::Goal, Location(0, 0)))
            .add_piece(Piece::new(PieceKind::Goal, Location(2, 3)))
            .build()
            .unwrap_err();
        assert_eq!(err.as_slice(), [BuilderInvalidReason::DuplicateGoalPiece]);
    }

    #[test]
    fn goal_test_at_target_quadrant() {
        let solved = BoardBuilder::new()
            .add_piece(Piece::new(PieceKind::Goal, Location(1, 3)))
            .build()
            .unwrap();
        assert!(solved.is_goal());
        assert_eq!(solved.heuristic(), 0);

        let off_by_one = BoardBuilder::new()
            .add_piece(Piece::new(PieceKind::Goal, Location(0, 3)))
            .build()
            .unwrap();
        assert!(!off_by_one.is_goal());
        assert_eq!(off_by_one.heuristic(), 1);
    }

    #[test]
    fn heuristic_is_manhattan_distance() {
        let board: Board = CLASSIC.parse().unwrap();
        // goal corner at (1, 0), target at (1, 3)
        assert_eq!(board.heuristic(), 3);

        let corner = BoardBuilder::new()
            .add_piece(Piece::new(PieceKind::Goal, Location(0, 0)))
            .build()
            .unwrap();
        assert_eq!(corner.heuristic(), 4);
    }

    #[test]
    fn successors_of_goal_and_single() {
        let board: Board = "11..
11..
....
....
...2
"
        .parse()
        .unwrap();

        let mut expected = vec![
            // the single slides up
            "11..
11..
....
...2
....
",
            // the single slides left
            "11..
11..
....
....
..2.
",
            // the goal piece slides right into the stacked empty pair
            ".11.
.11.
....
....
...2
",
            // the goal piece slides down into the side-by-side empty pair
            "....
11..
11..
....
...2
",
        ]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
        expected.sort();

        assert_eq!(renderings(&successors(&board)), expected);
    }

    #[test]
    fn successors_of_double_pieces() {
        let board: Board = "11^.
11v.
<>..
....
....
"
        .parse()
        .unwrap();

        let mut expected = vec![
            // the vertical double slides down its own column
            "11..
11^.
<>v.
....
....
",
            // the vertical double slides sideways into the stacked pair
            "11.^
11.v
<>..
....
....
",
            // the horizontal double slides right along its own row
            "11^.
11v.
.<>.
....
....
",
            // the horizontal double slides down into the side-by-side pair
            "11^.
11v.
....
<>..
....
",
        ]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
        expected.sort();

        assert_eq!(renderings(&successors(&board)), expected);
    }

    #[test]
    fn successors_preserve_piece_cells() {
        let board: Board = CLASSIC.parse().unwrap();
        let mut parent_cells = CLASSIC.replace('\n', "").chars().collect::<Vec<_>>();
        parent_cells.sort_unstable();

        let children = successors(&board);
        assert!(!children.is_empty());

        for child in children {
            let rendering = format!("{}", child);
            let mut child_cells = rendering.replace('\n', "").chars().collect::<Vec<_>>();
            child_cells.sort_unstable();
            assert_eq!(child_cells, parent_cells);

            // one slide touches the vacated cells and the entered cells and
            // nothing else
            let differing = rendering
                .chars()
                .zip(CLASSIC.chars())
                .filter(|(a, b)| a != b)
                .count();
            assert!((2..=4).contains(&differing), "{differing} cells changed");
        }
    }

    #[test]
    fn astar_solves_solved_board_in_zero_moves() {
        let solved = BoardBuilder::new()
            .add_piece(Piece::new(PieceKind::Goal, Location(1, 3)))
            .build()
            .unwrap();
        let solution = solved.solve(Algorithm::AStar);
        assert_eq!(solution.moves(), Some(0));
        assert_eq!(solution.stats.visited, 1);
    }

    #[test]
    fn astar_is_move_optimal_on_straight_descents() {
        // nothing in the way: the optimum equals the Manhattan estimate
        let one_away: Board = "....
....
.11.
.11.
....
"
        .parse()
        .unwrap();
        assert_eq!(one_away.heuristic(), 1);
        assert_eq!(one_away.solve(Algorithm::AStar).moves(), Some(1));

        let two_away: Board = "....
.11.
.11.
....
....
"
        .parse()
        .unwrap();
        assert_eq!(two_away.heuristic(), 2);
        assert_eq!(two_away.solve(Algorithm::AStar).moves(), Some(2));
    }

    #[test]
    fn dfs_terminates_and_reaches_a_goal() {
        let board: Board = "....
.11.
.11.
....
....
"
        .parse()
        .unwrap();
        let solution = board.solve(Algorithm::Dfs);
        let path = solution.path.expect("dfs should find the goal");
        assert!(path.last().unwrap().is_goal());
        // not necessarily optimal, but never better than optimal
        assert!(path.len() - 1 >= 2);
    }

    #[test]
    fn packed_board_has_no_solution() {
        let board: Board = "2222
2112
2112
2222
2222
"
        .parse()
        .unwrap();
        assert!(successors(&board).is_empty());

        for algorithm in [Algorithm::AStar, Algorithm::Dfs] {
            let solution = board.solve(algorithm);
            assert!(solution.path.is_none());
            assert_eq!(solution.moves(), None);
            assert!(solution.solved_board().is_none());
            assert_eq!(solution.stats.visited, 1);
        }
    }

    #[test]
    fn searches_are_deterministic() {
        let board: Board = CLASSIC.parse().unwrap();

        for algorithm in [Algorithm::AStar, Algorithm::Dfs] {
            let first = board.solve(algorithm);
            let second = board.solve(algorithm);
            assert_eq!(first.moves(), second.moves());
            assert_eq!(
                first.solved_board().map(ToString::to_string),
                second.solved_board().map(ToString::to_string)
            );
            assert_eq!(first.stats, second.stats);
        }
    }

    #[test]
    fn classic_opening_is_solvable() {
        let board: Board = CLASSIC.parse().unwrap();
        let astar = board.solve(Algorithm::AStar);
        let path = astar.path.clone().expect("the classic opening has a solution");

        assert_eq!(format!("{}", path.first().unwrap()), CLASSIC);
        assert!(path.last().unwrap().is_goal());
        // the heuristic never overestimates
        assert!(path.len() - 1 >= board.heuristic());

        // every step along the path is one legal slide away from the last
        for pair in path.windows(2) {
            let children = successors(&pair[0]);
            assert!(children.contains(&pair[1]));
        }

        // dfs also terminates here, though on a path no shorter than astar's
        let dfs = board.solve(Algorithm::Dfs);
        assert!(dfs.moves().unwrap() >= astar.moves().unwrap());
    }
}
