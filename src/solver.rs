use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;
use std::str::FromStr;

use log::debug;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::board::Board;
use crate::successor::successors;

/// The search strategies the solver can drive.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Algorithm {
    /// Best-first search ordered by moves so far plus the Manhattan
    /// heuristic. The first goal configuration reached uses the fewest
    /// slides possible.
    AStar,
    /// Unguided depth-first search. Finds a goal configuration if one is
    /// reachable, but not necessarily along a shortest path.
    Dfs,
}

/// Error returned when parsing an unrecognized algorithm name.
#[derive(Debug, Error)]
#[error("unknown algorithm `{0}`, expected `astar` or `dfs`")]
pub struct UnknownAlgorithm(String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astar" => Ok(Self::AStar),
            "dfs" => Ok(Self::Dfs),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::AStar => write!(f, "astar"),
            Self::Dfs => write!(f, "dfs"),
        }
    }
}

/// Counters describing how much work a search did.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// States popped from the frontier and expanded.
    pub visited: usize,
    /// Successor states produced, counting duplicates.
    pub generated: usize,
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "visited {} states, generated {}", self.visited, self.generated)
    }
}

/// The outcome of one search invocation.
///
/// An exhausted frontier is a legitimate outcome, not an error: `path` is
/// simply `None` and the caller decides how to surface it.
pub struct Solution {
    /// Boards from the initial configuration to the goal, inclusive, or
    /// `None` if the frontier was exhausted without reaching a goal.
    pub path: Option<Vec<Board>>,
    /// Search-effort counters.
    pub stats: Stats,
    algorithm: Algorithm,
}

impl Solution {
    /// Number of slides in the solution, if one was found.
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }

    /// The goal board, if one was reached.
    pub fn solved_board(&self) -> Option<&Board> {
        self.path.as_ref().and_then(|path| path.last())
    }
}

impl Debug for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves() {
            None => writeln!(f, "{}: no solution", self.algorithm)?,
            Some(moves) => writeln!(f, "{}: {} moves", self.algorithm, moves)?,
        }
        write!(f, "{}", self.stats)
    }
}

/// A frontier entry: a board plus the search metadata attached to it.
///
/// Nodes keep their parent alive through an [`Rc`] so the path can be
/// reconstructed once a goal pops; identity for deduplication purposes is
/// the board alone, handled by the visited set.
struct SearchNode {
    board: Board,
    /// Slides taken from the initial board to reach this one.
    depth: usize,
    /// `depth` plus the heuristic estimate; only meaningful under A*.
    priority: usize,
    /// Insertion counter breaking priority ties, oldest first, so runs are
    /// reproducible.
    seq: u64,
    parent: Option<Rc<SearchNode>>,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for SearchNode {}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; compare reversed so the smallest
        // priority pops first, oldest insertion first among equals
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn reconstruct(goal: Rc<SearchNode>) -> Vec<Board> {
    let mut path = Vec::with_capacity(goal.depth + 1);
    let mut node = Some(&goal);
    while let Some(current) = node {
        path.push(current.board.clone());
        node = current.parent.as_ref();
    }
    path.reverse();
    path
}

/// Search `start` for a goal configuration, driven by `algorithm`.
pub fn solve(start: &Board, algorithm: Algorithm) -> Solution {
    let (path, stats) = match algorithm {
        Algorithm::AStar => astar(start),
        Algorithm::Dfs => dfs(start),
    };

    match &path {
        Some(path) => debug!("{algorithm} found a goal in {} moves ({stats})", path.len() - 1),
        None => debug!("{algorithm} exhausted the frontier ({stats})"),
    }

    Solution { path, stats, algorithm }
}

fn astar(start: &Board) -> (Option<Vec<Board>>, Stats) {
    let mut stats = Stats::default();
    let mut visited: FxHashSet<Board> = FxHashSet::default();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0;

    frontier.push(Rc::new(SearchNode {
        priority: start.heuristic(),
        board: start.clone(),
        depth: 0,
        seq,
        parent: None,
    }));

    while let Some(node) = frontier.pop() {
        // several paths to the same board may coexist in the frontier;
        // visited-marking happens here at pop time, never at push time, so
        // a state is always expanded at its lowest priority first
        if !visited.insert(node.board.clone()) {
            continue;
        }
        stats.visited += 1;

        if node.board.is_goal() {
            return (Some(reconstruct(node)), stats);
        }

        for succ in successors(&node.board) {
            stats.generated += 1;
            if visited.contains(&succ) {
                continue;
            }

            seq += 1;
            let depth = node.depth + 1;
            frontier.push(Rc::new(SearchNode {
                priority: depth + succ.heuristic(),
                board: succ,
                depth,
                seq,
                parent: Some(Rc::clone(&node)),
            }));
        }
    }

    (None, stats)
}

fn dfs(start: &Board) -> (Option<Vec<Board>>, Stats) {
    let mut stats = Stats::default();
    let mut visited: FxHashSet<Board> = FxHashSet::default();
    let mut frontier = vec![Rc::new(SearchNode {
        board: start.clone(),
        depth: 0,
        priority: 0,
        seq: 0,
        parent: None,
    })];

    while let Some(node) = frontier.pop() {
        // the move model is reversible, so an unchecked depth-first walk
        // would cycle; states already expanded are dropped here
        if !visited.insert(node.board.clone()) {
            continue;
        }
        stats.visited += 1;

        if node.board.is_goal() {
            return (Some(reconstruct(node)), stats);
        }

        for succ in successors(&node.board) {
            stats.generated += 1;
            if visited.contains(&succ) {
                continue;
            }

            frontier.push(Rc::new(SearchNode {
                depth: node.depth + 1,
                priority: 0,
                seq: 0,
                board: succ,
                parent: Some(Rc::clone(&node)),
            }));
        }
    }

    (None, stats)
}
