use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::heuristic::{
    Heuristic, LinearConflict, ManhattanDistance, MisplacedTiles, NilssonSequence,
};

/// Expansions after which the search gives up
pub const DEFAULT_MAX_NODES: usize = 100_000;

/// Random moves used to scramble a board when no count is given
pub fn default_shuffle_moves(size: usize) -> usize {
    size * size * 10
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicKind {
    Manhattan,
    Misplaced,
    LinearConflict,
    Nilsson,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 4] = [
        HeuristicKind::Manhattan,
        HeuristicKind::Misplaced,
        HeuristicKind::Nilsson,
        HeuristicKind::LinearConflict,
    ];

    pub fn heuristic(self) -> &'static dyn Heuristic {
        match self {
            HeuristicKind::Manhattan => &ManhattanDistance,
            HeuristicKind::Misplaced => &MisplacedTiles,
            HeuristicKind::LinearConflict => &LinearConflict,
            HeuristicKind::Nilsson => &NilssonSequence,
        }
    }
}

impl Display for HeuristicKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            HeuristicKind::Manhattan => write!(f, "manhattan"),
            HeuristicKind::Misplaced => write!(f, "misplaced"),
            HeuristicKind::LinearConflict => write!(f, "linear-conflict"),
            HeuristicKind::Nilsson => write!(f, "nilsson"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl Display for UnknownHeuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown heuristic: {}", self.0)
    }
}

impl std::error::Error for UnknownHeuristic {}

impl FromStr for HeuristicKind {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeuristicKind::ALL
            .iter()
            .cloned()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| UnknownHeuristic(s.to_string()))
    }
}
