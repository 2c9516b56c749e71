use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use crate::state::PuzzleState;

/// Frontier entry. Ordered by heuristic, then by when it was pushed,
/// the state itself never takes part in the comparison.
#[derive(Clone, Copy)]
pub(crate) struct SearchNode<'a> {
    pub(crate) h: u32,
    pub(crate) seq: u64,
    pub(crate) state: &'a PuzzleState<'a>,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(h: u32, seq: u64, state: &'a PuzzleState<'a>) -> Self {
        Self { h, seq, state }
    }

    fn key(&self) -> (u32, u64) {
        (self.h, self.seq)
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SearchNode<'_> {}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // smaller is better, wrap in Reverse for BinaryHeap
        self.key().cmp(&other.key())
    }
}

impl Debug for SearchNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "h: {}, seq: {}, depth: {}, tiles: {:?}",
            self.h,
            self.seq,
            self.state.depth(),
            self.state.tiles()
        )
    }
}
