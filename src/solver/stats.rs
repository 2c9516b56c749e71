use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Pops from the frontier, duplicates included
    pub nodes_expanded: usize,
    /// Largest frontier seen at the start of an iteration
    pub max_queue_size: usize,
    pub start_heuristic: u32,
    /// Heuristic of the last popped state, 0 if it was the goal
    pub end_heuristic: u32,
    /// Pushes to the frontier, the initial state included
    pub created: usize,
    /// Pops discarded because the board was already expanded
    pub duplicates: usize,
    /// Cumulative `nodes_expanded` after each iteration
    pub nodes_explored_at_steps: Vec<usize>,
}

impl Stats {
    pub fn unique_expanded(&self) -> usize {
        self.nodes_expanded - self.duplicates
    }

    /// Created but never popped
    pub fn left_in_queue(&self) -> usize {
        self.created - self.nodes_expanded
    }
}

// separator doesn't support usize
fn sep(n: usize) -> String {
    (n as u64).separated_string()
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "expanded: {}", self.nodes_expanded)?;
        writeln!(f, "duplicates: {}", self.duplicates)?;
        writeln!(f, "created: {}", self.created)?;
        writeln!(f, "max queue: {}", self.max_queue_size)?;
        writeln!(f, "heuristic: {} -> {}", self.start_heuristic, self.end_heuristic)?;
        writeln!(f, "steps recorded: {}", self.nodes_explored_at_steps.len())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes expanded: {}", sep(self.nodes_expanded))?;
        writeln!(f, "Reached duplicates: {}", sep(self.duplicates))?;
        writeln!(f, "States created: {}", sep(self.created))?;
        writeln!(f, "Created but not reached: {}", sep(self.left_in_queue()))?;
        writeln!(f, "Max queue size: {}", sep(self.max_queue_size))?;
        writeln!(f, "Heuristic at start: {}", self.start_heuristic)?;
        writeln!(f, "Heuristic at end: {}", self.end_heuristic)
    }
}
