//! Estimates of how far a board is from the goal. Less is better.
//!
//! Misplaced tiles and Manhattan distance never overestimate.
//! Linear conflict and Nilsson's sequence score can, which is fine
//! because the search doesn't promise shortest paths anyway.

use std::fmt::Debug;

use crate::data::Pos;
use crate::solvability::inversions;
use crate::state::PuzzleState;

pub trait Heuristic: Debug {
    fn name(&self) -> &'static str;

    fn estimate(&self, state: &PuzzleState<'_>) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles;

#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

#[derive(Debug, Clone, Copy, Default)]
pub struct LinearConflict;

#[derive(Debug, Clone, Copy, Default)]
pub struct NilssonSequence;

impl Heuristic for MisplacedTiles {
    fn name(&self) -> &'static str {
        "misplaced tiles"
    }

    fn estimate(&self, state: &PuzzleState<'_>) -> u32 {
        misplaced_tiles(state)
    }
}

impl Heuristic for ManhattanDistance {
    fn name(&self) -> &'static str {
        "manhattan distance"
    }

    fn estimate(&self, state: &PuzzleState<'_>) -> u32 {
        manhattan_distance(state)
    }
}

impl Heuristic for LinearConflict {
    fn name(&self) -> &'static str {
        "linear conflict"
    }

    fn estimate(&self, state: &PuzzleState<'_>) -> u32 {
        linear_conflict(state)
    }
}

impl Heuristic for NilssonSequence {
    fn name(&self) -> &'static str {
        "nilsson's sequence"
    }

    fn estimate(&self, state: &PuzzleState<'_>) -> u32 {
        nilssons_sequence(state)
    }
}

pub fn misplaced_tiles(state: &PuzzleState<'_>) -> u32 {
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(i, &tile)| tile != 0 && usize::from(tile) != i + 1)
        .count() as u32
}

pub fn manhattan_distance(state: &PuzzleState<'_>) -> u32 {
    let size = state.size();
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(i, &tile)| Pos::from_index(i, size).dist(Pos::goal_of(tile, size)))
        .sum()
}

/// Manhattan distance + 2 for every pair of tiles which are in their goal row (column)
/// but have to pass each other to get to their goal columns (rows).
pub fn linear_conflict(state: &PuzzleState<'_>) -> u32 {
    let size = state.size();
    let tiles = state.tiles();

    // tiles already in their goal line, in board order, so each reversed pair is an inversion
    let mut line = Vec::with_capacity(size);
    let mut conflicts = 0;

    for r in 0..size {
        line.clear();
        line.extend((0..size).map(|c| tiles[r * size + c]).filter(|&tile| {
            tile != 0 && usize::from(Pos::goal_of(tile, size).r) == r
        }));
        conflicts += inversions(&line);
    }

    for c in 0..size {
        line.clear();
        line.extend((0..size).map(|r| tiles[r * size + c]).filter(|&tile| {
            tile != 0 && usize::from(Pos::goal_of(tile, size).c) == c
        }));
        conflicts += inversions(&line);
    }

    manhattan_distance(state) + 2 * conflicts as u32
}

/// Perimeter of a 3x3 board, clockwise from the top left corner
const PERIMETER: [usize; 8] = [0, 1, 2, 5, 8, 7, 6, 3];

/// Goal values along `PERIMETER` - the bottom right corner is the blank's so it's left out
const GOAL_CYCLE: [u8; 7] = [1, 2, 3, 6, 8, 7, 4];

/// Nilsson's sequence score, only defined for 3x3, other sizes get Manhattan distance.
///
/// 1 point if the center isn't 5, 2 points for every perimeter tile
/// not followed (clockwise, skipping the blank) by its goal successor,
/// everything times 3 on top of Manhattan distance.
/// A 5 on the perimeter has no successor so it always scores.
/// Unlike the textbook cycle `1 2 3 6 9 8 7 4` the blank's cell is skipped, so the goal scores 0.
pub fn nilssons_sequence(state: &PuzzleState<'_>) -> u32 {
    let manhattan = manhattan_distance(state);
    if state.size() != 3 {
        return manhattan;
    }

    let tiles = state.tiles();
    let mut score = 0;

    if tiles[4] != 5 {
        score += 1;
    }

    let values: Vec<u8> = PERIMETER
        .iter()
        .map(|&i| tiles[i])
        .filter(|&tile| tile != 0)
        .collect();
    for (i, &cur) in values.iter().enumerate() {
        let next = values[(i + 1) % values.len()];
        if goal_successor(cur) != Some(next) {
            score += 2;
        }
    }

    manhattan + 3 * score
}

fn goal_successor(tile: u8) -> Option<u8> {
    GOAL_CYCLE
        .iter()
        .position(|&t| t == tile)
        .map(|i| GOAL_CYCLE[(i + 1) % GOAL_CYCLE.len()])
}
