use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::data::{Dir, Pos, DIRECTIONS, MAX_SIZE, MIN_SIZE};
use crate::moves::Moves;
use crate::{shuffle, solvability};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateErr {
    TooSmall(usize),
    TooLarge(usize),
    WrongLength { expected: usize, got: usize },
    OutOfRange(usize),
    Duplicate(usize),
}

impl Display for StateErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            StateErr::TooSmall(size) => write!(f, "Board size {} is too small", size),
            StateErr::TooLarge(size) => {
                write!(f, "Board size {} is larger than {}", size, MAX_SIZE)
            }
            StateErr::WrongLength { expected, got } => {
                write!(f, "Expected {} tiles, got {}", expected, got)
            }
            StateErr::OutOfRange(value) => write!(f, "Tile {} is out of range", value),
            StateErr::Duplicate(value) => write!(f, "Tile {} appears more than once", value),
        }
    }
}

impl Error for StateErr {}

/// A board and the state it was reached from.
///
/// States never own their predecessors. Children created by `apply` borrow
/// their parent, the search keeps all of them in an arena so the whole chain
/// lives as long as the arena.
///
/// Equality and hashing only look at the tiles so two paths reaching the same board
/// are the same state as far as the visited set is concerned.
#[derive(Clone)]
pub struct PuzzleState<'a> {
    size: usize,
    tiles: Vec<u8>,
    blank_pos: usize,
    parent: Option<&'a PuzzleState<'a>>,
    dir: Option<Dir>,
    depth: u32,
}

impl<'a> PuzzleState<'a> {
    /// The solved board: 1..N²-1 followed by the blank
    pub fn goal(size: usize) -> Result<Self, StateErr> {
        check_size(size)?;
        let cnt = size * size;
        let mut tiles: Vec<u8> = (1..cnt).map(|t| t as u8).collect();
        tiles.push(0);
        Ok(PuzzleState::root(size, tiles, cnt - 1))
    }

    /// Row-major tiles, 0 is the blank
    pub fn from_tiles(size: usize, tiles: &[usize]) -> Result<Self, StateErr> {
        check_size(size)?;
        let cnt = size * size;
        if tiles.len() != cnt {
            return Err(StateErr::WrongLength {
                expected: cnt,
                got: tiles.len(),
            });
        }

        let mut seen = vec![false; cnt];
        for &tile in tiles {
            if tile >= cnt {
                return Err(StateErr::OutOfRange(tile));
            }
            if seen[tile] {
                return Err(StateErr::Duplicate(tile));
            }
            seen[tile] = true;
        }

        // n distinct values below n - must contain the blank
        let blank_pos = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        let tiles = tiles.iter().map(|&t| t as u8).collect();
        Ok(PuzzleState::root(size, tiles, blank_pos))
    }

    pub(crate) fn root(size: usize, tiles: Vec<u8>, blank_pos: usize) -> Self {
        debug_assert_eq!(tiles[blank_pos], 0);
        PuzzleState {
            size,
            tiles,
            blank_pos,
            parent: None,
            dir: None,
            depth: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn blank_pos(&self) -> usize {
        self.blank_pos
    }

    pub fn parent(&self) -> Option<&'a PuzzleState<'a>> {
        self.parent
    }

    /// Which way the blank moved to get here from the parent
    pub fn dir(&self) -> Option<Dir> {
        self.dir
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == 0
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &t)| usize::from(t) == i + 1)
    }

    pub fn is_solvable(&self) -> bool {
        solvability::is_solvable(self)
    }

    /// Directions the blank can move in, always in the order up, down, left, right
    pub fn valid_moves(&self) -> Vec<Dir> {
        DIRECTIONS
            .iter()
            .cloned()
            .filter(|&dir| self.blank_target(dir).is_some())
            .collect()
    }

    /// Moves the blank, `None` if that would take it off the board
    pub fn apply(&'a self, dir: Dir) -> Option<PuzzleState<'a>> {
        let target = self.blank_target(dir)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank_pos, target);
        Some(PuzzleState {
            size: self.size,
            tiles,
            blank_pos: target,
            parent: Some(self),
            dir: Some(dir),
            depth: self.depth + 1,
        })
    }

    /// New board `move_count` random blank moves away from this one.
    ///
    /// The result is a root, it doesn't remember how it was shuffled.
    pub fn shuffle<R: Rng + ?Sized>(&self, move_count: usize, rng: &mut R) -> PuzzleState<'a> {
        shuffle::random_walk(self, move_count, rng)
    }

    /// All states from the root to this one, inclusive
    pub fn path(&self) -> Vec<&PuzzleState<'a>> {
        let mut states = vec![self];
        let mut cur = self;
        while let Some(prev) = cur.parent {
            states.push(prev);
            cur = prev;
        }
        states.reverse();
        states
    }

    /// Blank moves from the root to this state
    pub fn moves(&self) -> Moves {
        Moves::new(self.path().iter().filter_map(|state| state.dir).collect())
    }

    pub(crate) fn blank_target(&self, dir: Dir) -> Option<usize> {
        Pos::from_index(self.blank_pos, self.size)
            .step(dir, self.size)
            .map(|pos| pos.index(self.size))
    }
}

fn check_size(size: usize) -> Result<(), StateErr> {
    if size < MIN_SIZE {
        Err(StateErr::TooSmall(size))
    } else if size > MAX_SIZE {
        Err(StateErr::TooLarge(size))
    } else {
        Ok(())
    }
}

impl PartialEq for PuzzleState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for PuzzleState<'_> {}

impl Hash for PuzzleState<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl Display for PuzzleState<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for row in self.tiles.chunks(self.size) {
            for (c, &tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if tile == 0 {
                    write!(f, "{:>1$}", ".", width)?;
                } else {
                    write!(f, "{:>1$}", tile, width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// derived Debug would print the whole parent chain
impl Debug for PuzzleState<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleState")
            .field("size", &self.size)
            .field("tiles", &self.tiles)
            .field("blank_pos", &self.blank_pos)
            .field("dir", &self.dir)
            .field("depth", &self.depth)
            .finish()
    }
}
