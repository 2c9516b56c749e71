use std::fmt::{self, Display, Formatter};

/// Tile values must fit in a byte.
pub(crate) const MAX_SIZE: usize = 16;
pub(crate) const MIN_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// The order in which moves are enumerated
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn inverse(self) -> Self {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Pos {
    pub(crate) r: u8,
    pub(crate) c: u8,
}

impl Pos {
    pub(crate) fn from_index(index: usize, size: usize) -> Pos {
        Pos {
            r: (index / size) as u8,
            c: (index % size) as u8,
        }
    }

    /// Where tile `value` sits in the solved board
    pub(crate) fn goal_of(value: u8, size: usize) -> Pos {
        debug_assert!(value != 0);
        Pos::from_index(usize::from(value) - 1, size)
    }

    pub(crate) fn index(self, size: usize) -> usize {
        usize::from(self.r) * size + usize::from(self.c)
    }

    pub(crate) fn dist(self, other: Pos) -> u32 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u32
    }

    /// Neighbor in `dir` or `None` if it would be off a `size`×`size` board
    pub(crate) fn step(self, dir: Dir, size: usize) -> Option<Pos> {
        let last = (size - 1) as u8;
        match dir {
            Dir::Up if self.r > 0 => Some(Pos { r: self.r - 1, c: self.c }),
            Dir::Down if self.r < last => Some(Pos { r: self.r + 1, c: self.c }),
            Dir::Left if self.c > 0 => Some(Pos { r: self.r, c: self.c - 1 }),
            Dir::Right if self.c < last => Some(Pos { r: self.r, c: self.c + 1 }),
            _ => None,
        }
    }
}
