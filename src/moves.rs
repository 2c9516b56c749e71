use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// Directions of the blank, in the order they were made
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub(crate) fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }

    /// The moves that undo these, last move first
    pub fn inverse(&self) -> Moves {
        Moves(self.0.iter().rev().map(|dir| dir.inverse()).collect())
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![Dir::Up, Dir::Right, Dir::Down, Dir::Left]);
        assert_eq!(moves.to_string(), "urdl");
        assert_eq!(format!("{:?}", moves), "urdl");
        assert_eq!(Moves::default().to_string(), "");
    }

    #[test]
    fn inverting() {
        let moves = Moves::new(vec![Dir::Up, Dir::Up, Dir::Left]);
        assert_eq!(moves.inverse().to_string(), "rdd");
        assert_eq!(moves.inverse().inverse(), moves);
    }

    #[test]
    fn iterating() {
        let v = vec![Dir::Up, Dir::Right, Dir::Down, Dir::Left];
        let moves = Moves::new(v.clone());

        let mut v2 = Vec::new();
        for &m in &moves {
            v2.push(m);
        }
        for &m in moves.iter() {
            v2.push(m);
        }
        for m in moves.clone() {
            v2.push(m);
        }

        assert_eq!(moves.len(), 4);
        assert_eq!(v2.len(), 12);
        for chunk in v2.chunks(4) {
            assert_eq!(chunk, &v[..]);
        }
    }
}
