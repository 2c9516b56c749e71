use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::state::{PuzzleState, StateErr};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseErr {
    Empty,
    Tile(usize, usize),
    RowLength(usize),
    State(StateErr),
}

impl Display for ParseErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParseErr::Empty => write!(f, "No tiles"),
            ParseErr::Tile(r, c) => write!(f, "Invalid tile at pos: [{}, {}]", r, c),
            ParseErr::RowLength(r) => write!(f, "Wrong number of tiles on row {}", r),
            ParseErr::State(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParseErr {}

impl From<StateErr> for ParseErr {
    fn from(err: StateErr) -> Self {
        ParseErr::State(err)
    }
}

impl<'a> FromStr for PuzzleState<'a> {
    type Err = ParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// One row per line, tiles separated by whitespace, `0`, `_` or `.` is the blank.
/// The board must be square, its size is the number of rows.
pub(crate) fn parse<'a>(text: &str) -> Result<PuzzleState<'a>, ParseErr> {
    let mut rows = Vec::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let r = rows.len();
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(c, token)| parse_tile(token).ok_or(ParseErr::Tile(r, c)))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    let size = rows.len();
    if size == 0 {
        return Err(ParseErr::Empty);
    }
    if let Some(r) = rows.iter().position(|row| row.len() != size) {
        return Err(ParseErr::RowLength(r));
    }

    let tiles: Vec<usize> = rows.into_iter().flatten().collect();
    Ok(PuzzleState::from_tiles(size, &tiles)?)
}

fn parse_tile(token: &str) -> Option<usize> {
    match token {
        "_" | "." => Some(0),
        _ => token.parse().ok(),
    }
}
