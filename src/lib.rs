// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod config;
pub mod heuristic;
pub mod moves;
pub mod parser;
pub mod shuffle;
pub mod solvability;
pub mod solver;
pub mod state;

mod data;
mod fs;

use std::error::Error;

pub use typed_arena::Arena;

pub use crate::data::{Dir, DIRECTIONS};
pub use crate::state::{PuzzleState, StateErr};

pub trait LoadPuzzle {
    fn load_puzzle<'a>(&self) -> Result<PuzzleState<'a>, Box<dyn Error>>;
}

impl LoadPuzzle for str {
    fn load_puzzle<'a>(&self) -> Result<PuzzleState<'a>, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(text.parse::<PuzzleState<'a>>()?)
    }
}
