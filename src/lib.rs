// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod board;
pub mod config;
pub mod data;
pub mod engine;
pub mod level;
pub mod moves;
pub mod parser;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;

pub use crate::board::Board;
pub use crate::data::{Dir, Pos, Tile, DIRECTIONS};
pub use crate::engine::{Engine, MoveOutcome};
pub use crate::level::{Level, LevelSet};
pub use crate::moves::{Move, Moves};
pub use crate::state::{GameState, Status};

pub trait LoadLevels {
    fn load_levels(&self) -> Result<LevelSet, Box<dyn Error>>;
}

impl LoadLevels for str {
    fn load_levels(&self) -> Result<LevelSet, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(text.parse()?)
    }
}

impl LoadLevels for std::path::Path {
    fn load_levels(&self) -> Result<LevelSet, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(text.parse()?)
    }
}
