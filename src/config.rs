use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use crate::level::LevelSet;
use crate::LoadLevels;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelSource {
    Builtin,
    File(PathBuf),
}

impl LevelSource {
    pub fn load(&self) -> Result<LevelSet, Box<dyn Error>> {
        match *self {
            LevelSource::Builtin => Ok(LevelSet::builtin()),
            LevelSource::File(ref path) => path.as_path().load_levels(),
        }
    }
}

impl Display for LevelSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LevelSource::Builtin => write!(f, "built-in levels"),
            LevelSource::File(ref path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub level: i64,
    pub source: LevelSource,
    /// Print the board after every accepted move, not just at the end.
    pub print_steps: bool,
    pub list: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            level: 0,
            source: LevelSource::Builtin,
            print_steps: false,
            list: false,
        }
    }
}
