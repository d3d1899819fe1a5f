use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::board::Board;
use crate::data::Pos;
use crate::parser::{self, ParserErr};

/// Ordered from easiest to hardest.
const BUILTIN_LEVELS: [(&str, &[&str]); 3] = [
    ("Super Easy", &["#####", "#@$.#", "#####"]),
    (
        "Classic Easy",
        &[
            "  ##### ",
            "###   # ",
            "#.@$  # ",
            "###  .# ",
            "#.##$ # ",
            "# # . ##",
            "#$  $$.#",
            "#   .  #",
            "########",
        ],
    ),
    (
        "Moderate",
        &[
            "########",
            "#      #",
            "# .  $ #",
            "# .$@$.#",
            "# $  . #",
            "#      #",
            "########",
        ],
    ),
];

/// An immutable level - the starting board and where the player stands on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    name: Option<String>,
    board: Board,
    player_pos: Pos,
}

impl Level {
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParserErr> {
        let (grid, player_pos) = parser::parse_rows(rows)?;
        Ok(Level {
            name: None,
            board: Board::new(&grid),
            player_pos,
        })
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(String::as_str)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }
}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // trim so we can specify levels using raw strings more easily
        let rows: Vec<_> = s.trim_matches('\n').lines().collect();
        Level::new(&rows)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(ref name) = self.name {
            writeln!(f, "; {}", name)?;
        }
        write!(f, "{}", self.board)
    }
}

/// A non-empty list of levels. Any index is valid, see `normalize`.
#[derive(Clone, PartialEq, Eq)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    pub fn new(levels: Vec<Level>) -> Result<Self, ParserErr> {
        if levels.is_empty() {
            Err(ParserErr::NoLevels)
        } else {
            Ok(LevelSet { levels })
        }
    }

    /// The levels shipped with the puzzle screen.
    pub fn builtin() -> Self {
        let levels = BUILTIN_LEVELS
            .iter()
            .map(|&(name, rows)| {
                Level::new(rows)
                    .expect("built-in levels are valid")
                    .with_name(name)
            })
            .collect();
        LevelSet { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false, kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Negative and out of range indices wrap around: `|index| mod len`.
    pub fn normalize(&self, index: i64) -> usize {
        (index.unsigned_abs() % self.levels.len() as u64) as usize
    }

    pub fn get(&self, index: i64) -> &Level {
        &self.levels[self.normalize(index)]
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Level> {
        self.levels.iter()
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        LevelSet::builtin()
    }
}

impl FromStr for LevelSet {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_pack(s)
    }
}

impl<'a> IntoIterator for &'a LevelSet {
    type Item = &'a Level;
    type IntoIter = ::std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

impl Debug for LevelSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:?}", level)?;
        }
        Ok(())
    }
}
