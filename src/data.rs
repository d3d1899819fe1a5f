use std::fmt::{self, Display, Formatter};

pub(crate) const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// The neighboring position in `dir` or `None` if it would leave the `u8` range.
    /// Whether it's inside the grid is up to the grid.
    pub(crate) fn neighbor(self, dir: Dir) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = i32::from(self.r) + dr;
        let c = i32::from(self.c) + dc;
        if r < 0 || c < 0 || r > MAX_SIZE as i32 || c > MAX_SIZE as i32 {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    /// (row, column) delta
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }

    /// Accepts both walks and pushes in LURD notation.
    pub fn from_lurd(c: char) -> Option<Dir> {
        match c {
            'u' | 'U' => Some(Dir::Up),
            'r' | 'R' => Some(Dir::Right),
            'd' | 'D' => Some(Dir::Down),
            'l' | 'L' => Some(Dir::Left),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}

/// Classification of a single board cell - static (wall, floor, target)
/// combined with what's standing on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Floor,
    Wall,
    Target,
    Box,
    BoxOnTarget,
    Player,
    PlayerOnTarget,
}

impl Tile {
    /// Parses (a subset of) XSB - `-` and `_` are accepted as floor.
    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            ' ' | '-' | '_' => Some(Tile::Floor),
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Target),
            '$' => Some(Tile::Box),
            '*' => Some(Tile::BoxOnTarget),
            '@' => Some(Tile::Player),
            '+' => Some(Tile::PlayerOnTarget),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Tile::Floor => ' ',
            Tile::Wall => '#',
            Tile::Target => '.',
            Tile::Box => '$',
            Tile::BoxOnTarget => '*',
            Tile::Player => '@',
            Tile::PlayerOnTarget => '+',
        }
    }

    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }

    pub fn is_box(self) -> bool {
        self == Tile::Box || self == Tile::BoxOnTarget
    }

    pub fn is_player(self) -> bool {
        self == Tile::Player || self == Tile::PlayerOnTarget
    }

    pub fn is_target(self) -> bool {
        match self {
            Tile::Target | Tile::BoxOnTarget | Tile::PlayerOnTarget => true,
            _ => false,
        }
    }

    /// Floor or target with nothing on it
    pub fn is_free(self) -> bool {
        self == Tile::Floor || self == Tile::Target
    }

    /// What remains when a box or the player leaves the cell.
    pub(crate) fn vacated(self) -> Tile {
        if self.is_target() {
            Tile::Target
        } else {
            Tile::Floor
        }
    }

    pub(crate) fn with_box(self) -> Tile {
        if self.is_target() {
            Tile::BoxOnTarget
        } else {
            Tile::Box
        }
    }

    pub(crate) fn with_player(self) -> Tile {
        if self.is_target() {
            Tile::PlayerOnTarget
        } else {
            Tile::Player
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
