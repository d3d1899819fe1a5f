use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Dir, Pos, Tile};
use crate::vec2d::Vec2d;

/// The mutable grid of one level attempt.
///
/// Short rows are padded with walls and anything outside the grid also reads as wall,
/// the original row lengths are only kept so the board prints the same as the level it came from.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec2d<Tile>,
    row_lens: Vec<u8>,
}

impl Board {
    /// Rows must already be validated to fit into `MAX_SIZE`.
    pub(crate) fn new(rows: &[Vec<Tile>]) -> Self {
        Board {
            grid: Vec2d::new(rows, Tile::Wall),
            row_lens: rows.iter().map(|row| row.len() as u8).collect(),
        }
    }

    pub fn rows(&self) -> u8 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u8 {
        self.grid.cols()
    }

    /// `None` outside the grid. Padding of short rows is returned as `Tile::Wall`.
    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.grid.get(pos).cloned()
    }

    /// Like `get` but the area outside the grid is solid.
    pub fn tile(&self, pos: Pos) -> Tile {
        self.get(pos).unwrap_or(Tile::Wall)
    }

    pub(crate) fn set(&mut self, pos: Pos, tile: Tile) {
        self.grid[pos] = tile;
    }

    /// Last player tile in row-major order - levels are validated to have exactly one.
    pub fn find_player(&self) -> Option<Pos> {
        self.grid
            .positions()
            .filter(|&pos| self.grid[pos].is_player())
            .last()
    }

    pub fn count<P: Fn(Tile) -> bool>(&self, predicate: P) -> usize {
        self.grid.iter().filter(|&&tile| predicate(tile)).count()
    }

    pub fn box_cnt(&self) -> usize {
        self.count(Tile::is_box)
    }

    pub fn target_cnt(&self) -> usize {
        self.count(Tile::is_target)
    }

    pub fn player_cnt(&self) -> usize {
        self.count(Tile::is_player)
    }

    /// No box is left off a target.
    pub fn is_solved(&self) -> bool {
        self.count(|tile| tile == Tile::Box) == 0
    }

    /// Boxes not on a target with solid cells on two perpendicular sides.
    /// Such boxes can never be moved again. Boxes on targets are left alone
    /// and nothing smarter than this local test is attempted.
    pub fn cornered_boxes(&self) -> Vec<Pos> {
        self.grid
            .positions()
            .filter(|&pos| self.grid[pos] == Tile::Box && self.is_cornered(pos))
            .collect()
    }

    pub fn is_deadlocked(&self) -> bool {
        self.grid
            .positions()
            .any(|pos| self.grid[pos] == Tile::Box && self.is_cornered(pos))
    }

    fn is_cornered(&self, pos: Pos) -> bool {
        let up = self.is_solid(pos, Dir::Up);
        let down = self.is_solid(pos, Dir::Down);
        let left = self.is_solid(pos, Dir::Left);
        let right = self.is_solid(pos, Dir::Right);
        (up || down) && (left || right)
    }

    fn is_solid(&self, pos: Pos, dir: Dir) -> bool {
        match pos.neighbor(dir) {
            Some(next) => self.tile(next).is_wall(),
            None => true,
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (r, &len) in self.row_lens.iter().enumerate() {
            for c in 0..len {
                write!(f, "{}", self.grid[Pos::new(r as u8, c)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
