use std::fmt::{self, Display, Formatter};

use crate::board::Board;
use crate::data::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Deadlocked,
}

impl Status {
    /// Won or deadlocked - moves don't do anything anymore.
    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Status::InProgress => write!(f, "in progress"),
            Status::Won => write!(f, "won"),
            Status::Deadlocked => write!(f, "deadlocked"),
        }
    }
}

/// Everything the presentation layer needs after each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub player_pos: Pos,
    pub move_count: u32,
    pub status: Status,
}

impl GameState {
    pub(crate) fn new(board: Board, player_pos: Pos) -> Self {
        GameState {
            board,
            player_pos,
            move_count: 0,
            status: Status::InProgress,
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "Moves: {}", self.move_count)?;
        writeln!(f, "Status: {}", self.status)
    }
}
