use log::{debug, info, trace};

use crate::data::{Dir, Tile};
use crate::level::{Level, LevelSet};
use crate::moves::{Move, Moves};
use crate::state::{GameState, Status};

/// What `Engine::try_move` did. `move_player` reports all of these the same way -
/// by returning an unchanged state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Move),
    /// Wall, blocked box or the edge of the grid.
    Blocked,
    AlreadyTerminal,
}

impl MoveOutcome {
    pub fn is_moved(self) -> bool {
        match self {
            MoveOutcome::Moved(_) => true,
            _ => false,
        }
    }
}

/// Owns the board of the current level attempt and is the only thing that mutates it.
/// Every call runs to completion so callers only ever see whole moves.
#[derive(Debug, Clone)]
pub struct Engine {
    levels: LevelSet,
    level_index: i64,
    state: GameState,
    history: Moves,
}

impl Engine {
    /// Starts at the first level.
    pub fn new(levels: LevelSet) -> Self {
        Self::with_level(levels, 0)
    }

    pub fn with_level(levels: LevelSet, index: i64) -> Self {
        let level = levels.get(index);
        let state = GameState::new(level.board().clone(), level.player_pos());
        let mut engine = Engine {
            levels,
            level_index: index,
            state,
            history: Moves::default(),
        };
        engine.load_level(index);
        engine
    }

    /// Any index works - it wraps using its absolute value.
    pub fn load_level(&mut self, index: i64) -> &GameState {
        let level = self.levels.get(index);
        let board = level.board().clone();
        let player_pos = level.player_pos();
        debug_assert_eq!(board.find_player(), Some(player_pos));

        debug!(
            "Loading level {} ({}) as {}",
            index,
            level.name().unwrap_or("unnamed"),
            self.levels.normalize(index)
        );

        self.level_index = index;
        self.state = GameState::new(board, player_pos);
        self.history.clear();
        &self.state
    }

    /// Loads the level at the same index again.
    pub fn restart(&mut self) -> &GameState {
        self.load_level(self.level_index)
    }

    /// No upper bound - `load_level` wraps it.
    pub fn advance_level(&mut self) -> &GameState {
        self.load_level(self.level_index.wrapping_add(1))
    }

    /// Moves the player, pushing a box if there's one in the way.
    /// Anything that can't be done leaves the state untouched.
    pub fn move_player(&mut self, dir: Dir) -> &GameState {
        self.try_move(dir);
        &self.state
    }

    /// Plays a sequence of moves, ignoring those that are not possible.
    pub fn play<I: IntoIterator<Item = Dir>>(&mut self, dirs: I) -> &GameState {
        for dir in dirs {
            self.try_move(dir);
        }
        &self.state
    }

    /// Same as `move_player` but tells the caller why nothing happened.
    pub fn try_move(&mut self, dir: Dir) -> MoveOutcome {
        if self.state.status.is_terminal() {
            trace!("Ignoring {} - already {}", dir, self.state.status);
            return MoveOutcome::AlreadyTerminal;
        }

        let board = &mut self.state.board;
        let player_pos = self.state.player_pos;

        let (new_pos, dest) = match player_pos
            .neighbor(dir)
            .and_then(|pos| board.get(pos).map(|tile| (pos, tile)))
        {
            Some(cell) => cell,
            None => {
                trace!("Blocked {} by the edge of the map", dir);
                return MoveOutcome::Blocked;
            }
        };

        let is_push = if dest.is_free() {
            false
        } else if dest.is_box() {
            let (box_pos, beyond) = match new_pos
                .neighbor(dir)
                .and_then(|pos| board.get(pos).map(|tile| (pos, tile)))
            {
                Some(cell) => cell,
                None => {
                    trace!("Blocked {} - box at {} against the edge", dir, new_pos);
                    return MoveOutcome::Blocked;
                }
            };
            if !beyond.is_free() {
                trace!("Blocked {} - box at {} can't move onto {:?}", dir, new_pos, beyond);
                return MoveOutcome::Blocked;
            }
            board.set(box_pos, beyond.with_box());
            board.set(new_pos, dest.vacated());
            true
        } else {
            debug_assert_eq!(dest, Tile::Wall);
            trace!("Blocked {} by wall at {}", dir, new_pos);
            return MoveOutcome::Blocked;
        };

        let old = board.tile(player_pos);
        board.set(player_pos, old.vacated());
        // after the box left, so a box on target leaves the target for the player
        let arrived = board.tile(new_pos);
        board.set(new_pos, arrived.with_player());

        self.state.player_pos = new_pos;
        self.state.move_count += 1;
        let mov = Move::new(dir, is_push);
        self.history.add(mov);

        // won takes priority over deadlocked
        if self.state.board.is_solved() {
            self.state.status = Status::Won;
            info!(
                "Level {} won in {} moves",
                self.level_index, self.state.move_count
            );
        } else if self.state.board.is_deadlocked() {
            self.state.status = Status::Deadlocked;
            info!(
                "Level {} deadlocked after {} moves, cornered boxes: {:?}",
                self.level_index,
                self.state.move_count,
                self.state.board.cornered_boxes()
            );
        }

        MoveOutcome::Moved(mov)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The index as passed to `load_level`, not wrapped.
    pub fn level_index(&self) -> i64 {
        self.level_index
    }

    pub fn level(&self) -> &Level {
        self.levels.get(self.level_index)
    }

    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }

    /// Accepted moves since the level was loaded.
    pub fn moves(&self) -> &Moves {
        &self.history
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(LevelSet::builtin())
    }
}
