use std::error::Error;
use std::fmt::{self, Display, Formatter};

use log::{debug, warn};

use crate::data::{Pos, Tile, MAX_SIZE};
use crate::level::{Level, LevelSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    TooLarge,
    MultiplePlayers,
    NoPlayer,
    NoLevels,
    /// Error inside the n-th level of a pack (counted from 1)
    Level(usize, Box<ParserErr>),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Map larger than {} rows/columns", MAX_SIZE),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::NoLevels => write!(f, "No levels"),
            ParserErr::Level(n, ref err) => write!(f, "Level {}: {}", n, err),
        }
    }
}

impl Error for ParserErr {}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
/// into tiles, validating there's exactly one player.
pub(crate) fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<(Vec<Vec<Tile>>, Pos), ParserErr> {
    if rows.len() > MAX_SIZE {
        return Err(ParserErr::TooLarge);
    }

    let mut grid = Vec::with_capacity(rows.len());
    let mut player_pos = None;

    for (r, line) in rows.iter().enumerate() {
        let line = line.as_ref().trim_end_matches('\r');
        let mut line_tiles = Vec::with_capacity(line.len());
        for (c, cur_char) in line.chars().enumerate() {
            if c >= MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let tile = Tile::from_char(cur_char).ok_or(ParserErr::Pos(r, c))?;
            if tile.is_player() {
                if player_pos.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player_pos = Some(Pos::new(r as u8, c as u8));
            }
            line_tiles.push(tile);
        }
        grid.push(line_tiles);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;

    let boxes = grid.iter().flatten().filter(|tile| tile.is_box()).count();
    let targets = grid.iter().flatten().filter(|tile| tile.is_target()).count();
    if boxes > targets {
        warn!("Level has {} boxes but only {} targets - it can't be won", boxes, targets);
    } else if boxes < targets {
        debug!("Level has {} boxes and {} targets", boxes, targets);
    }

    Ok((grid, player_pos))
}

/// Levels are separated by empty lines, lines starting with `;` are comments.
/// The last comment before a level is used as its name.
pub(crate) fn parse_pack(text: &str) -> Result<LevelSet, ParserErr> {
    let mut levels = Vec::new();
    let mut name = None;
    let mut rows = Vec::new();

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with(';') {
            if !rows.is_empty() {
                levels.push(finish_level(name.take(), &rows, levels.len())?);
                rows.clear();
            }
            if line.starts_with(';') {
                let comment = line[1..].trim();
                name = if comment.is_empty() {
                    None
                } else {
                    Some(comment.to_owned())
                };
            }
        } else {
            rows.push(line);
        }
    }
    if !rows.is_empty() {
        levels.push(finish_level(name.take(), &rows, levels.len())?);
    }

    debug!("Parsed {} levels", levels.len());
    LevelSet::new(levels)
}

fn finish_level(name: Option<String>, rows: &[&str], parsed: usize) -> Result<Level, ParserErr> {
    let level = Level::new(rows).map_err(|err| ParserErr::Level(parsed + 1, Box::new(err)))?;
    Ok(match name {
        Some(name) => level.with_name(name),
        None => level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xsb_fail_empty() {
        let rows: [&str; 0] = [];
        assert_eq!(parse_rows(&rows).unwrap_err(), ParserErr::NoPlayer);
    }

    #[test]
    fn xsb_fail_no_player() {
        assert_eq!(
            parse_rows(&["#####", "#$ .#", "#####"]).unwrap_err(),
            ParserErr::NoPlayer
        );
    }

    #[test]
    fn xsb_fail_multiple_players() {
        assert_eq!(
            parse_rows(&["#####", "#@$+#", "#####"]).unwrap_err(),
            ParserErr::MultiplePlayers
        );
    }

    #[test]
    fn xsb_fail_pos() {
        assert_eq!(
            parse_rows(&["#####", "#@X.#", "#####"]).unwrap_err(),
            ParserErr::Pos(1, 2)
        );
    }

    #[test]
    fn xsb_fail_too_large() {
        let wide = vec!["@".to_owned() + &" ".repeat(MAX_SIZE)];
        assert_eq!(parse_rows(&wide).unwrap_err(), ParserErr::TooLarge);

        let mut tall = vec!["@"; MAX_SIZE];
        tall.push(" ");
        assert_eq!(parse_rows(&tall).unwrap_err(), ParserErr::TooLarge);
    }

    #[test]
    fn xsb_simplest() {
        let (grid, player_pos) = parse_rows(&["#####", "#@$.#", "#####"]).unwrap();
        assert_eq!(player_pos, Pos::new(1, 1));
        assert_eq!(
            grid[1],
            vec![Tile::Wall, Tile::Player, Tile::Box, Tile::Target, Tile::Wall]
        );
    }

    #[test]
    fn xsb_player_on_target_and_aliases() {
        let (grid, player_pos) = parse_rows(&["-#_", "*+\r"]).unwrap();
        assert_eq!(player_pos, Pos::new(1, 1));
        assert_eq!(grid[0], vec![Tile::Floor, Tile::Wall, Tile::Floor]);
        assert_eq!(grid[1], vec![Tile::BoxOnTarget, Tile::PlayerOnTarget]);
    }

    #[test]
    fn pack_with_names_and_comments() {
        let pack = "\
; First
#####
#@$.#
#####

;
; Second

####
#+*#
####
; trailing comment
";
        let levels = parse_pack(pack).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels.get(0).name(), Some("First"));
        assert_eq!(levels.get(0).to_string(), "#####\n#@$.#\n#####\n");
        assert_eq!(levels.get(1).name(), Some("Second"));
        assert_eq!(levels.get(1).to_string(), "####\n#+*#\n####\n");
    }

    #[test]
    fn pack_without_separating_blank_line() {
        let levels = parse_pack("#@$.#\n; two\n#.$@#\n").unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels.get(0).name(), None);
        assert_eq!(levels.get(1).name(), Some("two"));
    }

    #[test]
    fn pack_errors() {
        assert_eq!(parse_pack("").unwrap_err(), ParserErr::NoLevels);
        assert_eq!(parse_pack("; nothing here\n\n").unwrap_err(), ParserErr::NoLevels);

        let err = parse_pack("#@$.#\n\n#  .#\n").unwrap_err();
        assert_eq!(err, ParserErr::Level(2, Box::new(ParserErr::NoPlayer)));
        assert_eq!(err.to_string(), "Level 2: No player");
    }
}
