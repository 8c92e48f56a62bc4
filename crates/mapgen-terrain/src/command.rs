//! Discrete commands issued by the input layer.

use std::fmt;
use std::str::FromStr;

use crate::view::Direction;

/// One input-layer command. Pans move the window a single chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the window one chunk north.
    PanNorth,
    /// Move the window one chunk south.
    PanSouth,
    /// Move the window one chunk east.
    PanEast,
    /// Move the window one chunk west.
    PanWest,
    /// Recompute the window in place.
    Rebuild,
}

impl Command {
    /// The pan direction, or `None` for [`Command::Rebuild`].
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Command::PanNorth => Some(Direction::North),
            Command::PanSouth => Some(Direction::South),
            Command::PanEast => Some(Direction::East),
            Command::PanWest => Some(Direction::West),
            Command::Rebuild => None,
        }
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Command::PanNorth,
            Direction::South => Command::PanSouth,
            Direction::East => Command::PanEast,
            Direction::West => Command::PanWest,
        }
    }
}

/// Unrecognized command text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0:?} (expected north, south, east, west or rebuild)")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" | "up" => Ok(Command::PanNorth),
            "s" | "south" | "down" => Ok(Command::PanSouth),
            "e" | "east" | "right" => Ok(Command::PanEast),
            "w" | "west" | "left" => Ok(Command::PanWest),
            "r" | "rebuild" => Ok(Command::Rebuild),
            _ => Err(ParseCommandError(s.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Command::PanNorth => "north",
            Command::PanSouth => "south",
            Command::PanEast => "east",
            Command::PanWest => "west",
            Command::Rebuild => "rebuild",
        })
    }
}
