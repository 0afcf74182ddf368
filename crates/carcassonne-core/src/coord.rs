//! Square grid coordinate system.
//!
//! This module provides the coordinate types for the sparse tile board:
//! - `Coord`: Identifies a board cell by integer `(x, y)`
//! - `Direction`: The four compass-facing sides of a tile
//!
//! `y` grows downwards (south), matching the screen layout the board is drawn in,
//! so the northern neighbour of `(0, 0)` is `(0, -1)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four sides of a square tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Top side
    North,
    /// Right side
    East,
    /// Bottom side
    South,
    /// Left side
    West,
}

impl Direction {
    /// All directions in clockwise order starting from North.
    ///
    /// The position in this array is the facing side index used by the edge resolver.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Facing side index (0 = north, 1 = east, 2 = south, 3 = west)
    pub const fn side_index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// The side a neighbour in this direction touches us with
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Grid offset `(dx, dy)` of the neighbour in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// A board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Coord {
    /// Column (increases going east)
    pub x: i32,
    /// Row (increases going south)
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell adjacent to this one in the given direction
    pub const fn neighbor(&self, direction: Direction) -> Coord {
        let (dx, dy) = direction.offset();
        Coord::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours, in `Direction::ALL` order
    pub fn neighbors(&self) -> [Coord; 4] {
        Direction::ALL.map(|dir| self.neighbor(dir))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Error returned when a `"x,y"` cell key cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid cell key {0:?}, expected \"x,y\"")]
pub struct CoordParseError(pub String);

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CoordParseError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Coord::new(x, y))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}
