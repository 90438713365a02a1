//! Grid cells and the four compass directions.
//!
//! The grid is row-major with the origin in the top-left corner, so `North`
//! decreases `y` and `East` increases `x`.

use std::fmt;
use std::str::FromStr;

use crate::{TsError, VehicleRng};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// An integer grid position.
///
/// Signed so that the cell beyond a map edge is representable; map queries
/// treat such cells as walls.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Cell {
        Cell::new(self.x + dir.dx(), self.y + dir.dy())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Facing direction of a vehicle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in clockwise order.  `ALL[d.index()] == d`.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position in [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East  => 1,
            Direction::South => 2,
            Direction::West  => 3,
        }
    }

    /// 90° counter-clockwise.
    #[inline]
    pub const fn left(self) -> Direction {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// 90° clockwise.
    #[inline]
    pub const fn right(self) -> Direction {
        Self::ALL[(self.index() + 1) % 4]
    }

    #[inline]
    pub const fn reverse(self) -> Direction {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// Uniform pick among the four directions.
    #[inline]
    pub fn random(rng: &mut VehicleRng) -> Direction {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    #[inline]
    pub const fn dx(self) -> i32 {
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North | Direction::South => 0,
        }
    }

    #[inline]
    pub const fn dy(self) -> i32 {
        match self {
            Direction::South => 1,
            Direction::North => -1,
            Direction::East | Direction::West => 0,
        }
    }

    /// Single-letter form used by map and roster files.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East  => 'E',
            Direction::South => 'S',
            Direction::West  => 'W',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East  => "east",
            Direction::South => "south",
            Direction::West  => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TsError;

    /// Accepts `N`/`E`/`S`/`W` or the full name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| {
                trimmed.eq_ignore_ascii_case(d.as_str())
                    || trimmed.eq_ignore_ascii_case(d.letter().encode_utf8(&mut [0; 4]))
            })
            .ok_or_else(|| TsError::UnknownDirection(trimmed.to_owned()))
    }
}
