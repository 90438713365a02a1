//! Terrain kinds, signal colours, and the per-tick neighbourhood view.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::{Direction, TsError, TsResult};

// ── Terrain ───────────────────────────────────────────────────────────────────

/// What occupies a grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Street,
    /// Street cell governed by the traffic signal.
    Light,
    /// Pedestrian crossing, also governed by the traffic signal.
    Crosswalk,
    Trail,
    Grass,
    Wall,
}

impl Terrain {
    pub const ALL: [Terrain; 6] = [
        Terrain::Street,
        Terrain::Light,
        Terrain::Crosswalk,
        Terrain::Trail,
        Terrain::Grass,
        Terrain::Wall,
    ];

    /// Parse a map letter.
    pub fn from_char(c: char) -> TsResult<Terrain> {
        Terrain::ALL
            .into_iter()
            .find(|t| t.letter() == c.to_ascii_uppercase())
            .ok_or(TsError::UnknownTerrain(c))
    }

    /// Letter used in map files.
    pub const fn letter(self) -> char {
        match self {
            Terrain::Street    => 'S',
            Terrain::Light     => 'L',
            Terrain::Crosswalk => 'C',
            Terrain::Trail     => 'T',
            Terrain::Grass     => 'G',
            Terrain::Wall      => 'W',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Terrain::Street    => "street",
            Terrain::Light     => "light",
            Terrain::Crosswalk => "crosswalk",
            Terrain::Trail     => "trail",
            Terrain::Grass     => "grass",
            Terrain::Wall      => "wall",
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Signal ────────────────────────────────────────────────────────────────────

/// Traffic signal colour shown at `Light` and `Crosswalk` cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    #[default]
    Green,
    Yellow,
    Red,
}

impl Signal {
    pub const ALL: [Signal; 3] = [Signal::Green, Signal::Yellow, Signal::Red];

    /// Next colour in the `Green → Yellow → Red → Green` cycle.
    pub const fn advance(self) -> Signal {
        match self {
            Signal::Green  => Signal::Yellow,
            Signal::Yellow => Signal::Red,
            Signal::Red    => Signal::Green,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Signal::Green  => "green",
            Signal::Yellow => "yellow",
            Signal::Red    => "red",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Signal {
    type Err = TsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Signal::ALL
            .into_iter()
            .find(|c| trimmed.eq_ignore_ascii_case(c.as_str()))
            .ok_or_else(|| TsError::UnknownSignal(trimmed.to_owned()))
    }
}

// ── TerrainSet ────────────────────────────────────────────────────────────────

/// Fixed set of terrain kinds packed into one byte.
///
/// Built in `const` context so each vehicle kind's valid-terrain set lives in
/// a static policy table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct TerrainSet(u8);

impl TerrainSet {
    pub const fn of(terrains: &[Terrain]) -> TerrainSet {
        let mut bits = 0u8;
        let mut i = 0;
        while i < terrains.len() {
            bits |= terrains[i].bit();
            i += 1;
        }
        TerrainSet(bits)
    }

    #[inline]
    pub const fn contains(self, terrain: Terrain) -> bool {
        self.0 & terrain.bit() != 0
    }

    pub const fn with(self, terrain: Terrain) -> TerrainSet {
        TerrainSet(self.0 | terrain.bit())
    }

    pub fn iter(self) -> impl Iterator<Item = Terrain> {
        Terrain::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl fmt::Debug for TerrainSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ── Neighbors ─────────────────────────────────────────────────────────────────

/// The terrain of the four cells adjacent to a vehicle, one per direction.
///
/// Complete by construction: every direction has a terrain.  Callers holding
/// a loose `Direction → Terrain` map go through [`Neighbors::from_map`],
/// which rejects incomplete maps instead of guessing.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Neighbors([Terrain; 4]);

impl Neighbors {
    /// Build from terrain listed in [`Direction::ALL`] order (N, E, S, W).
    #[inline]
    pub const fn new(terrain: [Terrain; 4]) -> Self {
        Self(terrain)
    }

    /// Same terrain in every direction.
    pub const fn uniform(terrain: Terrain) -> Self {
        Self([terrain; 4])
    }

    /// Build from a map that must name all four directions.
    pub fn from_map(map: &HashMap<Direction, Terrain>) -> TsResult<Self> {
        let mut terrain = [Terrain::Wall; 4];
        for dir in Direction::ALL {
            terrain[dir.index()] = *map.get(&dir).ok_or(TsError::MissingNeighbor(dir))?;
        }
        Ok(Self(terrain))
    }

    /// Return a copy with the terrain toward `dir` replaced.
    pub const fn with(mut self, dir: Direction, terrain: Terrain) -> Self {
        self.0[dir.index()] = terrain;
        self
    }

    #[inline]
    pub const fn get(&self, dir: Direction) -> Terrain {
        self.0[dir.index()]
    }
}
