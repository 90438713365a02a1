//! Row-major terrain raster.

use std::fmt;

use ts_core::{Cell, Direction, Neighbors, Terrain};

use crate::{GridError, GridResult};

/// The city map: one [`Terrain`] per cell, stored row-major.
///
/// `terrain[y * width + x]` is the terrain at `(x, y)`.  Construct with
/// [`CityGrid::new`] / [`CityGrid::filled`] or parse one with
/// [`parse_map`][crate::parse_map].
#[derive(Clone, PartialEq, Eq)]
pub struct CityGrid {
    width:   u32,
    height:  u32,
    terrain: Vec<Terrain>,
}

impl CityGrid {
    /// Wrap a row-major terrain vector.  Fails unless
    /// `terrain.len() == width * height`.
    pub fn new(width: u32, height: u32, terrain: Vec<Terrain>) -> GridResult<Self> {
        let expected = width as usize * height as usize;
        if terrain.len() != expected {
            return Err(GridError::Map(format!(
                "{width}x{height} map needs {expected} cells, got {}",
                terrain.len()
            )));
        }
        Ok(Self { width, height, terrain })
    }

    /// A `width × height` map of uniform terrain.
    pub fn filled(width: u32, height: u32, terrain: Terrain) -> Self {
        Self {
            width,
            height,
            terrain: vec![terrain; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if `cell` lies on the map.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Terrain at `cell`; [`Terrain::Wall`] anywhere off the map.
    #[inline]
    pub fn terrain_at(&self, cell: Cell) -> Terrain {
        self.index(cell).map_or(Terrain::Wall, |i| self.terrain[i])
    }

    /// Overwrite the terrain at an on-map cell.
    pub fn set(&mut self, cell: Cell, terrain: Terrain) -> GridResult<()> {
        let i = self.index(cell).ok_or_else(|| {
            GridError::Map(format!("cell {cell} is outside the {}x{} map", self.width, self.height))
        })?;
        self.terrain[i] = terrain;
        Ok(())
    }

    /// The four terrains around `cell`, off-map sides reading as walls.
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        Neighbors::new(Direction::ALL.map(|dir| self.terrain_at(cell.step(dir))))
    }

    /// Iterator over `(cell, terrain)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Terrain)> + '_ {
        let width = self.width as usize;
        self.terrain.iter().enumerate().map(move |(i, &t)| {
            (Cell::new((i % width) as i32, (i / width) as i32), t)
        })
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let x = u32::try_from(cell.x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(cell.y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }
}

/// Renders the map in the same letter format [`parse_map`][crate::parse_map]
/// reads, header line included.
impl fmt::Display for CityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.height, self.width)?;
        for row in self.terrain.chunks(self.width.max(1) as usize) {
            let line: String = row.iter().map(|t| t.letter()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CityGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
