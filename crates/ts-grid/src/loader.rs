//! Map and roster loaders.
//!
//! # Map format
//!
//! A header line `"<height> <width>"` followed by `height` rows of exactly
//! `width` terrain letters.  Blank lines are skipped.
//!
//! ```text
//! 3 5
//! WWCWW
//! SSLSS
//! GGCTT
//! ```
//!
//! | Letter | Terrain     |
//! |--------|-------------|
//! | `S`    | Street      |
//! | `L`    | Light       |
//! | `C`    | Crosswalk   |
//! | `T`    | Trail       |
//! | `G`    | Grass       |
//! | `W`    | Wall        |
//!
//! # Roster CSV format
//!
//! One vehicle per row.  Vehicle ids are assigned in file order from 0.
//!
//! ```csv
//! kind,x,y,direction
//! car,1,1,east
//! taxi,3,1,W
//! human,2,2,north
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ts_core::{Cell, Direction, Terrain, VehicleId};
use ts_vehicle::{Vehicle, VehicleKind};

use crate::{CityGrid, GridError, GridResult};

// ── Map ───────────────────────────────────────────────────────────────────────

/// Load a map from a text file.
pub fn load_map(path: &Path) -> GridResult<CityGrid> {
    let file = std::fs::File::open(path)?;
    load_map_reader(file)
}

/// Like [`load_map`] but accepts any `Read` source.
pub fn load_map_reader<R: Read>(mut reader: R) -> GridResult<CityGrid> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_map(&text)
}

/// Parse map text.  Unknown letters are rejected with their position.
pub fn parse_map(text: &str) -> GridResult<CityGrid> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| GridError::Map("empty map".into()))?;
    let (height, width) = parse_header(header)?;

    let mut terrain = Vec::with_capacity(width as usize * height as usize);
    let mut rows = 0u32;
    for (line_no, line) in lines {
        if rows == height {
            return Err(GridError::Map(format!(
                "line {line_no}: more than the {height} rows declared in the header"
            )));
        }
        let before = terrain.len();
        for (col, c) in line.chars().enumerate() {
            let t = Terrain::from_char(c).map_err(|source| GridError::Terrain {
                line: line_no,
                column: col + 1,
                source,
            })?;
            terrain.push(t);
        }
        let got = terrain.len() - before;
        if got != width as usize {
            return Err(GridError::Map(format!(
                "line {line_no}: expected {width} cells, got {got}"
            )));
        }
        rows += 1;
    }
    if rows != height {
        return Err(GridError::Map(format!(
            "header declares {height} rows, found {rows}"
        )));
    }

    let grid = CityGrid::new(width, height, terrain)?;
    tracing::info!(width, height, "map loaded");
    Ok(grid)
}

fn parse_header(header: &str) -> GridResult<(u32, u32)> {
    let mut parts = header.split_whitespace().map(str::parse::<u32>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(h)), Some(Ok(w)), None) if h > 0 && w > 0 => Ok((h, w)),
        _ => Err(GridError::Map(format!(
            "invalid header {header:?}: expected \"<height> <width>\" (both positive)"
        ))),
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    kind:      String,
    x:         i32,
    y:         i32,
    direction: String,
}

/// Load the vehicle roster from a CSV file and place it on `grid`.
pub fn load_roster_csv(path: &Path, grid: &CityGrid) -> GridResult<Vec<Vehicle>> {
    let file = std::fs::File::open(path)?;
    load_roster_reader(file, grid)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a roster in a
/// binary.
pub fn load_roster_reader<R: Read>(reader: R, grid: &CityGrid) -> GridResult<Vec<Vehicle>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut vehicles = Vec::new();

    for (i, result) in csv_reader.deserialize::<RosterRecord>().enumerate() {
        let row = i + 1;
        let record = result?;

        let kind: VehicleKind = record.kind.parse().map_err(|e: ts_vehicle::VehicleError| {
            GridError::Roster { row, message: e.to_string() }
        })?;
        let direction: Direction = record.direction.parse().map_err(|e: ts_core::TsError| {
            GridError::Roster { row, message: e.to_string() }
        })?;
        let cell = Cell::new(record.x, record.y);
        if !grid.contains(cell) {
            return Err(GridError::OffMap {
                row,
                cell,
                width:  grid.width(),
                height: grid.height(),
            });
        }

        let id = VehicleId::try_from(i).map_err(|e| GridError::Roster {
            row,
            message: e.to_string(),
        })?;
        vehicles.push(Vehicle::new(id, kind, cell, direction));
    }

    tracing::info!(vehicles = vehicles.len(), "roster loaded");
    Ok(vehicles)
}
