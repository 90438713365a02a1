//! `ts-grid` — the city map the vehicles drive on.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`grid`]    | `CityGrid`: row-major terrain raster and neighbourhood query   |
//! | [`loader`]  | Text map parser and CSV vehicle roster loader                  |
//! | [`error`]   | `GridError`, `GridResult<T>`                                   |
//!
//! Everything off the edge of the map reads as [`ts_core::Terrain::Wall`],
//! so vehicles at the border always receive a complete neighbourhood.

pub mod error;
pub mod grid;
pub mod loader;


pub use error::{GridError, GridResult};
pub use grid::CityGrid;
pub use loader::{load_map, load_map_reader, load_roster_csv, load_roster_reader, parse_map};
