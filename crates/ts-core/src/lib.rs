//! `ts-core` — foundational types for the `traffic_street` grid simulator.
//!
//! This crate is a dependency of every other `ts-*` crate.  It has no `ts-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `VehicleId`                                               |
//! | [`grid`]        | `Cell`, `Direction`                                       |
//! | [`terrain`]     | `Terrain`, `Signal`, `TerrainSet`, `Neighbors`            |
//! | [`time`]        | `Tick`, `SimConfig`                                       |
//! | [`rng`]         | `VehicleRng` (per-vehicle)                                |
//! | [`error`]       | `TsError`, `TsResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod terrain;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TsError, TsResult};
pub use grid::{Cell, Direction};
pub use ids::VehicleId;
pub use rng::VehicleRng;
pub use terrain::{Neighbors, Signal, Terrain, TerrainSet};
pub use time::{SimConfig, Tick};
