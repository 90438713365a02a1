//! `ts-sim` — tick loop orchestrator for the traffic_street workspace.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Signal      on every positive multiple of signal_period_ticks the
//!                  global signal advances Green → Yellow → Red → Green.
//!   ② Movement    each vehicle alive at tick start, in ascending id order:
//!                    choose_direction(neighbours) → face it
//!                    can_pass(destination, signal) → step one cell
//!   ③ Collisions  live vehicles sharing a cell are resolved pairwise.
//!   ④ Respawn     vehicles dead at tick start are poked.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash`'s `FxHashMap` for the collision index. |
//! | `serde`   | Propagates serde derives to the core and vehicle types.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ts_core::SimConfig;
//! use ts_grid::{load_map, load_roster_csv};
//! use ts_sim::{NoopObserver, SimBuilder};
//!
//! let grid = load_map(Path::new("city.txt"))?;
//! let vehicles = load_roster_csv(Path::new("roster.csv"), &grid)?;
//! let mut sim = SimBuilder::new(SimConfig::default(), grid)
//!     .vehicles(vehicles)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{RunSummary, TickReport};
pub use sim::Sim;
