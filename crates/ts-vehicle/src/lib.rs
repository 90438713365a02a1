//! `ts-vehicle` — per-tick decision logic for grid vehicles.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`kind`]     | `VehicleKind`, `KindPolicy`, `AdvanceRule`: static policy table |
//! | [`vehicle`]  | `Vehicle` state record, collision, respawn, reset                |
//! | [`decide`]   | `Vehicle::choose_direction`, the shared direction engine         |
//! | [`advance`]  | `Vehicle::can_pass`, per-kind advance permission                 |
//! | [`error`]    | `VehicleError`, `VehicleResult<T>`                               |
//!
//! # Contract with the simulation loop
//!
//! The engine never moves a vehicle.  Each tick the caller:
//!
//! 1. supplies the four neighbouring terrains → [`Vehicle::choose_direction`];
//! 2. supplies the destination terrain and signal → [`Vehicle::can_pass`];
//! 3. applies the move itself (or leaves the vehicle in place);
//! 4. resolves same-cell pairs with [`resolve_collision`];
//! 5. calls [`Vehicle::poke`] on vehicles that are dead.
//!
//! All randomness arrives through an explicit [`ts_core::VehicleRng`].

pub mod advance;
pub mod decide;
pub mod error;
pub mod kind;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use advance::TAXI_CROSSWALK_WAIT;
pub use error::{VehicleError, VehicleResult};
pub use kind::{AdvanceRule, KindPolicy, VehicleKind};
pub use vehicle::{Vehicle, resolve_collision};
