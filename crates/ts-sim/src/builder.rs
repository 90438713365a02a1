//! Fluent builder for constructing a [`Sim`].

use ts_core::{Signal, SimConfig, Tick, VehicleRng};
use ts_grid::CityGrid;
use ts_vehicle::Vehicle;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, signal period, …
/// - [`CityGrid`]: the map, e.g. from [`ts_grid::parse_map`]
///
/// # Optional inputs
///
/// | Method           | Default        |
/// |------------------|----------------|
/// | `.vehicles(v)`   | No vehicles    |
/// | `.signal(s)`     | `Signal::Green` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, grid)
///     .vehicles(load_roster_csv(path, &grid)?)
///     .build()?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    grid:     CityGrid,
    vehicles: Vec<Vehicle>,
    signal:   Signal,
}

impl SimBuilder {
    pub fn new(config: SimConfig, grid: CityGrid) -> Self {
        Self {
            config,
            grid,
            vehicles: Vec::new(),
            signal:   Signal::Green,
        }
    }

    /// Supply the fleet.  Vehicle ids must be `0..n` in slice order.
    pub fn vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// Signal in force at tick 0.
    pub fn signal(mut self, signal: Signal) -> Self {
        self.signal = signal;
        self
    }

    /// Validate inputs, seed one RNG per vehicle, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.config.signal_period_ticks == 0 {
            return Err(SimError::Config("signal_period_ticks must be > 0".into()));
        }

        for (index, v) in self.vehicles.iter().enumerate() {
            if v.id().index() != index {
                return Err(SimError::VehicleIdMismatch { index, id: v.id() });
            }
            if !self.grid.contains(v.spawn_cell()) {
                return Err(SimError::OffMap {
                    id:     v.id(),
                    cell:   v.spawn_cell(),
                    width:  self.grid.width(),
                    height: self.grid.height(),
                });
            }
            let terrain = self.grid.terrain_at(v.spawn_cell());
            if !v.is_valid_terrain(terrain) {
                tracing::warn!(
                    vehicle = %v.id(),
                    kind    = %v.kind(),
                    %terrain,
                    "vehicle spawns on terrain it cannot normally enter",
                );
            }
        }

        let rngs = seed_rngs(self.config.seed, &self.vehicles);

        Ok(Sim {
            config:         self.config,
            grid:           self.grid,
            vehicles:       self.vehicles,
            rngs,
            signal:         self.signal,
            initial_signal: self.signal,
            current_tick:   Tick::ZERO,
        })
    }
}

pub(crate) fn seed_rngs(seed: u64, vehicles: &[Vehicle]) -> Vec<VehicleRng> {
    vehicles.iter().map(|v| VehicleRng::new(seed, v.id())).collect()
}
