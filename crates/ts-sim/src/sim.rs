//! The `Sim` struct and its tick loop.

use ts_core::{Cell, Signal, SimConfig, Tick, VehicleId, VehicleRng};
use ts_grid::CityGrid;
use ts_vehicle::{Vehicle, resolve_collision};

use crate::builder::seed_rngs;
use crate::{RunSummary, SimObserver, TickReport};

#[cfg(feature = "fx-hash")]
type CellIndex = rustc_hash::FxHashMap<Cell, Vec<VehicleId>>;
#[cfg(not(feature = "fx-hash"))]
type CellIndex = std::collections::HashMap<Cell, Vec<VehicleId>>;

/// The main simulation runner.
///
/// Holds the map, the fleet, one RNG per vehicle, and the global signal, and
/// drives the four-phase tick loop described in the [crate docs][crate].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, signal period, …).
    pub config: SimConfig,

    /// The map.  Read-only during a run.
    pub grid: CityGrid,

    /// The fleet, indexed by `VehicleId`.
    pub(crate) vehicles: Vec<Vehicle>,

    /// Per-vehicle deterministic RNGs, parallel to `vehicles`.
    pub(crate) rngs: Vec<VehicleRng>,

    pub(crate) signal:         Signal,
    pub(crate) initial_signal: Signal,
    pub(crate) current_tick:   Tick,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn alive_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_alive()).count()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        let end = self.config.end_tick();
        tracing::info!(
            from     = %self.current_tick,
            to       = %end,
            vehicles = self.vehicles.len(),
            "simulation started",
        );

        let mut summary = RunSummary::default();
        while self.current_tick < end {
            let report = self.step(observer);
            summary.record(&report);
        }
        observer.on_sim_end(self.current_tick);

        tracing::info!(
            ticks    = summary.ticks,
            deaths   = summary.deaths,
            revivals = summary.revivals,
            alive    = self.alive_count(),
            "simulation finished",
        );
        summary
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> RunSummary {
        let mut summary = RunSummary::default();
        for _ in 0..n {
            let report = self.step(observer);
            summary.record(&report);
        }
        summary
    }

    /// Process the current tick, fire observer hooks, and advance the clock.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        let now = self.current_tick;
        observer.on_tick_start(now);
        let report = self.process_tick(now);
        observer.on_tick_end(&report);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.vehicles);
        }

        self.current_tick = now + 1;
        report
    }

    /// Put every vehicle back on its spawn cell, restore the initial signal,
    /// rewind to tick 0 and reseed all RNGs.  A run after `reset` replays the
    /// first run exactly.
    pub fn reset(&mut self) {
        for v in &mut self.vehicles {
            v.reset();
        }
        self.rngs = seed_rngs(self.config.seed, &self.vehicles);
        self.signal = self.initial_signal;
        self.current_tick = Tick::ZERO;
        tracing::debug!("simulation reset");
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> TickReport {
        // ── Phase 1: signal ───────────────────────────────────────────────
        if now.is_boundary(self.config.signal_period_ticks) {
            self.signal = self.signal.advance();
            tracing::trace!(tick = %now, signal = %self.signal, "signal changed");
        }
        let signal = self.signal;

        let was_alive: Vec<bool> = self.vehicles.iter().map(Vehicle::is_alive).collect();

        // ── Phase 2: movement (ascending VehicleId) ───────────────────────
        let mut moved = 0;
        let mut blocked = 0;
        for (vehicle, rng) in self.vehicles.iter_mut().zip(&mut self.rngs) {
            if !vehicle.is_alive() {
                continue;
            }
            let neighbors = self.grid.neighbors(vehicle.cell());
            let direction = vehicle.choose_direction(&neighbors, rng);
            vehicle.set_direction(direction);

            // Off-map cells read as Wall, which some kinds may enter; the
            // bounds check keeps them on the map.
            let dest = vehicle.cell().step(direction);
            if self.grid.contains(dest) && vehicle.can_pass(self.grid.terrain_at(dest), signal) {
                vehicle.set_cell(dest);
                moved += 1;
            } else {
                blocked += 1;
            }
        }

        // ── Phase 3: collisions ───────────────────────────────────────────
        let deaths = self.resolve_collisions();

        // ── Phase 4: respawn ──────────────────────────────────────────────
        let mut revivals = 0;
        for ((vehicle, rng), &alive_before) in
            self.vehicles.iter_mut().zip(&mut self.rngs).zip(&was_alive)
        {
            if alive_before {
                continue;
            }
            vehicle.poke(rng);
            if vehicle.is_alive() {
                revivals += 1;
            }
        }

        let report = TickReport {
            tick: now,
            signal,
            moved,
            blocked,
            deaths,
            revivals,
            alive: self.alive_count(),
        };
        tracing::trace!(
            tick     = %now,
            moved,
            blocked,
            deaths,
            revivals,
            alive    = report.alive,
            "tick processed",
        );
        report
    }

    /// Resolve every pair of live vehicles sharing a cell, each unordered pair
    /// once in ascending id order.  Returns the number of vehicles killed.
    fn resolve_collisions(&mut self) -> usize {
        let index = build_cell_index(&self.vehicles);
        let mut deaths = 0;

        for ids in index.values().filter(|ids| ids.len() > 1) {
            for (i, &a) in ids.iter().enumerate() {
                for &b in &ids[i + 1..] {
                    let (va, vb) = pair_mut(&mut self.vehicles, a.index(), b.index());
                    if !(va.is_alive() && vb.is_alive()) {
                        continue;
                    }
                    resolve_collision(va, vb);
                    deaths += usize::from(!va.is_alive()) + usize::from(!vb.is_alive());
                }
            }
        }
        deaths
    }
}

// ── Collision index helpers ───────────────────────────────────────────────────

/// Build a `Cell → Vec<VehicleId>` index of all live vehicles.
///
/// Ids within each bucket are ascending because the scan is in id order.
fn build_cell_index(vehicles: &[Vehicle]) -> CellIndex {
    let mut index = CellIndex::default();
    for v in vehicles.iter().filter(|v| v.is_alive()) {
        index.entry(v.cell()).or_default().push(v.id());
    }
    index
}

/// Disjoint mutable borrows of two vehicles.  Requires `a < b`.
fn pair_mut(vehicles: &mut [Vehicle], a: usize, b: usize) -> (&mut Vehicle, &mut Vehicle) {
    let (lo, hi) = vehicles.split_at_mut(b);
    (&mut lo[a], &mut hi[0])
}
