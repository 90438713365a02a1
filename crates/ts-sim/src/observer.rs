//! Simulation observer trait for progress reporting and data collection.

use ts_core::Tick;
use ts_vehicle::Vehicle;

use crate::TickReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct CrashCounter(usize);
///
/// impl SimObserver for CrashCounter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         self.0 += report.deaths;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the signal changes.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with its counters.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the whole fleet, indexed by `VehicleId`.
    fn on_snapshot(&mut self, _tick: Tick, _vehicles: &[Vehicle]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
