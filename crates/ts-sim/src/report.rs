//! Per-tick and whole-run counters.

use ts_core::{Signal, Tick};

/// What happened during one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub tick:     Tick,
    /// Signal in force during the movement phase.
    pub signal:   Signal,
    /// Vehicles that stepped to a new cell.
    pub moved:    usize,
    /// Live vehicles that chose a direction but were not allowed to step.
    pub blocked:  usize,
    pub deaths:   usize,
    pub revivals: usize,
    /// Live vehicles at the end of the tick.
    pub alive:    usize,
}

/// Totals accumulated over [`Sim::run`][crate::Sim::run].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks:    u64,
    pub moved:    usize,
    pub blocked:  usize,
    pub deaths:   usize,
    pub revivals: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.moved += report.moved;
        self.blocked += report.blocked;
        self.deaths += report.deaths;
        self.revivals += report.revivals;
    }
}
