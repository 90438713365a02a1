//! Simulation time and run configuration.
//!
//! The simulator is turn-based: one `Tick` is one round in which every
//! vehicle gets exactly one decision.  There is no wall-clock mapping.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// `true` on every positive multiple of `period`.  Always `false` for a
    /// zero period.
    #[inline]
    pub fn is_boundary(self, period: u64) -> bool {
        period > 0 && self.0 > 0 && self.0.is_multiple_of(period)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from a JSON file by the application
/// crate (requires the `serde` feature) and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed, map, and roster always produce
    /// identical runs.
    pub seed: u64,

    /// The global signal advances one colour every this many ticks.
    /// Must be non-zero.
    pub signal_period_ticks: u64,

    /// Report a fleet snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           500,
            seed:                  42,
            signal_period_ticks:   20,
            output_interval_ticks: 1,
        }
    }
}
