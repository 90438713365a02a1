//! Plain data row types written by output backends.

use serde::Serialize;

use ts_sim::TickReport;
use ts_vehicle::Vehicle;

/// One vehicle's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VehicleSnapshotRow {
    pub vehicle_id: u32,
    pub tick:       u64,
    pub kind:       &'static str,
    pub x:          i32,
    pub y:          i32,
    pub direction:  &'static str,
    pub alive:      bool,
    /// Ticks left until revival; 0 while alive.
    pub respawn_in: u32,
}

impl VehicleSnapshotRow {
    pub fn from_vehicle(tick: u64, v: &Vehicle) -> Self {
        Self {
            vehicle_id: v.id().0,
            tick,
            kind:       v.kind().as_str(),
            x:          v.cell().x,
            y:          v.cell().y,
            direction:  v.direction().as_str(),
            alive:      v.is_alive(),
            respawn_in: if v.is_alive() { 0 } else { v.respawn_countdown() },
        }
    }
}

/// Counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickSummaryRow {
    pub tick:     u64,
    pub signal:   &'static str,
    pub moved:    u64,
    pub blocked:  u64,
    pub deaths:   u64,
    pub revivals: u64,
    pub alive:    u64,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(r: &TickReport) -> Self {
        Self {
            tick:     r.tick.0,
            signal:   r.signal.as_str(),
            moved:    r.moved as u64,
            blocked:  r.blocked as u64,
            deaths:   r.deaths as u64,
            revivals: r.revivals as u64,
            alive:    r.alive as u64,
        }
    }
}
