//! The closed set of vehicle kinds and their static behaviour policies.
//!
//! Every behavioural difference between kinds is data in [`POLICIES`]; the
//! decision engine and advance check read the row for a vehicle's kind and
//! never branch on anything else.

use std::fmt;
use std::str::FromStr;

use ts_core::{Terrain, TerrainSet};

use crate::VehicleError;

// ── VehicleKind ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    Car,
    Taxi,
    Truck,
    Bicycle,
    /// All-terrain vehicle.
    Atv,
    Pedestrian,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 6] = [
        VehicleKind::Car,
        VehicleKind::Taxi,
        VehicleKind::Truck,
        VehicleKind::Bicycle,
        VehicleKind::Atv,
        VehicleKind::Pedestrian,
    ];

    /// The static policy row for this kind.
    #[inline]
    pub fn policy(self) -> &'static KindPolicy {
        &POLICIES[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.policy().name
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = VehicleError;

    /// Case-insensitive kind name; `human` is accepted for `pedestrian`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("human") {
            return Ok(VehicleKind::Pedestrian);
        }
        VehicleKind::ALL
            .into_iter()
            .find(|k| trimmed.eq_ignore_ascii_case(k.as_str()))
            .ok_or_else(|| VehicleError::UnknownKind(trimmed.to_owned()))
    }
}

// ── AdvanceRule ───────────────────────────────────────────────────────────────

/// Which advance-permission rule a kind follows.  See
/// [`Vehicle::can_pass`][crate::Vehicle::can_pass] for the exact conditions.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AdvanceRule {
    /// Stops for red lights and for yellow or red crosswalks.
    Car,
    /// Stops for red lights; waits a bounded number of turns at a red
    /// crosswalk, then goes.
    Taxi,
    /// Stops only for red crosswalks; refuses terrain it cannot drive on.
    Truck,
    /// Stops at any light or crosswalk that is not green.
    Bicycle,
    /// Crosses only while crosswalk traffic is stopped (signal not green);
    /// refuses terrain it cannot walk on.
    Pedestrian,
    /// Never stops.
    Always,
}

// ── KindPolicy ────────────────────────────────────────────────────────────────

/// Immutable behaviour parameters of one vehicle kind.
#[derive(Debug)]
pub struct KindPolicy {
    /// Lower-case display name, also the sprite key stem.
    pub name: &'static str,
    /// Sprite key shown while the vehicle is dead.
    pub dead_sprite: &'static str,
    /// Ticks spent dead after losing a collision.  Also the collision rank:
    /// the smaller value survives.
    pub death_ticks: u32,
    /// Picks uniformly among legal non-reversing directions.
    pub random_bias: bool,
    /// Steers toward this terrain when it is ahead, left, or right.
    pub gravitate: Option<Terrain>,
    pub valid_terrain: TerrainSet,
    pub rule: AdvanceRule,
}

const ROAD: TerrainSet = TerrainSet::of(&[Terrain::Street, Terrain::Light, Terrain::Crosswalk]);

/// One row per [`VehicleKind`], in declaration order.
pub static POLICIES: [KindPolicy; 6] = [
    KindPolicy {
        name:          "car",
        dead_sprite:   "car_dead",
        death_ticks:   10,
        random_bias:   false,
        gravitate:     None,
        valid_terrain: ROAD,
        rule:          AdvanceRule::Car,
    },
    KindPolicy {
        name:          "taxi",
        dead_sprite:   "taxi_dead",
        death_ticks:   10,
        random_bias:   false,
        gravitate:     None,
        valid_terrain: ROAD,
        rule:          AdvanceRule::Taxi,
    },
    KindPolicy {
        name:          "truck",
        dead_sprite:   "truck_dead",
        death_ticks:   0,
        random_bias:   true,
        gravitate:     None,
        valid_terrain: ROAD,
        rule:          AdvanceRule::Truck,
    },
    KindPolicy {
        name:          "bicycle",
        dead_sprite:   "bicycle_dead",
        death_ticks:   30,
        random_bias:   false,
        gravitate:     Some(Terrain::Trail),
        valid_terrain: ROAD.with(Terrain::Trail),
        rule:          AdvanceRule::Bicycle,
    },
    KindPolicy {
        name:          "atv",
        dead_sprite:   "atv_dead",
        death_ticks:   20,
        random_bias:   true,
        gravitate:     None,
        valid_terrain: ROAD.with(Terrain::Trail).with(Terrain::Grass),
        rule:          AdvanceRule::Always,
    },
    KindPolicy {
        name:          "pedestrian",
        dead_sprite:   "pedestrian_dead",
        death_ticks:   50,
        random_bias:   true,
        gravitate:     Some(Terrain::Crosswalk),
        valid_terrain: TerrainSet::of(&[Terrain::Crosswalk, Terrain::Grass]),
        rule:          AdvanceRule::Pedestrian,
    },
];
