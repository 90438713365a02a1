//! The per-vehicle state record and its death/respawn lifecycle.

use ts_core::{Cell, Direction, Terrain, VehicleId, VehicleRng};

use crate::advance::TAXI_CROSSWALK_WAIT;
use crate::{KindPolicy, VehicleKind};

/// One simulated vehicle.
///
/// Position and heading are owned here but only the simulation loop moves a
/// vehicle, and only after [`can_pass`][Self::can_pass] approved the step.
/// The spawn cell and heading are captured at construction and restored by
/// [`reset`][Self::reset].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id:              VehicleId,
    kind:            VehicleKind,
    cell:            Cell,
    direction:       Direction,
    spawn_cell:      Cell,
    spawn_direction: Direction,
    alive:           bool,
    /// Ticks left until revival.  Only read while `!alive`.
    respawn_countdown: u32,
    /// Remaining red-crosswalk turns a taxi will still wait.  Unused by
    /// other kinds.
    pub(crate) crosswalk_wait: u32,
}

impl Vehicle {
    pub fn new(id: VehicleId, kind: VehicleKind, cell: Cell, direction: Direction) -> Self {
        Self {
            id,
            kind,
            cell,
            direction,
            spawn_cell:        cell,
            spawn_direction:   direction,
            alive:             true,
            respawn_countdown: 0,
            crosswalk_wait:    TAXI_CROSSWALK_WAIT,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    #[inline]
    pub fn policy(&self) -> &'static KindPolicy {
        self.kind.policy()
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn spawn_cell(&self) -> Cell {
        self.spawn_cell
    }

    pub fn spawn_direction(&self) -> Direction {
        self.spawn_direction
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn respawn_countdown(&self) -> u32 {
        self.respawn_countdown
    }

    /// Ticks this kind stays dead after losing a collision.
    #[inline]
    pub fn death_ticks(&self) -> u32 {
        self.policy().death_ticks
    }

    /// Taxi red-crosswalk turns left before it gives up waiting.
    pub fn crosswalk_wait(&self) -> u32 {
        self.crosswalk_wait
    }

    /// `true` iff `terrain` is in this kind's valid-terrain set.
    #[inline]
    pub fn is_valid_terrain(&self, terrain: Terrain) -> bool {
        self.policy().valid_terrain.contains(terrain)
    }

    /// Display key: the kind name, with a `_dead` suffix while dead.
    pub fn sprite_key(&self) -> &'static str {
        let policy = self.policy();
        if self.alive { policy.name } else { policy.dead_sprite }
    }

    // ── Mutators used by the simulation loop ──────────────────────────────

    #[inline]
    pub fn set_cell(&mut self, cell: Cell) {
        self.cell = cell;
    }

    #[inline]
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// One-sided collision: `self` dies if its death time is strictly longer
    /// than `other`'s.  Equal death times leave both untouched.
    ///
    /// Use [`resolve_collision`] to apply both sides of a pair.
    pub fn collide(&mut self, other: &Vehicle) {
        if self.death_ticks() > other.death_ticks() {
            self.alive = false;
            self.respawn_countdown = self.death_ticks();
            tracing::debug!(
                vehicle = %self.id,
                kind    = %self.kind,
                by      = %other.id,
                ticks   = self.respawn_countdown,
                "vehicle killed in collision",
            );
        }
    }

    /// Advance the respawn timer by one tick.
    ///
    /// No-op while alive.  When the countdown reaches zero the vehicle
    /// revives in place facing a random direction.
    pub fn poke(&mut self, rng: &mut VehicleRng) {
        if self.alive {
            return;
        }
        self.respawn_countdown = self.respawn_countdown.saturating_sub(1);
        if self.respawn_countdown == 0 {
            self.alive = true;
            self.direction = Direction::random(rng);
            tracing::debug!(
                vehicle   = %self.id,
                kind      = %self.kind,
                direction = %self.direction,
                "vehicle revived",
            );
        }
    }

    /// Restore spawn position and heading, revive, and clear all timers.
    pub fn reset(&mut self) {
        self.cell = self.spawn_cell;
        self.direction = self.spawn_direction;
        self.alive = true;
        self.respawn_countdown = 0;
        self.crosswalk_wait = TAXI_CROSSWALK_WAIT;
    }
}

/// Resolve a collision between two vehicles on the same cell.
///
/// Exactly the vehicle with the strictly larger death time dies; equal death
/// times kill neither.  Repeating the call for the same pair within a tick,
/// in either order, has no further effect.
pub fn resolve_collision(a: &mut Vehicle, b: &mut Vehicle) {
    a.collide(b);
    b.collide(a);
}
