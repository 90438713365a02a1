//! Shared direction-selection engine.
//!
//! # Rule order
//!
//! The first rule that yields a direction wins:
//!
//! 1. **Reverse**: ahead, left, and right are all invalid terrain: turn
//!    around.  Overrides every bias.
//! 2. **Gravitate**: kinds with a preferred terrain take it if it lies
//!    ahead, then left, then right.
//! 3. **Random**: kinds with a random bias rejection-sample uniform
//!    directions until one is not a U-turn and leads onto valid terrain.
//! 4. **Default**: ahead if valid, else left, else right.
//!
//! The cell behind the vehicle is never inspected.  Signals are not
//! considered here; [`Vehicle::can_pass`] handles them afterwards.

use ts_core::{Direction, Neighbors, VehicleRng};

use crate::Vehicle;

impl Vehicle {
    /// Pick this tick's heading from the four neighbouring terrains.
    pub fn choose_direction(&self, neighbors: &Neighbors, rng: &mut VehicleRng) -> Direction {
        let heading = self.direction();

        if self.should_reverse(neighbors, heading) {
            tracing::trace!(vehicle = %self.id(), from = %heading, "boxed in, reversing");
            return heading.reverse();
        }

        if let Some(dir) = self.gravitate(neighbors, heading) {
            return dir;
        }

        if self.policy().random_bias {
            // Terminates: rule 1 did not fire, so at least one of
            // ahead/left/right is valid.
            loop {
                let dir = Direction::random(rng);
                if dir != heading.reverse() && self.is_valid_terrain(neighbors.get(dir)) {
                    return dir;
                }
            }
        }

        self.default_direction(neighbors, heading)
    }

    /// `true` when ahead, left, and right are all invalid terrain.
    fn should_reverse(&self, neighbors: &Neighbors, heading: Direction) -> bool {
        forward_arc(heading)
            .into_iter()
            .all(|dir| !self.is_valid_terrain(neighbors.get(dir)))
    }

    fn gravitate(&self, neighbors: &Neighbors, heading: Direction) -> Option<Direction> {
        let target = self.policy().gravitate?;
        forward_arc(heading)
            .into_iter()
            .find(|&dir| neighbors.get(dir) == target)
    }

    fn default_direction(&self, neighbors: &Neighbors, heading: Direction) -> Direction {
        forward_arc(heading)
            .into_iter()
            .find(|&dir| self.is_valid_terrain(neighbors.get(dir)))
            // Unreachable once the reverse check has passed.
            .unwrap_or_else(|| heading.reverse())
    }
}

/// Candidate order shared by every rule.
#[inline]
fn forward_arc(heading: Direction) -> [Direction; 3] {
    [heading, heading.left(), heading.right()]
}
