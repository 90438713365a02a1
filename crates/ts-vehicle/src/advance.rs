//! Per-kind advance permission.
//!
//! | Rule         | Denies the step when                                            |
//! |--------------|-----------------------------------------------------------------|
//! | `Car`        | Light at Red, or Crosswalk at Yellow/Red                        |
//! | `Taxi`       | Crosswalk at Red while still waiting, or Light at Red           |
//! | `Truck`      | Crosswalk at Red, or terrain it cannot drive on                 |
//! | `Bicycle`    | Light or Crosswalk at anything but Green                        |
//! | `Pedestrian` | Crosswalk at Green, or terrain it cannot walk on                |
//! | `Always`     | never                                                           |
//!
//! The taxi's wait counter only gates the crosswalk branch: a red light
//! stops a taxi no matter how long it has waited.

use ts_core::{Signal, Terrain};

use crate::{AdvanceRule, Vehicle};

/// Red-crosswalk turns a taxi waits before driving through.
pub const TAXI_CROSSWALK_WAIT: u32 = 3;

impl Vehicle {
    /// May this vehicle step onto `terrain` while the signal shows `signal`?
    ///
    /// Pure for every kind except the taxi, whose crosswalk wait counter is
    /// decremented on each red-crosswalk refusal and refilled on every
    /// approval.
    pub fn can_pass(&mut self, terrain: Terrain, signal: Signal) -> bool {
        match self.policy().rule {
            AdvanceRule::Car => !matches!(
                (terrain, signal),
                (Terrain::Light, Signal::Red)
                    | (Terrain::Crosswalk, Signal::Yellow | Signal::Red)
            ),

            AdvanceRule::Taxi => self.taxi_can_pass(terrain, signal),

            AdvanceRule::Truck => {
                !(terrain == Terrain::Crosswalk && signal == Signal::Red)
                    && self.is_valid_terrain(terrain)
            }

            AdvanceRule::Bicycle => {
                !(matches!(terrain, Terrain::Light | Terrain::Crosswalk) && signal != Signal::Green)
            }

            AdvanceRule::Pedestrian => {
                !(terrain == Terrain::Crosswalk && signal == Signal::Green)
                    && self.is_valid_terrain(terrain)
            }

            AdvanceRule::Always => true,
        }
    }

    fn taxi_can_pass(&mut self, terrain: Terrain, signal: Signal) -> bool {
        let red_crosswalk = terrain == Terrain::Crosswalk && signal == Signal::Red;
        let red_light = terrain == Terrain::Light && signal == Signal::Red;

        if (self.crosswalk_wait > 0 && red_crosswalk) || red_light {
            if red_crosswalk {
                self.crosswalk_wait -= 1;
            }
            false
        } else {
            self.crosswalk_wait = TAXI_CROSSWALK_WAIT;
            true
        }
    }
}
