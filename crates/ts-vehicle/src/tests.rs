//! Unit tests for ts-vehicle.

use ts_core::{Cell, Direction, Neighbors, Signal, Terrain, VehicleId, VehicleRng};

use crate::{TAXI_CROSSWALK_WAIT, Vehicle, VehicleKind, resolve_collision};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn vehicle(kind: VehicleKind) -> Vehicle {
    Vehicle::new(VehicleId(0), kind, Cell::new(0, 0), Direction::North)
}

fn facing(kind: VehicleKind, dir: Direction) -> Vehicle {
    Vehicle::new(VehicleId(0), kind, Cell::new(0, 0), dir)
}

fn rng() -> VehicleRng {
    VehicleRng::from_seed(0xC0FFEE)
}

/// Neighbours listed as (north, east, south, west).
fn around(n: Terrain, e: Terrain, s: Terrain, w: Terrain) -> Neighbors {
    Neighbors::new([n, e, s, w])
}

/// Independent statement of the advance table, one arm per kind.
fn expected_pass(kind: VehicleKind, terrain: Terrain, signal: Signal) -> bool {
    use Signal::*;
    use Terrain::*;
    match kind {
        VehicleKind::Car => {
            !((terrain == Light && signal == Red)
                || (terrain == Crosswalk && (signal == Yellow || signal == Red)))
        }
        // Fresh taxi: counter is full, so red crosswalk denies.
        VehicleKind::Taxi => {
            !((terrain == Crosswalk && signal == Red) || (terrain == Light && signal == Red))
        }
        VehicleKind::Truck => {
            !(terrain == Crosswalk && signal == Red) && matches!(terrain, Street | Light | Crosswalk)
        }
        VehicleKind::Bicycle => !((terrain == Light || terrain == Crosswalk) && signal != Green),
        VehicleKind::Pedestrian => {
            !(terrain == Crosswalk && signal == Green) && matches!(terrain, Crosswalk | Grass)
        }
        VehicleKind::Atv => true,
    }
}

// ── Policy table ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod kind_tests {
    use super::*;

    #[test]
    fn death_ticks_per_kind() {
        let ticks: Vec<u32> = VehicleKind::ALL.iter().map(|k| k.policy().death_ticks).collect();
        assert_eq!(ticks, vec![10, 10, 0, 30, 20, 50]);
    }

    #[test]
    fn biases_per_kind() {
        use VehicleKind::*;
        let random: Vec<_> = VehicleKind::ALL.iter().filter(|k| k.policy().random_bias).collect();
        assert_eq!(random, vec![&Truck, &Atv, &Pedestrian]);

        assert_eq!(Bicycle.policy().gravitate, Some(Terrain::Trail));
        assert_eq!(Pedestrian.policy().gravitate, Some(Terrain::Crosswalk));
        assert_eq!(Car.policy().gravitate, None);
        assert_eq!(Atv.policy().gravitate, None);
    }

    #[test]
    fn valid_terrain_sets() {
        use Terrain::*;
        let road = [Street, Light, Crosswalk];
        for kind in [VehicleKind::Car, VehicleKind::Taxi, VehicleKind::Truck] {
            let v = vehicle(kind);
            for t in Terrain::ALL {
                assert_eq!(v.is_valid_terrain(t), road.contains(&t), "{kind} on {t}");
            }
        }
        let bike = vehicle(VehicleKind::Bicycle);
        assert!(bike.is_valid_terrain(Trail));
        assert!(!bike.is_valid_terrain(Grass));

        let atv = vehicle(VehicleKind::Atv);
        assert!(Terrain::ALL.iter().all(|&t| atv.is_valid_terrain(t) == (t != Wall)));

        let walker = vehicle(VehicleKind::Pedestrian);
        assert!(walker.is_valid_terrain(Grass));
        assert!(walker.is_valid_terrain(Crosswalk));
        assert!(!walker.is_valid_terrain(Street));
    }

    #[test]
    fn parse_and_display() {
        for kind in VehicleKind::ALL {
            assert_eq!(kind.to_string().parse::<VehicleKind>().unwrap(), kind);
        }
        assert_eq!("ATV".parse::<VehicleKind>().unwrap(), VehicleKind::Atv);
        assert_eq!("human".parse::<VehicleKind>().unwrap(), VehicleKind::Pedestrian);
        assert!("tank".parse::<VehicleKind>().is_err());
    }
}

// ── Vehicle state ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn new_vehicle_defaults() {
        let v = Vehicle::new(VehicleId(3), VehicleKind::Truck, Cell::new(10, 11), Direction::North);
        assert_eq!(v.id(), VehicleId(3));
        assert_eq!(v.cell(), Cell::new(10, 11));
        assert_eq!(v.direction(), Direction::North);
        assert_eq!(v.death_ticks(), 0);
        assert!(v.is_alive());
        assert_eq!(v.respawn_countdown(), 0);
        assert_eq!(v.crosswalk_wait(), TAXI_CROSSWALK_WAIT);
    }

    #[test]
    fn setters() {
        let mut v = vehicle(VehicleKind::Truck);
        v.set_cell(Cell::new(20, 25));
        v.set_direction(Direction::East);
        assert_eq!(v.cell(), Cell::new(20, 25));
        assert_eq!(v.direction(), Direction::East);
        assert_eq!(v.spawn_cell(), Cell::new(0, 0));
        assert_eq!(v.spawn_direction(), Direction::North);
    }

    #[test]
    fn sprite_keys() {
        let mut car = vehicle(VehicleKind::Car);
        assert_eq!(car.sprite_key(), "car");
        car.collide(&vehicle(VehicleKind::Truck));
        assert_eq!(car.sprite_key(), "car_dead");

        let walker = vehicle(VehicleKind::Pedestrian);
        assert_eq!(walker.sprite_key(), "pedestrian");
    }
}

// ── Direction selection ───────────────────────────────────────────────────────

#[cfg(test)]
mod choose_tests {
    use super::*;
    use Terrain::*;

    #[test]
    fn boxed_in_truck_reverses() {
        let truck = vehicle(VehicleKind::Truck);
        let n = around(Wall, Wall, Street, Wall);
        let mut rng = rng();
        for _ in 0..20 {
            assert_eq!(truck.choose_direction(&n, &mut rng), Direction::South);
        }
    }

    #[test]
    fn reverse_ignores_rear_terrain_and_biases() {
        let mut rng = rng();
        for kind in VehicleKind::ALL {
            for dir in Direction::ALL {
                let v = facing(kind, dir);
                for rear in Terrain::ALL {
                    let n = Neighbors::uniform(Wall).with(dir.reverse(), rear);
                    assert_eq!(
                        v.choose_direction(&n, &mut rng),
                        dir.reverse(),
                        "{kind} facing {dir} with {rear} behind",
                    );
                }
            }
        }
    }

    #[test]
    fn default_prefers_straight_then_left_then_right() {
        let car = vehicle(VehicleKind::Car);
        let mut rng = rng();
        assert_eq!(
            car.choose_direction(&around(Street, Street, Street, Street), &mut rng),
            Direction::North
        );
        assert_eq!(
            car.choose_direction(&around(Grass, Street, Street, Street), &mut rng),
            Direction::West
        );
        assert_eq!(
            car.choose_direction(&around(Grass, Street, Street, Wall), &mut rng),
            Direction::East
        );
    }

    #[test]
    fn default_never_reverses_onto_open_road() {
        let taxi = facing(VehicleKind::Taxi, Direction::East);
        let n = around(Wall, Wall, Crosswalk, Street);
        // South (right of east) is valid, west behind is ignored.
        assert_eq!(taxi.choose_direction(&n, &mut rng()), Direction::South);
    }

    #[test]
    fn bicycle_gravitates_to_trail() {
        let bike = vehicle(VehicleKind::Bicycle);
        let mut rng = rng();
        // Straight is valid street but the trail on the right wins.
        assert_eq!(
            bike.choose_direction(&around(Street, Trail, Street, Street), &mut rng),
            Direction::East
        );
        // Trail ahead beats trail to the left.
        assert_eq!(
            bike.choose_direction(&around(Trail, Street, Street, Trail), &mut rng),
            Direction::North
        );
        // Trail behind is not considered.
        assert_eq!(
            bike.choose_direction(&around(Light, Street, Trail, Street), &mut rng),
            Direction::North
        );
    }

    #[test]
    fn pedestrian_gravitates_before_random() {
        let walker = facing(VehicleKind::Pedestrian, Direction::South);
        let n = around(Grass, Grass, Grass, Crosswalk);
        let mut rng = rng();
        // West is the right of south.
        for _ in 0..50 {
            assert_eq!(walker.choose_direction(&n, &mut rng), Direction::West);
        }
    }

    #[test]
    fn pedestrian_falls_back_to_random_without_crosswalk() {
        let walker = vehicle(VehicleKind::Pedestrian);
        let n = around(Grass, Grass, Grass, Grass);
        let mut rng = rng();
        let mut seen = [false; 4];
        for _ in 0..50 {
            seen[walker.choose_direction(&n, &mut rng).index()] = true;
        }
        assert!(seen[Direction::North.index()]);
        assert!(seen[Direction::East.index()]);
        assert!(seen[Direction::West.index()]);
        assert!(!seen[Direction::South.index()], "pedestrian should not U-turn");
    }

    #[test]
    fn truck_random_covers_legal_moves() {
        let truck = vehicle(VehicleKind::Truck);
        let n = around(Street, Crosswalk, Street, Light);
        let mut rng = rng();
        let mut seen = [false; 4];
        for _ in 0..50 {
            seen[truck.choose_direction(&n, &mut rng).index()] = true;
        }
        assert!(seen[Direction::North.index()]);
        assert!(seen[Direction::East.index()]);
        assert!(seen[Direction::West.index()]);
        assert!(!seen[Direction::South.index()], "truck should not be reversing");
    }

    #[test]
    fn random_bias_never_picks_invalid_terrain() {
        let atv = facing(VehicleKind::Atv, Direction::West);
        let n = around(Wall, Grass, Street, Trail);
        let mut rng = rng();
        let mut seen = [false; 4];
        for _ in 0..100 {
            let d = atv.choose_direction(&n, &mut rng);
            assert!(d == Direction::South || d == Direction::West, "picked {d}");
            seen[d.index()] = true;
        }
        assert!(seen[Direction::South.index()] && seen[Direction::West.index()]);
    }

    #[test]
    fn same_seed_same_choices() {
        let atv = vehicle(VehicleKind::Atv);
        let n = around(Street, Grass, Trail, Trail);
        let mut r1 = VehicleRng::new(7, VehicleId(4));
        let mut r2 = VehicleRng::new(7, VehicleId(4));
        let a: Vec<_> = (0..30).map(|_| atv.choose_direction(&n, &mut r1)).collect();
        let b: Vec<_> = (0..30).map(|_| atv.choose_direction(&n, &mut r2)).collect();
        assert_eq!(a, b);
    }
}

// ── Advance permission ────────────────────────────────────────────────────────

#[cfg(test)]
mod pass_tests {
    use super::*;

    #[test]
    fn matches_table_for_every_kind_terrain_and_signal() {
        for kind in VehicleKind::ALL {
            for terrain in Terrain::ALL {
                for signal in Signal::ALL {
                    // Fresh vehicle each time so taxi state never leaks.
                    let mut v = vehicle(kind);
                    assert_eq!(
                        v.can_pass(terrain, signal),
                        expected_pass(kind, terrain, signal),
                        "{kind} onto {terrain} at {signal}",
                    );
                }
            }
        }
    }

    #[test]
    fn car_stops_at_red_light_only() {
        let mut car = vehicle(VehicleKind::Car);
        assert!(!car.can_pass(Terrain::Light, Signal::Red));
        assert!(car.can_pass(Terrain::Light, Signal::Green));
        assert!(car.can_pass(Terrain::Light, Signal::Yellow));
    }

    #[test]
    fn taxi_waits_three_turns_at_red_crosswalk() {
        let mut taxi = vehicle(VehicleKind::Taxi);
        for remaining in (0..TAXI_CROSSWALK_WAIT).rev() {
            assert!(!taxi.can_pass(Terrain::Crosswalk, Signal::Red));
            assert_eq!(taxi.crosswalk_wait(), remaining);
        }
        assert!(taxi.can_pass(Terrain::Crosswalk, Signal::Red));
        assert_eq!(taxi.crosswalk_wait(), TAXI_CROSSWALK_WAIT);
    }

    #[test]
    fn taxi_wait_refills_on_any_other_move() {
        let mut taxi = vehicle(VehicleKind::Taxi);
        assert!(!taxi.can_pass(Terrain::Crosswalk, Signal::Red));
        assert!(!taxi.can_pass(Terrain::Crosswalk, Signal::Red));
        assert_eq!(taxi.crosswalk_wait(), 1);

        assert!(taxi.can_pass(Terrain::Street, Signal::Red));
        assert_eq!(taxi.crosswalk_wait(), TAXI_CROSSWALK_WAIT);

        assert!(!taxi.can_pass(Terrain::Crosswalk, Signal::Red));
        assert!(taxi.can_pass(Terrain::Crosswalk, Signal::Yellow));
        assert_eq!(taxi.crosswalk_wait(), TAXI_CROSSWALK_WAIT);
    }

    #[test]
    fn taxi_never_waits_out_a_red_light() {
        let mut taxi = vehicle(VehicleKind::Taxi);
        for _ in 0..10 {
            assert!(!taxi.can_pass(Terrain::Light, Signal::Red));
        }
        // Red lights leave the crosswalk counter alone.
        assert_eq!(taxi.crosswalk_wait(), TAXI_CROSSWALK_WAIT);
    }

    #[test]
    fn exhausted_taxi_still_stops_for_red_light() {
        let mut taxi = vehicle(VehicleKind::Taxi);
        for _ in 0..TAXI_CROSSWALK_WAIT {
            taxi.can_pass(Terrain::Crosswalk, Signal::Red);
        }
        assert_eq!(taxi.crosswalk_wait(), 0);
        assert!(!taxi.can_pass(Terrain::Light, Signal::Red));
        assert_eq!(taxi.crosswalk_wait(), 0);
    }
}

// ── Collision, respawn, reset ─────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn larger_death_time_dies() {
        for a_kind in VehicleKind::ALL {
            for b_kind in VehicleKind::ALL {
                let mut a = vehicle(a_kind);
                let mut b = vehicle(b_kind);
                resolve_collision(&mut a, &mut b);

                let (ta, tb) = (a_kind.policy().death_ticks, b_kind.policy().death_ticks);
                assert_eq!(a.is_alive(), ta <= tb, "{a_kind} vs {b_kind}");
                assert_eq!(b.is_alive(), tb <= ta, "{a_kind} vs {b_kind}");
                if !a.is_alive() {
                    assert_eq!(a.respawn_countdown(), ta);
                }
                if !b.is_alive() {
                    assert_eq!(b.respawn_countdown(), tb);
                }
            }
        }
    }

    #[test]
    fn collide_is_one_sided() {
        let mut bike = vehicle(VehicleKind::Bicycle);
        let car = vehicle(VehicleKind::Car);
        bike.collide(&car);
        assert!(!bike.is_alive());
        assert_eq!(bike.respawn_countdown(), 30);

        let mut car = car;
        car.collide(&bike);
        assert!(car.is_alive());
    }

    #[test]
    fn resolving_twice_changes_nothing() {
        let mut atv = vehicle(VehicleKind::Atv);
        let mut car = vehicle(VehicleKind::Car);
        resolve_collision(&mut atv, &mut car);
        let snapshot = (atv.clone(), car.clone());
        resolve_collision(&mut car, &mut atv);
        assert_eq!((atv, car), snapshot);
    }

    #[test]
    fn equal_death_times_kill_neither() {
        let mut car = vehicle(VehicleKind::Car);
        let mut taxi = vehicle(VehicleKind::Taxi);
        resolve_collision(&mut car, &mut taxi);
        assert!(car.is_alive());
        assert!(taxi.is_alive());
    }

    /// Kill a vehicle by colliding it with a truck (death time 0).
    fn killed(kind: VehicleKind) -> Vehicle {
        let mut v = vehicle(kind);
        v.collide(&vehicle(VehicleKind::Truck));
        v
    }

    #[test]
    fn revives_after_exactly_death_ticks_pokes() {
        let mut rng = rng();
        let mut car = killed(VehicleKind::Car);
        for left in (1..10).rev() {
            car.poke(&mut rng);
            assert!(!car.is_alive());
            assert_eq!(car.respawn_countdown(), left);
        }
        car.poke(&mut rng);
        assert!(car.is_alive());
    }

    #[test]
    fn poke_on_live_vehicle_is_noop() {
        let mut rng = rng();
        let mut v = facing(VehicleKind::Atv, Direction::West);
        let before = v.clone();
        v.poke(&mut rng);
        assert_eq!(v, before);
    }

    #[test]
    fn revival_direction_is_randomized() {
        let mut seen = [false; 4];
        for seed in 0..64 {
            let mut rng = VehicleRng::from_seed(seed);
            let mut bike = killed(VehicleKind::Bicycle);
            for _ in 0..30 {
                bike.poke(&mut rng);
            }
            assert!(bike.is_alive());
            seen[bike.direction().index()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn reset_restores_spawn_state() {
        let mut rng = rng();
        let mut taxi = facing(VehicleKind::Taxi, Direction::South);
        taxi.set_cell(Cell::new(5, 9));
        taxi.set_direction(Direction::West);
        taxi.can_pass(Terrain::Crosswalk, Signal::Red);
        taxi.collide(&vehicle(VehicleKind::Truck));
        taxi.poke(&mut rng);

        taxi.reset();
        assert_eq!(taxi.cell(), Cell::new(0, 0));
        assert_eq!(taxi.direction(), Direction::South);
        assert!(taxi.is_alive());
        assert_eq!(taxi.respawn_countdown(), 0);
        assert_eq!(taxi.crosswalk_wait(), TAXI_CROSSWALK_WAIT);

        let once = taxi.clone();
        taxi.reset();
        assert_eq!(taxi, once);
    }
}
