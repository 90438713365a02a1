//! Unit tests for ts-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{TickSummaryRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn snap_row(vehicle_id: u32, tick: u64) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            vehicle_id,
            tick,
            kind:       "taxi",
            x:          vehicle_id as i32,
            y:          -1,
            direction:  "north",
            alive:      vehicle_id != 1,
            respawn_in: if vehicle_id == 1 { 7 } else { 0 },
        }
    }

    #[test]
    fn headers_written_up_front() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir, "vehicle_snapshots.csv"),
            ["vehicle_id", "tick", "kind", "x", "y", "direction", "alive", "respawn_in"]
        );
        assert_eq!(
            headers(&dir, "tick_summaries.csv"),
            ["tick", "signal", "moved", "blocked", "deaths", "revivals", "alive"]
        );
        assert!(records(&dir, "vehicle_snapshots.csv").is_empty());
    }

    #[test]
    fn snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "vehicle_snapshots.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][2], "taxi");
        assert_eq!(&rows[0][4], "-1");
        assert_eq!(&rows[0][6], "true");
        assert_eq!(&rows[1][6], "false");
        assert_eq!(&rows[1][7], "7");
    }

    #[test]
    fn tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = TickSummaryRow {
            tick:     3,
            signal:   "yellow",
            moved:    4,
            blocked:  1,
            deaths:   2,
            revivals: 0,
            alive:    3,
        };
        w.write_tick_summary(&row).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "tick_summaries.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "yellow", "4", "1", "2", "0", "3"]);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use ts_core::{Cell, Direction, SimConfig, Tick, VehicleId};
    use ts_grid::parse_map;
    use ts_sim::{SimBuilder, SimObserver};
    use ts_vehicle::{Vehicle, VehicleKind};

    use crate::{
        CsvWriter, OutputError, OutputResult, OutputWriter, SimOutputObserver, TickSummaryRow,
        VehicleSnapshotRow,
    };

    /// Counts calls and fails every summary write after the first `ok`.
    #[derive(Default)]
    struct Flaky {
        ok:        usize,
        summaries: usize,
        snapshots: usize,
        finished:  usize,
    }

    impl OutputWriter for Flaky {
        fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            self.snapshots += rows.len();
            Ok(())
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries += 1;
            if self.summaries > self.ok {
                let msg = format!("write {} refused", self.summaries);
                return Err(OutputError::Io(std::io::Error::other(msg)));
            }
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn keeps_only_the_first_error() {
        let mut obs = SimOutputObserver::new(Flaky { ok: 1, ..Flaky::default() });
        let vehicles = [Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(0, 0), Direction::East)];

        for t in 0..3 {
            let report = ts_sim::TickReport {
                tick:     Tick(t),
                signal:   ts_core::Signal::Green,
                moved:    1,
                blocked:  0,
                deaths:   0,
                revivals: 0,
                alive:    1,
            };
            obs.on_tick_end(&report);
            obs.on_snapshot(Tick(t), &vehicles);
        }
        obs.on_sim_end(Tick(3));

        let err = obs.take_error().expect("an error was stored");
        assert!(err.to_string().contains("write 2 refused"));
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.summaries, 3);
        assert_eq!(w.snapshots, 3);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn empty_fleet_writes_no_snapshot() {
        let mut obs = SimOutputObserver::new(Flaky { ok: usize::MAX, ..Flaky::default() });
        obs.on_snapshot(Tick(0), &[]);
        assert_eq!(obs.into_writer().snapshots, 0);
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let config = SimConfig {
            total_ticks:           6,
            seed:                  1,
            signal_period_ticks:   2,
            output_interval_ticks: 2,
        };
        let grid = parse_map("1 4\nSSSS\n").unwrap();
        let vehicles = vec![
            Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(0, 0), Direction::East),
            Vehicle::new(VehicleId(1), VehicleKind::Truck, Cell::new(3, 0), Direction::West),
        ];
        let mut sim = SimBuilder::new(config, grid).vehicles(vehicles).build().unwrap();

        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());
        drop(obs);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 6);
        assert_eq!(&summaries[0][1], "green");
        assert_eq!(&summaries[2][1], "yellow");
        assert_eq!(&summaries[4][1], "red");

        // Snapshots at ticks 0, 2, 4 for two vehicles.
        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let snaps: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(snaps.len(), 6);
        assert_eq!(&snaps[0][2], "car");
        assert_eq!(&snaps[1][2], "truck");
        assert_eq!(&snaps[4][1], "4");
    }
}
