//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, VehicleSnapshotRow};

const SNAPSHOT_HEADER: [&str; 8] =
    ["vehicle_id", "tick", "kind", "x", "y", "direction", "alive", "respawn_in"];
const SUMMARY_HEADER: [&str; 7] =
    ["tick", "signal", "moved", "blocked", "deaths", "revivals", "alive"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.  The headers are present even if no row is ever written.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = open(&dir.join("vehicle_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = open(&dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        tracing::debug!(dir = %dir.display(), "CSV output opened");
        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

fn open(path: &Path) -> OutputResult<Writer<File>> {
    Ok(WriterBuilder::new().has_headers(false).from_path(path)?)
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.serialize(row)?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
