//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `handover_events.csv`
//! - `association_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AssociationSnapshotRow, HandoverEventRow, OutputResult};

fn opt_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("handover_events.csv"))?;
        events.write_record(["tick", "station", "from_ap", "to_ap", "rssi_dbm"])?;

        let mut snapshots = Writer::from_path(dir.join("association_snapshots.csv"))?;
        snapshots.write_record(["tick", "station", "mac", "x", "y", "z", "ap", "rssi_dbm"])?;

        Ok(Self {
            events,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[HandoverEventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.to_string(),
                row.station_id.to_string(),
                opt_cell(row.from_ap),
                opt_cell(row.to_ap),
                opt_cell(row.rssi_dbm.map(|r| format!("{r:.2}"))),
            ])?;
        }
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AssociationSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.station_id.to_string(),
                row.mac.clone(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                format!("{:.3}", row.z),
                opt_cell(row.ap),
                opt_cell(row.rssi_dbm.map(|r| format!("{r:.2}"))),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
