//! `roam-output` — file writers for roamsim runs.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                        | Contents                                   |
//! |-----------------------------|--------------------------------------------|
//! | `handover_events.csv`       | one row per association change             |
//! | `association_snapshots.csv` | per-station state at each snapshot tick    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `roam_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use roam_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AssociationSnapshotRow, HandoverEventRow};
pub use writer::OutputWriter;
