//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use roam_assoc::{AssociationState, HandoverEvent, LinkState};
use roam_core::{Point3, Tick};
use roam_sim::{SimObserver, StationStore};

use crate::row::{AssociationSnapshotRow, HandoverEventRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes handover events and association snapshots to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_handover(&mut self, event: &HandoverEvent) {
        let row = HandoverEventRow {
            tick:       event.tick.0,
            station_id: event.station.0,
            from_ap:    event.from.map(|ap| ap.0),
            to_ap:      event.to.map(|ap| ap.0),
            rssi_dbm:   event.rssi_dbm,
        };
        let result = self.writer.write_events(&[row]);
        self.store_err(result);
    }

    fn on_snapshot(
        &mut self,
        tick:      Tick,
        stations:  &StationStore,
        positions: &[Point3],
        assoc:     &[AssociationState],
    ) {
        let rows: Vec<AssociationSnapshotRow> = (0..stations.count())
            .map(|i| {
                let (ap, rssi_dbm) = match assoc[i].link {
                    LinkState::Associated { ap, rssi_dbm, .. } => (Some(ap.0), rssi_dbm),
                    LinkState::Disconnected                    => (None, None),
                };
                AssociationSnapshotRow {
                    tick: tick.0,
                    station_id: i as u32,
                    mac: stations.macs[i].to_string(),
                    x: positions[i].x,
                    y: positions[i].y,
                    z: positions[i].z,
                    ap,
                    rssi_dbm,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
