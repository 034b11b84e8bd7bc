//! Read-only query API for external collaborators.
//!
//! Test harnesses consume the engine through these four calls (plus the
//! event log): `position_at`, `association_at`, `rssi_at`, and
//! `events_in_range`.  None of them mutates simulation state, and every
//! rejected input produces an error naming the offending entity.

use roam_assoc::HandoverEvent;
use roam_core::{ApId, CoreError, CoreResult, Point3, StationId, Tick};
use roam_radio::signal_strength_faded;

use crate::Sim;

/// One RSSI measurement from [`Sim::rssi_at`].
///
/// `in_range` reports the nominal-range cutoff; the dBm value is computed
/// either way so callers can inspect signal just past the coverage edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RssiSample {
    pub rssi_dbm: f64,
    pub in_range: bool,
}

impl Sim {
    /// The station's position at `t` — a pure schedule lookup, valid for
    /// any tick past or future.
    pub fn position_at(&self, station: StationId, t: Tick) -> CoreResult<Point3> {
        let schedule = self
            .stations
            .schedules
            .get(station.index())
            .ok_or(CoreError::StationNotFound(station))?;
        Ok(schedule.position_at(t))
    }

    /// The AP the station was associated with at `t`, or `None` if it was
    /// disconnected.
    ///
    /// Reconstructed from the event log, so `t` must not exceed the last
    /// completed tick.
    pub fn association_at(&self, station: StationId, t: Tick) -> CoreResult<Option<ApId>> {
        if station.index() >= self.stations.count() {
            return Err(CoreError::StationNotFound(station));
        }
        let completed = self.last_completed_tick();
        if completed.is_none_or(|c| t > c) {
            return Err(CoreError::QueryAheadOfTime {
                queried:   t,
                completed: completed.unwrap_or(Tick::ZERO),
            });
        }
        Ok(self
            .log
            .last_for_station_at(station, t)
            .and_then(|event| event.to))
    }

    /// The modeled RSSI between `station` and `ap` at `t`.
    ///
    /// Recomputes position and propagation — deterministic for any tick,
    /// including ticks not yet simulated.
    pub fn rssi_at(&self, station: StationId, ap: ApId, t: Tick) -> CoreResult<RssiSample> {
        let pos = self.position_at(station, t)?;
        let ap_ref = self.aps.try_get(ap).ok_or(CoreError::ApNotFound(ap))?;
        let distance = pos.distance(ap_ref.position);
        Ok(RssiSample {
            rssi_dbm: signal_strength_faded(
                ap_ref.tx_power_dbm,
                distance,
                &self.params,
                &self.fading,
                station,
                ap,
                t,
            ),
            in_range: ap_ref.covers(distance),
        })
    }

    /// All handover events with `t0 <= tick <= t1`.
    pub fn events_in_range(&self, t0: Tick, t1: Tick) -> &[HandoverEvent] {
        self.log.events_in_range(t0, t1)
    }

    /// All handover events for one station, in time order.
    pub fn events_for_station(&self, station: StationId) -> CoreResult<Vec<HandoverEvent>> {
        if station.index() >= self.stations.count() {
            return Err(CoreError::StationNotFound(station));
        }
        Ok(self.log.events_for_station(station))
    }
}
