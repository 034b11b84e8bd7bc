//! Handover events and the append-only log.

use roam_core::{ApId, StationId, Tick};

// ── HandoverEvent ─────────────────────────────────────────────────────────────

/// An immutable record of one association change.
///
/// `from`/`to` of `None` mean "disconnected".  `rssi_dbm` is the signal of
/// the new AP at the moment of the switch; `None` when no measurement exists
/// (disconnects, forcing onto an out-of-range AP).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandoverEvent {
    pub tick:     Tick,
    pub station:  StationId,
    pub from:     Option<ApId>,
    pub to:       Option<ApId>,
    pub rssi_dbm: Option<f64>,
}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// The simulation's durable, time-ordered audit trail of association
/// changes.
///
/// Append-only; events arrive in non-decreasing tick order (ascending
/// `StationId` within a tick), which the range query relies on.
#[derive(Default)]
pub struct EventLog {
    events: Vec<HandoverEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event.  Callers must push in non-decreasing tick order.
    pub fn push(&mut self, event: HandoverEvent) {
        debug_assert!(
            self.events.last().is_none_or(|last| last.tick <= event.tick),
            "event log must be appended in tick order"
        );
        self.events.push(event);
    }

    /// All events with `t0 <= tick <= t1`, as a borrowed slice.
    pub fn events_in_range(&self, t0: Tick, t1: Tick) -> &[HandoverEvent] {
        let lo = self.events.partition_point(|e| e.tick < t0);
        let hi = self.events.partition_point(|e| e.tick <= t1);
        &self.events[lo..hi]
    }

    /// All events for one station, in time order.
    pub fn events_for_station(&self, station: StationId) -> Vec<HandoverEvent> {
        self.events
            .iter()
            .filter(|e| e.station == station)
            .copied()
            .collect()
    }

    /// The most recent event for `station` at or before `t`, if any.
    pub fn last_for_station_at(&self, station: StationId, t: Tick) -> Option<&HandoverEvent> {
        self.events
            .iter()
            .rev()
            .find(|e| e.station == station && e.tick <= t)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandoverEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
