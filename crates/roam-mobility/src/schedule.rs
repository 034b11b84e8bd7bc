//! Waypoint segments and the per-station motion schedule.

use roam_core::{Point3, Tick};

use crate::{MobilityError, MobilityResult};

// ── WaypointSegment ───────────────────────────────────────────────────────────

/// A time-bounded linear motion instruction.
///
/// The station is at `start_pos` at `start_tick` and at `stop_pos` at
/// `stop_tick`, moving at constant velocity in between.  Invariant (enforced
/// at schedule construction): `stop_tick > start_tick`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointSegment {
    pub start_tick: Tick,
    pub start_pos:  Point3,
    pub stop_tick:  Tick,
    pub stop_pos:   Point3,
}

impl WaypointSegment {
    pub fn new(start_tick: Tick, start_pos: Point3, stop_tick: Tick, stop_pos: Point3) -> Self {
        Self { start_tick, start_pos, stop_tick, stop_pos }
    }

    /// Interpolated position at `t`, which must satisfy
    /// `start_tick <= t <= stop_tick`.
    fn position_within(&self, t: Tick) -> Point3 {
        let elapsed = t.since(self.start_tick) as f64;
        let total = self.stop_tick.since(self.start_tick) as f64;
        self.start_pos.lerp(self.stop_pos, elapsed / total)
    }
}

// ── WaypointSchedule ──────────────────────────────────────────────────────────

/// The validated, immutable motion schedule for one station.
///
/// Construction sorts segments by start tick and rejects degenerate or
/// overlapping segments, so every held instance satisfies the schedule
/// invariants.  Gaps between segments are allowed and mean "hold the last
/// resolved position".
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointSchedule {
    initial_position: Point3,
    segments:         Vec<WaypointSegment>,
}

impl WaypointSchedule {
    /// A schedule with no motion — the station sits at `position` forever.
    pub fn stationary(position: Point3) -> Self {
        Self {
            initial_position: position,
            segments:         Vec::new(),
        }
    }

    /// Build a schedule from `segments`, validating the schedule invariants.
    ///
    /// Segments are sorted by start tick.  `initial_position` is only used
    /// when `segments` is empty; otherwise the first segment's start position
    /// governs all ticks before motion begins.
    ///
    /// # Errors
    ///
    /// - [`MobilityError::DegenerateSegment`] if any segment has
    ///   `stop_tick <= start_tick`.
    /// - [`MobilityError::OverlappingSegments`] if two segments share any
    ///   tick span.
    pub fn new(
        initial_position: Point3,
        mut segments: Vec<WaypointSegment>,
    ) -> MobilityResult<Self> {
        segments.sort_by_key(|s| s.start_tick);

        for (i, seg) in segments.iter().enumerate() {
            if seg.stop_tick <= seg.start_tick {
                return Err(MobilityError::DegenerateSegment {
                    index: i,
                    at:    seg.stop_tick,
                });
            }
            if i > 0 {
                let prev = &segments[i - 1];
                if seg.start_tick < prev.stop_tick {
                    return Err(MobilityError::OverlappingSegments {
                        index:     i,
                        start:     seg.start_tick,
                        prev_stop: prev.stop_tick,
                    });
                }
            }
        }

        Ok(Self { initial_position, segments })
    }

    /// The validated segments, in ascending start-tick order.
    pub fn segments(&self) -> &[WaypointSegment] {
        &self.segments
    }

    /// The position held before any segment starts.
    pub fn initial_position(&self) -> Point3 {
        match self.segments.first() {
            Some(first) => first.start_pos,
            None        => self.initial_position,
        }
    }

    /// Resolve the station's position at `t`.
    ///
    /// Pure and side-effect free — safe to call concurrently for different
    /// schedules (or the same one; it takes `&self`).
    pub fn position_at(&self, t: Tick) -> Point3 {
        // Last segment whose start_tick <= t, if any.
        let idx = match self.segments.partition_point(|s| s.start_tick <= t) {
            0 => return self.initial_position(),
            n => n - 1,
        };

        let seg = &self.segments[idx];
        if t <= seg.stop_tick {
            seg.position_within(t)
        } else {
            // Gap after `seg`, or past the end of the schedule: hold.
            seg.stop_pos
        }
    }

    /// The last tick at which the schedule prescribes motion, or `None` for
    /// a stationary schedule.
    pub fn final_tick(&self) -> Option<Tick> {
        self.segments.last().map(|s| s.stop_tick)
    }
}
