//! The `Sim` struct and its tick loop.

use roam_assoc::{AssociationState, Candidate, EventLog, Evaluator};
use roam_core::{ApId, CoreError, FadingRng, Point3, SimClock, SimConfig, StationId, Tick};
use roam_radio::{ApTable, PropagationParams, signal_strength_faded};

use crate::{SimObserver, SimResult, StationStore};

/// The main simulation runner.
///
/// Holds all run state and drives the three-phase tick loop:
///
/// 1. **Interpolate**: resolve every station's position from its schedule.
///    Completes fully (barrier) before any association work starts.
/// 2. **Measure**: build each station's in-range candidate set with RSSI
///    from the propagation model.  Read-only with respect to positions.
/// 3. **Apply**: run the hysteresis evaluator per station, sequentially in
///    ascending `StationId`, appending transitions to the event log.
///
/// Phases 1 and 2 have no cross-station data dependencies and run on
/// Rayon with the `parallel` feature — a dedicated pool sized by
/// `config.num_threads`, or the global pool when unset; phase 3 is always
/// sequential, so the event log is deterministic regardless of thread
/// count.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock — `current_tick` is the next tick to execute.
    pub clock: SimClock,

    /// Read-only station data (names, MACs, schedules).
    pub stations: StationStore,

    /// Resolved positions, refreshed in phase 1 each tick.  Always reflects
    /// the most recently processed tick.
    pub positions: Vec<Point3>,

    /// The read-only AP table.
    pub aps: ApTable,

    /// Shared propagation parameters.
    pub params: PropagationParams,

    /// Deterministic per-link fading source.
    pub fading: FadingRng,

    /// The handover policy.
    pub evaluator: Evaluator,

    /// Per-station association state, indexed by `StationId`.
    pub assoc: Vec<AssociationState>,

    /// The append-only handover audit trail.
    pub log: EventLog,

    /// Dedicated worker pool honoring `config.num_threads`; `None` runs the
    /// parallel phases on Rayon's global pool.
    #[cfg(feature = "parallel")]
    pub pool: Option<rayon::ThreadPool>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            let handovers = self.process_tick(now, observer);
            observer.on_tick_end(now, handovers);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.stations, &self.positions, &self.assoc);
            }

            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping; all recorded state up to
    /// the last completed tick is valid — stopping needs no rollback.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let handovers = self.process_tick(now, observer);
            observer.on_tick_end(now, handovers);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.stations, &self.positions, &self.assoc);
            }
            self.clock.advance();
        }
        Ok(())
    }

    // ── Manual overrides ──────────────────────────────────────────────────

    /// Pin `station` to `ap`, suspending automatic evaluation for it.
    ///
    /// Takes effect at the next processed tick (which emits the handover
    /// event if the association actually changes).
    pub fn force_association(&mut self, station: StationId, ap: ApId) -> SimResult<()> {
        if self.aps.try_get(ap).is_none() {
            return Err(CoreError::ApNotFound(ap).into());
        }
        let state = self
            .assoc
            .get_mut(station.index())
            .ok_or(CoreError::StationNotFound(station))?;
        state.forced = Some(ap);
        Ok(())
    }

    /// Remove a manual override, resuming automatic evaluation from the
    /// station's current state (dwell history intact).
    pub fn clear_override(&mut self, station: StationId) -> SimResult<()> {
        let state = self
            .assoc
            .get_mut(station.index())
            .ok_or(CoreError::StationNotFound(station))?;
        state.forced = None;
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        // ── Phases 1–2: interpolate (barrier), then measure (read-only) ───
        let positions = &mut self.positions;
        let schedules = &self.stations.schedules;
        let aps       = &self.aps;
        let params    = &self.params;
        let fading    = &self.fading;
        let mut phases = move || {
            interpolate_positions(positions, schedules, now);
            build_candidate_sets(positions, aps, params, fading, now)
        };

        #[cfg(feature = "parallel")]
        let candidate_sets = match &self.pool {
            Some(pool) => pool.install(phases),
            None       => phases(),
        };
        #[cfg(not(feature = "parallel"))]
        let candidate_sets = phases();

        // ── Phase 3: apply (sequential, ascending StationId) ──────────────
        let mut handovers = 0;
        for (i, candidates) in candidate_sets.iter().enumerate() {
            let station = StationId(i as u32);
            if let Some(event) =
                self.evaluator
                    .evaluate(station, &mut self.assoc[i], candidates, now)
            {
                self.log.push(event);
                observer.on_handover(&event);
                handovers += 1;
            }
        }
        handovers
    }

    /// The last tick that has been fully processed, or `None` before the
    /// first tick runs.
    pub(crate) fn last_completed_tick(&self) -> Option<Tick> {
        self.clock.current_tick.0.checked_sub(1).map(Tick)
    }
}

// ── Phase helpers ─────────────────────────────────────────────────────────────

fn interpolate_positions(
    positions: &mut [Point3],
    schedules: &[roam_mobility::WaypointSchedule],
    now:       Tick,
) {
    #[cfg(not(feature = "parallel"))]
    {
        for (pos, schedule) in positions.iter_mut().zip(schedules) {
            *pos = schedule.position_at(now);
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        positions
            .par_iter_mut()
            .zip(schedules.par_iter())
            .for_each(|(pos, schedule)| *pos = schedule.position_at(now));
    }
}

/// One station's in-range APs with measured RSSI, ascending `ApId`.
fn candidates_for<'a>(
    station: StationId,
    pos:     Point3,
    aps:     &'a ApTable,
    params:  &PropagationParams,
    fading:  &FadingRng,
    now:     Tick,
) -> Vec<Candidate<'a>> {
    aps.in_range(pos)
        .into_iter()
        .map(|(id, distance)| {
            let ap = aps.get(id);
            Candidate {
                ap:       id,
                rssi_dbm: signal_strength_faded(
                    ap.tx_power_dbm, distance, params, fading, station, id, now,
                ),
                channel:  ap.channel,
                name:     &ap.name,
            }
        })
        .collect()
}

fn build_candidate_sets<'a>(
    positions: &[Point3],
    aps:       &'a ApTable,
    params:    &PropagationParams,
    fading:    &FadingRng,
    now:       Tick,
) -> Vec<Vec<Candidate<'a>>> {
    #[cfg(not(feature = "parallel"))]
    {
        positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| candidates_for(StationId(i as u32), pos, aps, params, fading, now))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        positions
            .par_iter()
            .enumerate()
            .map(|(i, &pos)| candidates_for(StationId(i as u32), pos, aps, params, fading, now))
            .collect()
    }
}
