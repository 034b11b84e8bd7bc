//! The per-tick association decision.

use roam_core::{StationId, Tick};

use crate::event::HandoverEvent;
use crate::state::{AssociationState, LinkState, PendingCandidate};

// ── Candidate ─────────────────────────────────────────────────────────────────

/// One in-range AP as seen by a station this tick.
///
/// Borrowed fields (`name`) point into the AP table; candidates only live
/// for one evaluation call.
#[derive(Copy, Clone, Debug)]
pub struct Candidate<'a> {
    pub ap:       roam_core::ApId,
    pub rssi_dbm: f64,
    pub channel:  u8,
    pub name:     &'a str,
}

/// `true` when `a` beats `b` under the deterministic ordering: higher RSSI,
/// then lower channel, then lexicographically smaller name.
fn beats(a: &Candidate<'_>, b: &Candidate<'_>) -> bool {
    if a.rssi_dbm != b.rssi_dbm {
        return a.rssi_dbm > b.rssi_dbm;
    }
    if a.channel != b.channel {
        return a.channel < b.channel;
    }
    a.name < b.name
}

// ── Evaluator ─────────────────────────────────────────────────────────────────

/// The hysteresis + dwell handover policy.
///
/// Stateless itself — all per-station state lives in [`AssociationState`].
/// `margin_db = 0` and `dwell_ticks = 0` degrade to plain best-RSSI
/// selection (still tie-break stable, still non-flapping for symmetric
/// inputs).
#[derive(Copy, Clone, Debug)]
pub struct Evaluator {
    /// RSSI advantage a challenger must exceed over the current AP.
    pub margin_db:   f64,
    /// Consecutive strict-best ticks required before a switch commits.
    pub dwell_ticks: u64,
}

impl Evaluator {
    pub fn new(margin_db: f64, dwell_ticks: u64) -> Self {
        Self { margin_db, dwell_ticks }
    }

    /// Run one evaluation step for `station`.
    ///
    /// `candidates` is the station's in-range RSSI set for this tick, in
    /// ascending `ApId` order.  Mutates `state` in place and returns the
    /// transition event, if one occurred.
    ///
    /// A manual override suspends the automatic policy entirely: the station
    /// holds the forced AP and dwell bookkeeping is left untouched, so
    /// clearing the override resumes evaluation from where it left off.
    pub fn evaluate(
        &self,
        station:    StationId,
        state:      &mut AssociationState,
        candidates: &[Candidate<'_>],
        now:        Tick,
    ) -> Option<HandoverEvent> {
        if let Some(forced) = state.forced {
            return self.hold_forced(station, state, candidates, forced, now);
        }

        // Step 1: nothing in range → disconnect.
        let Some(best) = best_candidate(candidates) else {
            return self.disconnect(station, state, now);
        };

        match state.link {
            // Step 3: a disconnected station takes the best AP immediately.
            LinkState::Disconnected => {
                state.pending = None;
                Some(self.switch_to(station, state, None, best, now))
            }

            LinkState::Associated { ap: current, .. } => {
                match candidates.iter().find(|c| c.ap == current) {
                    // Step 5: current AP gone — switch now, no dwell.
                    None => {
                        state.pending = None;
                        Some(self.switch_to(station, state, Some(current), best, now))
                    }
                    Some(current_cand) => {
                        self.challenge(station, state, *current_cand, best, now)
                    }
                }
            }
        }
    }

    // Step 4: current AP still in range; apply hysteresis and dwell.
    fn challenge(
        &self,
        station: StationId,
        state:   &mut AssociationState,
        current: Candidate<'_>,
        best:    &Candidate<'_>,
        now:     Tick,
    ) -> Option<HandoverEvent> {
        // Refresh the measured RSSI of the held link.
        if let LinkState::Associated { rssi_dbm, .. } = &mut state.link {
            *rssi_dbm = Some(current.rssi_dbm);
        }

        let qualifies = best.ap != current.ap
            && best.rssi_dbm > current.rssi_dbm + self.margin_db;

        if !qualifies {
            // Within the margin (or the current AP is itself best): the
            // consecutive-best chain is broken.
            state.pending = None;
            return None;
        }

        let best_ticks = match state.pending {
            Some(p) if p.ap == best.ap => p.best_ticks + 1,
            _                          => 1,
        };

        if best_ticks >= self.dwell_ticks.max(1) {
            state.pending = None;
            return Some(self.switch_to(station, state, Some(current.ap), best, now));
        }

        state.pending = Some(PendingCandidate { ap: best.ap, best_ticks });
        None
    }

    fn hold_forced(
        &self,
        station:    StationId,
        state:      &mut AssociationState,
        candidates: &[Candidate<'_>],
        forced:     roam_core::ApId,
        now:        Tick,
    ) -> Option<HandoverEvent> {
        let previous = state.current_ap();
        if previous == Some(forced) {
            return None;
        }
        // The forced AP may be out of range — the override wins regardless,
        // but only a real measurement is recorded.
        let rssi = candidates.iter().find(|c| c.ap == forced).map(|c| c.rssi_dbm);
        state.link = LinkState::Associated {
            ap:       forced,
            rssi_dbm: rssi,
            since:    now,
        };
        Some(HandoverEvent {
            tick: now,
            station,
            from: previous,
            to: Some(forced),
            rssi_dbm: rssi,
        })
    }

    fn disconnect(
        &self,
        station: StationId,
        state:   &mut AssociationState,
        now:     Tick,
    ) -> Option<HandoverEvent> {
        state.pending = None;
        let previous = state.current_ap()?;
        state.link = LinkState::Disconnected;
        Some(HandoverEvent {
            tick:     now,
            station,
            from:     Some(previous),
            to:       None,
            rssi_dbm: None,
        })
    }

    fn switch_to(
        &self,
        station:  StationId,
        state:    &mut AssociationState,
        previous: Option<roam_core::ApId>,
        best:     &Candidate<'_>,
        now:      Tick,
    ) -> HandoverEvent {
        state.link = LinkState::Associated {
            ap:       best.ap,
            rssi_dbm: Some(best.rssi_dbm),
            since:    now,
        };
        HandoverEvent {
            tick:     now,
            station,
            from:     previous,
            to:       Some(best.ap),
            rssi_dbm: Some(best.rssi_dbm),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Step 2: the deterministic best of the candidate set.
fn best_candidate<'a, 'c>(candidates: &'a [Candidate<'c>]) -> Option<&'a Candidate<'c>> {
    let mut best: Option<&Candidate<'_>> = None;
    for c in candidates {
        match best {
            None => best = Some(c),
            Some(b) if beats(c, b) => best = Some(c),
            Some(_) => {}
        }
    }
    best
}
