//! Per-station association state.

use roam_core::{ApId, Tick};

// ── LinkState ─────────────────────────────────────────────────────────────────

/// Whether a station currently holds a link, and to which AP.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkState {
    Disconnected,
    Associated {
        ap:       ApId,
        /// Signal measured at the last evaluation, in dBm.  `None` when the
        /// link has no measurement — a station forced onto an out-of-range AP.
        rssi_dbm: Option<f64>,
        /// Tick at which this association began.
        since:    Tick,
    },
}

impl LinkState {
    /// The associated AP, or `None` when disconnected.
    #[inline]
    pub fn ap(&self) -> Option<ApId> {
        match *self {
            LinkState::Associated { ap, .. } => Some(ap),
            LinkState::Disconnected          => None,
        }
    }
}

// ── AssociationState ──────────────────────────────────────────────────────────

/// Dwell bookkeeping for a challenger AP that has started out-performing the
/// current link.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingCandidate {
    pub ap: ApId,
    /// Consecutive ticks `ap` has been the strict best beyond the margin.
    pub best_ticks: u64,
}

/// The full evaluator-owned state for one station.
///
/// One instance per station, created at load, mutated only during that
/// station's evaluation step, retained until simulation end.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociationState {
    pub link:    LinkState,
    /// Challenger currently accumulating dwell ticks, if any.
    pub pending: Option<PendingCandidate>,
    /// Manual override: while set, automatic evaluation is suspended and the
    /// station holds this AP.  Dwell history is preserved underneath.
    pub forced:  Option<ApId>,
}

impl AssociationState {
    pub fn new() -> Self {
        Self {
            link:    LinkState::Disconnected,
            pending: None,
            forced:  None,
        }
    }

    /// The currently associated AP, if any.
    #[inline]
    pub fn current_ap(&self) -> Option<ApId> {
        self.link.ap()
    }
}

impl Default for AssociationState {
    fn default() -> Self {
        Self::new()
    }
}
