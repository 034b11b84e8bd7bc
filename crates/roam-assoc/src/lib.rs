//! `roam-assoc` — association decisions, hysteresis, and the handover log.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`state`]     | `LinkState`, `AssociationState` (per-station)            |
//! | [`evaluator`] | `Candidate`, `Evaluator` — the per-tick decision         |
//! | [`event`]     | `HandoverEvent`, append-only `EventLog`                  |
//!
//! # The decision, in brief
//!
//! Each tick a station sees the set of in-range APs with their RSSI.  A
//! naive "always pick max RSSI" policy flaps between APs dozens of times
//! per crossing of an overlap zone, so the evaluator layers two stabilisers
//! on top:
//!
//! - **Hysteresis margin** — a challenger must beat the current AP by more
//!   than `margin_db` to even be considered.
//! - **Dwell time** — the challenger must then stay strictly best for
//!   `dwell_ticks` consecutive ticks before the switch commits.
//!
//! Loss of the current link is exempt from both: when the current AP drops
//! out of range the station switches (or disconnects) immediately.
//!
//! Every transition appends a [`HandoverEvent`] to the [`EventLog`] — the
//! audit trail external harnesses use to reason about connectivity.

pub mod evaluator;
pub mod event;
pub mod state;


pub use evaluator::{Candidate, Evaluator};
pub use event::{EventLog, HandoverEvent};
pub use state::{AssociationState, LinkState, PendingCandidate};
