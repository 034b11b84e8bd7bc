//! `roam-radio` — access points and the radio propagation model.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ap`]     | `AccessPoint`, `ApTable` (validated, r-tree indexed)       |
//! | [`params`] | `PropagationParams` with script-matching defaults          |
//! | [`model`]  | `signal_strength`, deterministic fading                    |
//! | [`error`]  | `RadioError`, `RadioResult<T>`                             |
//!
//! # Propagation model
//!
//! The log-distance path-loss model used by the emulation scenarios:
//!
//! ```text
//! rssi = tx_power − (reference_loss + 10 · exponent · log10(max(d, 1.0)))
//! ```
//!
//! The 1-metre distance floor prevents a singularity when a station stands
//! on top of an AP.  For fixed parameters the model is strictly decreasing
//! in distance.
//!
//! An AP's nominal `range` is a **hard cutoff layered on top** of the
//! continuous model (matching `range=NN` in the scenarios): a pair whose
//! distance exceeds the range is never an association candidate, whatever
//! its computed RSSI.
//!
//! Optional fading subtracts a bounded draw keyed by `(station, ap, tick)`
//! so repeated runs with the same seed reproduce identical RSSI sequences.

pub mod ap;
pub mod error;
pub mod model;
pub mod params;

#[cfg(test)]
mod tests;

pub use ap::{AccessPoint, ApTable};
pub use error::{RadioError, RadioResult};
pub use model::{DISTANCE_FLOOR, signal_strength, signal_strength_faded};
pub use params::PropagationParams;
