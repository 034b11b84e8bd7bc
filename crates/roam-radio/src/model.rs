//! The log-distance signal-strength model.

use roam_core::{ApId, FadingRng, StationId, Tick};

use crate::PropagationParams;

/// Distances below this are clamped before the log — a station standing on
/// an AP sees the 1-metre reference loss, not +∞ signal.
pub const DISTANCE_FLOOR: f64 = 1.0;

/// Received signal strength in dBm for a transmitter at `tx_power_dbm`
/// heard over `distance` metres.
///
/// Strictly decreasing in `distance` (above the floor) for fixed power and
/// parameters.  Pure — no fading, no range cutoff.
#[inline]
pub fn signal_strength(tx_power_dbm: f64, distance: f64, params: &PropagationParams) -> f64 {
    let d = distance.max(DISTANCE_FLOOR);
    let path_loss = params.reference_loss_db + 10.0 * params.path_loss_exponent * d.log10();
    tx_power_dbm - path_loss
}

/// [`signal_strength`] with the per-link fading term applied.
///
/// Fading subtracts `draw · fading_db` where `draw ∈ [0, 1)` comes from the
/// deterministic `(station, ap, tick)`-keyed stream, so the fade is bounded
/// by `params.fading_db` and reproducible across runs.
#[inline]
pub fn signal_strength_faded(
    tx_power_dbm: f64,
    distance:     f64,
    params:       &PropagationParams,
    fading:       &FadingRng,
    station:      StationId,
    ap:           ApId,
    tick:         Tick,
) -> f64 {
    let base = signal_strength(tx_power_dbm, distance, params);
    if params.fading_db == 0.0 {
        return base;
    }
    base - fading.draw(station, ap, tick) * params.fading_db
}
