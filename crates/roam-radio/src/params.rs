//! Propagation parameters shared by every link in a run.

use crate::{RadioError, RadioResult};

/// Read-only, process-wide propagation parameters.
///
/// Defaults mirror the values the emulation scenarios pass to
/// `setPropagationModel`: a log-distance exponent of 3.5, a −91 dBm noise
/// floor, and fading disabled.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PropagationParams {
    /// Path-loss exponent — how fast signal decays with distance.
    /// 2.0 is free space; indoor scenarios use 3–4.
    pub path_loss_exponent: f64,

    /// Loss at the 1-metre reference distance, in dB.
    /// ~40 dB is free-space loss at 1 m for 2.4 GHz.
    pub reference_loss_db: f64,

    /// Receiver noise floor, in dBm.  Reported alongside RSSI so harnesses
    /// can compute SNR; it does not gate range inclusion.
    pub noise_floor_dbm: f64,

    /// Maximum fading depth, in dB.  0 disables fading entirely.
    pub fading_db: f64,
}

impl Default for PropagationParams {
    fn default() -> Self {
        Self {
            path_loss_exponent: 3.5,
            reference_loss_db:  40.0,
            noise_floor_dbm:    -91.0,
            fading_db:          0.0,
        }
    }
}

impl PropagationParams {
    /// Reject parameter sets the model cannot evaluate sensibly.
    pub fn validate(&self) -> RadioResult<()> {
        if self.path_loss_exponent <= 0.0 {
            return Err(RadioError::BadParam(format!(
                "path-loss exponent must be positive, got {}",
                self.path_loss_exponent
            )));
        }
        if self.reference_loss_db < 0.0 {
            return Err(RadioError::BadParam(format!(
                "reference loss must be non-negative, got {}",
                self.reference_loss_db
            )));
        }
        if self.fading_db < 0.0 {
            return Err(RadioError::BadParam(format!(
                "fading depth must be non-negative, got {}",
                self.fading_db
            )));
        }
        Ok(())
    }
}
