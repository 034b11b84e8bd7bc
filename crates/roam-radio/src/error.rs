use thiserror::Error;

#[derive(Debug, Error)]
pub enum RadioError {
    #[error("access point {ap:?} has non-positive range {range}")]
    NonPositiveRange { ap: String, range: f64 },

    #[error("access point {ap:?} has invalid channel {channel} (valid: 1-14)")]
    InvalidChannel { ap: String, channel: u8 },

    #[error("access point {ap:?} is not at table index {expected}")]
    IdMismatch { ap: String, expected: usize },

    #[error("propagation parameter out of range: {0}")]
    BadParam(String),
}

pub type RadioResult<T> = Result<T, RadioError>;
