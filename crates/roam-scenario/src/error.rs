use roam_mobility::MobilityError;
use roam_radio::RadioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate station name {0:?}")]
    DuplicateStation(String),

    #[error("duplicate access point name {0:?}")]
    DuplicateAp(String),

    #[error("station {station:?}: malformed MAC address {mac:?}")]
    BadMac { station: String, mac: String },

    #[error("station {station:?} declares both explicit waypoints and a mobility model")]
    ConflictingMobility { station: String },

    #[error("station {station:?}: {source}")]
    Mobility {
        station: String,
        source:  MobilityError,
    },

    #[error(transparent)]
    Radio(#[from] RadioError),

    #[error("handover tuning: {0}")]
    Handover(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
