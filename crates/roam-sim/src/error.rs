use roam_core::CoreError;
use roam_radio::RadioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Radio(#[from] RadioError),
}

pub type SimResult<T> = Result<T, SimError>;
