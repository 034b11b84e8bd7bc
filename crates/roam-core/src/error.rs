//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CoreError` via `From` impls, or keep them separate and wrap `CoreError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::{ApId, StationId, Tick};

/// The top-level error type for `roam-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("access point {0} not found")]
    ApNotFound(ApId),

    #[error("query for {queried} is ahead of the last completed tick {completed}")]
    QueryAheadOfTime { queried: Tick, completed: Tick },

    #[error("malformed MAC address: {0:?}")]
    BadMac(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `roam-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
