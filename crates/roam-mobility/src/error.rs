use roam_core::Tick;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("segment {index} is degenerate: stop tick {at} does not follow its start")]
    DegenerateSegment { index: usize, at: Tick },

    #[error("segment {index} starting at {start} overlaps the previous segment (ends at {prev_stop})")]
    OverlappingSegments {
        index:     usize,
        start:     Tick,
        prev_stop: Tick,
    },

    #[error("mobility model parameter out of range: {0}")]
    BadModelParam(String),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
