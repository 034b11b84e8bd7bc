//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AssociationSnapshotRow, HandoverEventRow, OutputResult};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
pub trait OutputWriter {
    /// Write a batch of handover events.
    fn write_events(&mut self, rows: &[HandoverEventRow]) -> OutputResult<()>;

    /// Write a batch of association snapshots.
    fn write_snapshots(&mut self, rows: &[AssociationSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
