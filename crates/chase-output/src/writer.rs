//! The `OutputWriter` trait implemented by trace backends.

use crate::{AgentSnapshotRow, FrameSummaryRow, OutputResult};

/// A sink for simulation traces.
///
/// Errors reach the caller through
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error],
/// since observer hooks return nothing.
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
