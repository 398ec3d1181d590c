//! The `OutputWriter` trait implemented by output backends.

use crate::{AgentSnapshotRow, FrameMetricsRow, HuntEventRow, OutputResult};

/// A sink for flock output rows.
///
/// Called from observer hooks, which cannot fail; errors are stored by
/// [`FlockOutputObserver`][crate::FlockOutputObserver] and retrieved with
/// `take_error`.
pub trait OutputWriter {
    /// Write one frame's metrics.
    fn write_frame_metrics(&mut self, row: &FrameMetricsRow) -> OutputResult<()>;

    /// Write a batch of hunt transitions.
    fn write_hunt_events(&mut self, rows: &[HuntEventRow]) -> OutputResult<()>;

    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
