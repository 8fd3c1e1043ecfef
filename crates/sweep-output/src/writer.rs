//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSummaryRow, OutputResult, TickLogRow};

/// Trait implemented by output backends (CSV today; the seam exists so a
/// database or columnar backend can slot in without touching the observer).
pub trait OutputWriter {
    /// Write one tick-log row.
    fn write_tick_log(&mut self, row: &TickLogRow) -> OutputResult<()>;

    /// Write the per-agent summary rows.
    fn write_agent_summaries(&mut self, rows: &[AgentSummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
