//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sweep_core::{AgentId, Cell, Tick};
use sweep_sim::SimObserver;

use crate::row::TickLogRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams one [`TickLogRow`] per tick to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error], then recover the writer with
/// [`into_writer`][Self::into_writer] to append the agent summaries.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:        W,
    cleaned_total: u64,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cleaned_total: 0,
            last_error:    None,
        }
    }

    /// Take the stored write error (if any) after the run completes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to write summaries after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_cell_cleaned(&mut self, _tick: Tick, _agent: AgentId, _cell: Cell) {
        self.cleaned_total += 1;
    }

    fn on_tick_end(&mut self, tick: Tick, moved: usize) {
        let row = TickLogRow {
            tick:          tick.0,
            agents_moved:  moved as u64,
            cleaned_total: self.cleaned_total,
        };
        let result = self.writer.write_tick_log(&row);
        self.store_err(result);
    }

    // No on_sim_end override: the caller still needs the writer for the
    // agent summaries, so it calls `finish()` itself once those are written.
}
