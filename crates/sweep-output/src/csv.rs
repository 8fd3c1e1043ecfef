//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_log.csv`
//! - `agent_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSummaryRow, OutputResult, TickLogRow};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    tick_log:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut tick_log = Writer::from_path(dir.join("tick_log.csv"))?;
        tick_log.write_record(["tick", "agents_moved", "cleaned_total"])?;

        let mut summaries = Writer::from_path(dir.join("agent_summaries.csv"))?;
        summaries.write_record(["agent_id", "tasks_assigned", "route_cells", "steps_taken"])?;

        Ok(Self {
            tick_log,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_log(&mut self, row: &TickLogRow) -> OutputResult<()> {
        self.tick_log.write_record(&[
            row.tick.to_string(),
            row.agents_moved.to_string(),
            row.cleaned_total.to_string(),
        ])?;
        Ok(())
    }

    fn write_agent_summaries(&mut self, rows: &[AgentSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summaries.write_record(&[
                row.agent_id.to_string(),
                row.tasks_assigned.to_string(),
                row.route_cells.to_string(),
                row.steps_taken.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.tick_log.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
