//! `sweep-output` — run output writers for the rust_sweep engine.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                  | One row per                         |
//! |-----------------------|-------------------------------------|
//! | `tick_log.csv`        | simulation tick                     |
//! | `agent_summaries.csv` | agent, written after the run        |
//!
//! [`SimOutputObserver`] implements `sweep_sim::SimObserver` and streams the
//! tick log while the simulation runs; agent summaries are derived from the
//! finished [`SimReport`][sweep_sim::SimReport] plus the
//! [`Assignment`][sweep_plan::Assignment].
//!
//! # Usage
//!
//! ```rust,ignore
//! use sweep_output::{AgentSummaryRow, CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! let report = sim.into_report();
//!
//! let mut writer = obs.into_writer();
//! writer.write_agent_summaries(&AgentSummaryRow::from_run(&assignment, &report))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSummaryRow, TickLogRow};
pub use writer::OutputWriter;
