//! `sweep-sim` — synchronized coverage simulation for the rust_sweep engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..cap:
//!   for each agent (ascending AgentId):
//!     ① Advance — step one cell along the route, if any cells remain.
//!     ② Clean   — mark the current cell cleaned if it is a target
//!                 (idempotent; first arrival wins).
//!     ③ Record  — append the current cell to the visited history.
//!   stop after the first tick in which no agent advanced.
//! ```
//!
//! The cap is `longest route + SAFETY_MARGIN_TICKS` — a defensive bound so a
//! routing bug can never stall the loop forever; normal runs terminate well
//! before it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sweep_sim::{CoverageSim, NoopObserver};
//!
//! let mut sim = CoverageSim::new(routes, targets)?;
//! sim.run(&mut NoopObserver);
//! let report = sim.into_report();
//! println!("efficiency {:.3}", report.efficiency());
//! ```

pub mod error;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{AgentReport, SimReport};
pub use sim::{AgentProgress, CoverageSim, SAFETY_MARGIN_TICKS};
