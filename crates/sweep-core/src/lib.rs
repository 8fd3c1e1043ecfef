//! `sweep-core` — foundational types for the `rust_sweep` coverage-planning
//! engine.
//!
//! This crate is a dependency of every other `sweep-*` crate.  It
//! intentionally has no `sweep-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                    |
//! |-----------|---------------------------------------------|
//! | [`cell`]  | `Cell`, Manhattan distance                  |
//! | [`ids`]   | `AgentId`                                   |
//! | [`tick`]  | `Tick`                                      |
//! | [`rng`]   | `ScenarioRng` (seeded, deterministic)       |
//! | [`error`] | `SweepError`, `SweepResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{SweepError, SweepResult};
pub use ids::AgentId;
pub use rng::ScenarioRng;
pub use tick::Tick;
