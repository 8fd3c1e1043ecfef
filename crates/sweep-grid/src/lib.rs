//! `sweep-grid` — grid world model, path planning, and scenario generation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`grid`]     | `GridModel`, `GridBuilder`, `CellState`           |
//! | [`astar`]    | `Planner` trait, `GridPath`, `AStarPlanner`       |
//! | [`scenario`] | `ScenarioConfig`, `Scenario`, seeded generation   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                            |
//! |---------|---------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod astar;
pub mod grid;
pub mod scenario;


pub use astar::{AStarPlanner, GridPath, Planner};
pub use grid::{CellState, GridBuilder, GridModel};
pub use scenario::{Scenario, ScenarioConfig, generate};
