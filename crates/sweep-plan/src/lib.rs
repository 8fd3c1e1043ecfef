//! `sweep-plan` — greedy task assignment and route building.
//!
//! # Crate layout
//!
//! | Module        | Contents                                       |
//! |---------------|------------------------------------------------|
//! | [`allocator`] | `GreedyAllocator`, `Assignment`                |
//! | [`route`]     | `Route`, `build_route`, `build_routes`         |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                   |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Scores allocator candidates on Rayon's thread pool.     |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.      |

pub mod allocator;
pub mod error;
pub mod route;


pub use allocator::{Assignment, GreedyAllocator};
pub use error::{PlanError, PlanResult};
pub use route::{Route, build_route, build_routes};
