//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `SweepError` via `From` impls, or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.  Note that *absence
//! of a path* is never an error anywhere in the engine — unreachable cells
//! are an expected outcome represented as `Option::None`.

use thiserror::Error;

use crate::Cell;

/// The top-level error type for `sweep-core` and a common base for
/// sub-crates.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("cell {0} is out of bounds")]
    OutOfBounds(Cell),

    #[error("cell {0} is blocked by an obstacle")]
    Blocked(Cell),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sweep-*` crates.
pub type SweepResult<T> = Result<T, SweepError>;
