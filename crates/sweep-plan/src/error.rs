//! Planning-subsystem error type.
//!
//! Only *precondition violations* are errors here.  A target that merely has
//! no path to any agent is an expected outcome and lands in
//! [`Assignment::unassigned`][crate::Assignment::unassigned] instead.

use thiserror::Error;

use sweep_core::Cell;
use sweep_grid::GridModel;

/// Errors produced by `sweep-plan`.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no agent starts supplied")]
    NoAgents,

    #[error("cell {0} is out of bounds")]
    OutOfBounds(Cell),

    #[error("cell {0} is blocked by an obstacle")]
    Blocked(Cell),

    #[error("start list length {got} does not match assignment agent count {expected}")]
    AgentCountMismatch { expected: usize, got: usize },
}

/// Shorthand result type for `sweep-plan`.
pub type PlanResult<T> = Result<T, PlanError>;

/// Precondition check shared by the allocator and the route builder: a start
/// or target cell must be in bounds and Free.
pub(crate) fn ensure_free(grid: &GridModel, cell: Cell) -> PlanResult<()> {
    if !grid.in_bounds(cell) {
        return Err(PlanError::OutOfBounds(cell));
    }
    if !grid.is_free(cell) {
        return Err(PlanError::Blocked(cell));
    }
    Ok(())
}
