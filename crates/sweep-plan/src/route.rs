//! Stitching an agent's assigned targets into one continuous route.

use sweep_core::{AgentId, Cell};
use sweep_grid::{GridModel, Planner};

use crate::allocator::Assignment;
use crate::error::{PlanError, PlanResult, ensure_free};

// ── Route ─────────────────────────────────────────────────────────────────────

/// Every grid cell an agent visits, in order, starting at its start cell.
///
/// Read-only input to the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Visited cells in order.  Always holds at least the start cell.
    pub cells: Vec<Cell>,
}

impl Route {
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    pub fn end(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells on the route (start included).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of grid steps — one less than the cell count.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }
}

// ── Route building ────────────────────────────────────────────────────────────

/// Concatenate shortest paths through `targets` (in the given order) into one
/// route beginning at `start`.
///
/// Each leg's first cell is dropped when appending so the pivot cell is not
/// duplicated.  A leg with no path is skipped and the next target is tried
/// from the same position — the same unreachable-target tolerance the
/// allocator applies, so a route may cover fewer targets than it was given.
pub fn build_route<P: Planner>(
    grid:    &GridModel,
    planner: &P,
    start:   Cell,
    targets: &[Cell],
) -> PlanResult<Route> {
    ensure_free(grid, start)?;
    for &target in targets {
        ensure_free(grid, target)?;
    }

    let mut cells = vec![start];
    let mut position = start;
    for &target in targets {
        if let Some(path) = planner.plan(grid, position, target) {
            cells.extend_from_slice(&path.cells[1..]);
            position = target;
        }
    }

    Ok(Route { cells })
}

/// Build one route per agent from an [`Assignment`].
///
/// `starts` must line up with the assignment's agent count — they are the
/// same slice the allocator was given.
pub fn build_routes<P: Planner>(
    grid:       &GridModel,
    planner:    &P,
    starts:     &[Cell],
    assignment: &Assignment,
) -> PlanResult<Vec<Route>> {
    if starts.len() != assignment.agent_count() {
        return Err(PlanError::AgentCountMismatch {
            expected: assignment.agent_count(),
            got:      starts.len(),
        });
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            build_route(grid, planner, start, assignment.targets_for(AgentId(i as u32)))
        })
        .collect()
}
