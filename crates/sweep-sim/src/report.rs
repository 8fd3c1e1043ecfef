//! Run metrics derived from simulation output.

use std::collections::BTreeSet;

use sweep_core::Cell;

/// Per-agent outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentReport {
    /// Grid steps the agent actually took.
    pub steps_taken: u64,

    /// Cells on the agent's route (start included).
    pub route_cells: usize,

    /// The cell occupied at each tick, in order.
    pub visited: Vec<Cell>,
}

/// Everything a presentation layer needs about one finished run.
///
/// Plain read-only data; no rendering logic lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    /// The original target set the run was measured against.
    pub targets: BTreeSet<Cell>,

    /// Targets cleaned during the run.
    pub cleaned: BTreeSet<Cell>,

    /// Per-agent outcomes, indexed by `AgentId`.
    pub agents: Vec<AgentReport>,

    /// Ticks the run lasted (including the final no-movement tick).
    pub ticks: u64,
}

impl SimReport {
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn cleaned_count(&self) -> usize {
        self.cleaned.len()
    }

    /// Sum of steps over all agents.
    pub fn total_steps(&self) -> u64 {
        self.agents.iter().map(|a| a.steps_taken).sum()
    }

    /// Cleaned targets per step taken, the headline coverage metric.
    ///
    /// Defined as 0 when no steps were taken (zero-length routes) — a
    /// degenerate run, not a division error.
    pub fn efficiency(&self) -> f64 {
        let steps = self.total_steps();
        if steps == 0 {
            0.0
        } else {
            self.cleaned.len() as f64 / steps as f64
        }
    }

    /// Fraction of targets cleaned, in [0, 1].  Defined as 0 when the run
    /// had no targets.
    pub fn coverage(&self) -> f64 {
        if self.targets.is_empty() {
            0.0
        } else {
            self.cleaned.len() as f64 / self.targets.len() as f64
        }
    }

    /// Targets the run never cleaned — reported explicitly so unreachable
    /// cells are visible, never silently dropped.
    pub fn uncleaned(&self) -> BTreeSet<Cell> {
        self.targets.difference(&self.cleaned).copied().collect()
    }
}
