//! Greedy, load-balanced assignment of targets to agents.
//!
//! # Algorithm
//!
//! The allocator tracks an *estimated position* (initially the start cell)
//! and an *estimated cumulative path length* (initially 0) per agent.  Each
//! round it scores every remaining (target, agent) pair as
//!
//! ```text
//! score = est_len[agent] + steps(est_pos[agent] → target)
//! ```
//!
//! and commits the single pair with the globally minimum score — across all
//! targets and all agents, not just the best target for one agent.  This is
//! the load-balancing mechanism: an agent that has accumulated a long route
//! scores worse on every pair and stops winning assignments until the others
//! catch up.
//!
//! The full rescan of every pair each round is O(T²·A) planner queries and
//! is the dominant cost of the whole engine.  It is the reference behavior:
//! the assignment *order* it produces is part of the contract, so no
//! incremental shortcut (cached scores, priority queues) may replace it
//! without proving the output order unchanged.
//!
//! # Determinism
//!
//! Ties on score are broken by lowest target (row-major cell order), then
//! lowest agent id, via tuple `min` on `(score, target, agent)`.  The
//! `parallel` feature moves scoring onto Rayon's pool but keeps this same
//! reduction, so both paths produce identical assignments.

use std::collections::BTreeSet;

use sweep_core::{AgentId, Cell};
use sweep_grid::{GridModel, Planner};

use crate::error::{PlanError, PlanResult, ensure_free};

// ── Assignment ────────────────────────────────────────────────────────────────

/// The allocator's output: per-agent ordered target lists plus the targets
/// no agent could reach.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Targets per agent, in visit order.  Indexed by `AgentId`.
    per_agent: Vec<Vec<Cell>>,

    /// Targets unreachable from every agent.  Never silently dropped —
    /// callers decide whether a non-empty set is acceptable.
    unassigned: BTreeSet<Cell>,
}

impl Assignment {
    pub fn agent_count(&self) -> usize {
        self.per_agent.len()
    }

    /// The targets assigned to `agent`, in visit order.
    pub fn targets_for(&self, agent: AgentId) -> &[Cell] {
        &self.per_agent[agent.index()]
    }

    /// Iterator over `(agent, targets)` pairs in ascending agent order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &[Cell])> + '_ {
        self.per_agent
            .iter()
            .enumerate()
            .map(|(i, targets)| (AgentId(i as u32), targets.as_slice()))
    }

    /// Targets that could not be assigned to any agent.
    pub fn unassigned(&self) -> &BTreeSet<Cell> {
        &self.unassigned
    }

    /// Total number of assigned targets across all agents.
    pub fn assigned_count(&self) -> usize {
        self.per_agent.iter().map(Vec::len).sum()
    }

    /// `true` if every input target was assigned to some agent.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }
}

// ── GreedyAllocator ───────────────────────────────────────────────────────────

/// The reference greedy allocator, generic over the path planner.
pub struct GreedyAllocator<P: Planner> {
    planner: P,
}

impl<P: Planner> GreedyAllocator<P> {
    pub fn new(planner: P) -> Self {
        Self { planner }
    }

    /// Partition `targets` among agents starting at `starts`.
    ///
    /// Fails fast if `starts` is empty or any start/target cell is blocked
    /// or out of bounds — those are caller contract violations, distinct
    /// from the expected no-path case.
    pub fn assign(
        &self,
        grid:    &GridModel,
        starts:  &[Cell],
        targets: &BTreeSet<Cell>,
    ) -> PlanResult<Assignment> {
        if starts.is_empty() {
            return Err(PlanError::NoAgents);
        }
        for &start in starts {
            ensure_free(grid, start)?;
        }
        for &target in targets {
            ensure_free(grid, target)?;
        }

        let agent_count = starts.len();
        let mut est_pos: Vec<Cell> = starts.to_vec();
        let mut est_len: Vec<u32> = vec![0; agent_count];
        let mut per_agent: Vec<Vec<Cell>> = vec![Vec::new(); agent_count];
        let mut remaining = targets.clone();

        while !remaining.is_empty() {
            let Some((score, target, agent)) =
                self.best_candidate(grid, &remaining, &est_pos, &est_len)
            else {
                // Every remaining target is unreachable from every agent.
                break;
            };

            per_agent[agent].push(target);
            est_pos[agent] = target;
            est_len[agent] = score;
            remaining.remove(&target);
        }

        Ok(Assignment {
            per_agent,
            unassigned: remaining,
        })
    }

    /// The `(score, target, agent)` tuple with the global minimum score this
    /// round, or `None` if no pair has a path.  Tuple `min` gives the pinned
    /// tie-break: lowest score, then lowest target, then lowest agent.
    #[cfg(not(feature = "parallel"))]
    fn best_candidate(
        &self,
        grid:      &GridModel,
        remaining: &BTreeSet<Cell>,
        est_pos:   &[Cell],
        est_len:   &[u32],
    ) -> Option<(u32, Cell, usize)> {
        let planner = &self.planner;
        remaining
            .iter()
            .flat_map(|&target| {
                est_pos.iter().enumerate().filter_map(move |(agent, &pos)| {
                    planner
                        .plan(grid, pos, target)
                        .map(|path| (est_len[agent] + path.steps(), target, agent))
                })
            })
            .min()
    }

    /// Parallel variant: independent planner queries fan out over Rayon's
    /// pool; the read-only grid is shared and the `min` reduction is the
    /// same deterministic tuple ordering as the sequential path.
    #[cfg(feature = "parallel")]
    fn best_candidate(
        &self,
        grid:      &GridModel,
        remaining: &BTreeSet<Cell>,
        est_pos:   &[Cell],
        est_len:   &[u32],
    ) -> Option<(u32, Cell, usize)> {
        use rayon::prelude::*;

        let planner = &self.planner;
        remaining
            .par_iter()
            .flat_map_iter(|&target| {
                est_pos.iter().enumerate().filter_map(move |(agent, &pos)| {
                    planner
                        .plan(grid, pos, target)
                        .map(|path| (est_len[agent] + path.steps(), target, agent))
                })
            })
            .min()
    }
}
