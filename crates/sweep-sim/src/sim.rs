//! The `CoverageSim` struct and its tick loop.

use std::collections::BTreeSet;

use sweep_core::{AgentId, Cell, Tick};
use sweep_plan::Route;

use crate::error::{SimError, SimResult};
use crate::observer::SimObserver;
use crate::report::{AgentReport, SimReport};

/// Extra ticks allowed past the longest route before the loop is cut off.
///
/// A deliberate safety margin, not a tuned constant: route replay cannot
/// legitimately take longer than the longest route, so the cap only ever
/// fires if a routing bug produces a stall-free infinite loop.
pub const SAFETY_MARGIN_TICKS: u64 = 200;

// ── Per-agent state ───────────────────────────────────────────────────────────

/// Mutable per-agent replay state.
#[derive(Debug, Clone)]
pub struct AgentProgress {
    /// Index of `current_cell` within the agent's route.
    pub position_index: usize,

    /// Where the agent is right now.
    pub current_cell: Cell,

    /// Grid steps taken so far.
    pub steps_taken: u64,

    /// Every cell occupied at each tick, in order.  Reporting data only —
    /// never consulted for control decisions.
    pub visited: Vec<Cell>,
}

// ── CoverageSim ───────────────────────────────────────────────────────────────

/// Replays one [`Route`] per agent in synchronized ticks and tracks which
/// target cells get cleaned.
///
/// State lives only for the duration of one run; consume it with
/// [`into_report`](Self::into_report) when done.
pub struct CoverageSim {
    routes:  Vec<Route>,
    targets: BTreeSet<Cell>,
    agents:  Vec<AgentProgress>,

    /// Cleaned cells, shared across agents.  First arrival cleans; later
    /// arrivals are no-ops.
    cleaned: BTreeSet<Cell>,

    current_tick: Tick,
    max_ticks:    u64,
    halted:       bool,
}

impl CoverageSim {
    /// Create a simulation over `routes` (one per agent, in `AgentId` order)
    /// and the original target set.
    ///
    /// Every route must hold at least its start cell.
    pub fn new(routes: Vec<Route>, targets: BTreeSet<Cell>) -> SimResult<Self> {
        if routes.is_empty() {
            return Err(SimError::NoAgents);
        }
        for (i, route) in routes.iter().enumerate() {
            if route.cells.is_empty() {
                return Err(SimError::EmptyRoute(AgentId(i as u32)));
            }
        }

        let agents = routes
            .iter()
            .map(|route| AgentProgress {
                position_index: 0,
                current_cell:   route.start(),
                steps_taken:    0,
                visited:        Vec::new(),
            })
            .collect();

        let longest = routes.iter().map(Route::cell_count).max().unwrap_or(0) as u64;

        Ok(Self {
            routes,
            targets,
            agents,
            cleaned: BTreeSet::new(),
            current_tick: Tick::ZERO,
            max_ticks: longest + SAFETY_MARGIN_TICKS,
            halted: false,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance every agent by one synchronized step.
    ///
    /// Returns the number of agents that moved.  The clean-check and the
    /// visited-history append run for every agent every tick, including
    /// agents that have exhausted their route — so a target sitting under a
    /// stationary agent is still cleaned.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.current_tick;
        observer.on_tick_start(now);

        let mut moved = 0;
        for (i, agent) in self.agents.iter_mut().enumerate() {
            let route = &self.routes[i];
            if agent.position_index + 1 < route.cell_count() {
                agent.position_index += 1;
                agent.current_cell = route.cells[agent.position_index];
                agent.steps_taken += 1;
                moved += 1;
            }

            if self.targets.contains(&agent.current_cell)
                && self.cleaned.insert(agent.current_cell)
            {
                observer.on_cell_cleaned(now, AgentId(i as u32), agent.current_cell);
            }

            agent.visited.push(agent.current_cell);
        }

        observer.on_tick_end(now, moved);
        self.current_tick = now + 1;
        moved
    }

    /// Run until the first tick in which no agent advances, or until the
    /// safety cap, whichever comes first.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while !self.halted && self.current_tick.0 < self.max_ticks {
            if self.tick(observer) == 0 {
                self.halted = true;
            }
        }
        self.halted = true;
        observer.on_sim_end(self.current_tick);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Cells cleaned so far.  Always a subset of the original targets and
    /// monotonically non-decreasing tick over tick.
    pub fn cleaned(&self) -> &BTreeSet<Cell> {
        &self.cleaned
    }

    pub fn agents(&self) -> &[AgentProgress] {
        &self.agents
    }

    /// Consume the simulation state into a [`SimReport`].
    pub fn into_report(self) -> SimReport {
        let agents = self
            .agents
            .into_iter()
            .zip(&self.routes)
            .map(|(progress, route)| AgentReport {
                steps_taken: progress.steps_taken,
                route_cells: route.cell_count(),
                visited:     progress.visited,
            })
            .collect();

        SimReport {
            targets: self.targets,
            cleaned: self.cleaned,
            agents,
            ticks: self.current_tick.0,
        }
    }
}
