//! Simulation observer trait for progress reporting and data collection.

use sweep_core::{AgentId, Cell, Tick};

/// Callbacks invoked by [`CoverageSim`][crate::CoverageSim] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — cleaning logger
///
/// ```rust,ignore
/// struct CleanLogger;
///
/// impl SimObserver for CleanLogger {
///     fn on_cell_cleaned(&mut self, tick: Tick, agent: AgentId, cell: Cell) {
///         println!("{tick}: {agent} cleaned {cell}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `moved` is the number of agents that advanced along their route this
    /// tick; the simulation halts after the first tick where it is 0.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}

    /// Called when `agent` steps onto an uncleaned target cell.
    ///
    /// Fires at most once per cell — a second agent arriving later has no
    /// additional effect.
    fn on_cell_cleaned(&mut self, _tick: Tick, _agent: AgentId, _cell: Cell) {}

    /// Called once when the run halts (all routes exhausted or cap reached).
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
