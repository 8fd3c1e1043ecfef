//! Seeded scenario generation: a grid, agent starts, and a target set.
//!
//! Everything the pipeline needs for one run is produced here from an
//! explicit [`ScenarioConfig`].  All randomness flows through one
//! [`ScenarioRng`] seeded from the config — the same seed always yields the
//! same grid, the same targets, and therefore the same assignment and
//! simulation outcome.

use std::collections::BTreeSet;

use sweep_core::{Cell, ScenarioRng, SweepError, SweepResult};

use crate::grid::{GridBuilder, GridModel};

// ── ScenarioConfig ────────────────────────────────────────────────────────────

/// Parameters for one generated scenario.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Grid height in cells.
    pub height: u32,

    /// Grid width in cells.
    pub width: u32,

    /// Probability that any one cell is an obstacle.
    pub obstacle_prob: f64,

    /// Number of target ("dirty") cells to sample.  Capped at the number of
    /// free cells actually available.
    pub target_count: usize,

    /// One start cell per agent.  Force-cleared to Free after obstacle
    /// placement, so a start is always traversable.
    pub agent_starts: Vec<Cell>,

    /// Master RNG seed.  The same seed always produces identical scenarios.
    pub seed: u64,
}

impl Default for ScenarioConfig {
    /// The reference scenario: 15×20 grid, 8 % obstacles, 30 targets, two
    /// agents at opposite corners.
    fn default() -> Self {
        Self {
            height:        15,
            width:         20,
            obstacle_prob: 0.08,
            target_count:  30,
            agent_starts:  vec![Cell::new(0, 0), Cell::new(14, 19)],
            seed:          42,
        }
    }
}

impl ScenarioConfig {
    /// Check that the config describes a generable scenario.
    pub fn validate(&self) -> SweepResult<()> {
        if self.height == 0 || self.width == 0 {
            return Err(SweepError::Config(format!(
                "grid dimensions must be nonzero, got {}x{}",
                self.height, self.width
            )));
        }
        if !(0.0..=1.0).contains(&self.obstacle_prob) {
            return Err(SweepError::Config(format!(
                "obstacle probability must be in [0, 1], got {}",
                self.obstacle_prob
            )));
        }
        if self.agent_starts.is_empty() {
            return Err(SweepError::Config(
                "at least one agent start is required".into(),
            ));
        }
        for &start in &self.agent_starts {
            let in_bounds = start.row >= 0
                && start.col >= 0
                && (start.row as u32) < self.height
                && (start.col as u32) < self.width;
            if !in_bounds {
                return Err(SweepError::OutOfBounds(start));
            }
        }
        Ok(())
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A generated world: the inputs to the allocate → route → simulate pipeline.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub grid:         GridModel,
    pub agent_starts: Vec<Cell>,
    pub targets:      BTreeSet<Cell>,
}

/// Generate a scenario from `config`.
///
/// Obstacles are rolled cell by cell in row-major order, agent starts are
/// then cleared, and targets are sampled uniformly without replacement from
/// the remaining free cells (agent starts excluded).
pub fn generate(config: &ScenarioConfig) -> SweepResult<Scenario> {
    config.validate()?;

    let mut rng = ScenarioRng::new(config.seed);

    let mut builder = GridBuilder::new(config.height, config.width);
    for row in 0..config.height as i32 {
        for col in 0..config.width as i32 {
            if rng.gen_bool(config.obstacle_prob) {
                builder.obstacle(Cell::new(row, col));
            }
        }
    }
    for &start in &config.agent_starts {
        builder.clear(start);
    }
    let grid = builder.build();

    let free: Vec<Cell> = grid
        .free_cells()
        .filter(|c| !config.agent_starts.contains(c))
        .collect();
    let count = config.target_count.min(free.len());
    let targets: BTreeSet<Cell> = rng.sample(&free, count).into_iter().collect();

    Ok(Scenario {
        grid,
        agent_starts: config.agent_starts.clone(),
        targets,
    })
}
