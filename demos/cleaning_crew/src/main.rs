//! cleaning_crew — reference demo for the rust_sweep engine.
//!
//! Two cleaning bots on a randomly generated 15×20 grid: plan paths with A*,
//! split the dirty cells greedily, stitch routes, replay them tick by tick,
//! and report coverage efficiency.  Tick logs and per-agent summaries land in
//! `output/cleaning_crew/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sweep_core::Cell;
use sweep_grid::scenario::{ScenarioConfig, generate};
use sweep_grid::AStarPlanner;
use sweep_output::{AgentSummaryRow, CsvWriter, OutputWriter, SimOutputObserver};
use sweep_plan::{GreedyAllocator, build_routes};
use sweep_sim::CoverageSim;

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_H:        u32   = 15;
const GRID_W:        u32   = 20;
const TARGET_COUNT:  usize = 30;
const OBSTACLE_PROB: f64   = 0.08;
const SEED:          u64   = 42;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== cleaning_crew — rust_sweep coverage demo ===");
    println!("Grid: {GRID_H}x{GRID_W}  |  Targets: {TARGET_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Generate the scenario: grid, agent starts, dirty cells.
    let config = ScenarioConfig {
        height:        GRID_H,
        width:         GRID_W,
        obstacle_prob: OBSTACLE_PROB,
        target_count:  TARGET_COUNT,
        agent_starts:  vec![
            Cell::new(0, 0),
            Cell::new(GRID_H as i32 - 1, GRID_W as i32 - 1),
        ],
        seed: SEED,
    };
    let scenario = generate(&config)?;
    println!(
        "Scenario: {} free cells, {} targets, {} agents",
        scenario.grid.free_cells().count(),
        scenario.targets.len(),
        scenario.agent_starts.len()
    );

    // 2. Assign targets greedily, balancing estimated route lengths.
    let allocator = GreedyAllocator::new(AStarPlanner);
    let assignment =
        allocator.assign(&scenario.grid, &scenario.agent_starts, &scenario.targets)?;
    if !assignment.is_complete() {
        println!(
            "Unreachable targets left unassigned: {}",
            assignment.unassigned().len()
        );
    }

    // 3. Stitch each agent's targets into one continuous route.
    let routes = build_routes(
        &scenario.grid,
        &AStarPlanner,
        &scenario.agent_starts,
        &assignment,
    )?;

    // 4. Replay the routes with the tick log streaming to CSV.
    std::fs::create_dir_all("output/cleaning_crew")?;
    let writer = CsvWriter::new(Path::new("output/cleaning_crew"))?;
    let mut obs = SimOutputObserver::new(writer);

    let mut sim = CoverageSim::new(routes, scenario.targets.clone())?;
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    let report = sim.into_report();

    // 5. Append per-agent summaries and close the files.
    let mut writer = obs.into_writer();
    writer.write_agent_summaries(&AgentSummaryRow::from_run(&assignment, &report))?;
    writer.finish()?;

    // 6. Console summary.
    println!("Simulation complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!();
    println!("{:<8} {:<8} {:<12} {:<8}", "Agent", "Tasks", "Route cells", "Steps");
    println!("{}", "-".repeat(38));
    for ((agent, tasks), agent_report) in assignment.iter().zip(&report.agents) {
        println!(
            "{:<8} {:<8} {:<12} {:<8}",
            agent.0,
            tasks.len(),
            agent_report.route_cells,
            agent_report.steps_taken,
        );
    }
    println!();
    println!("Total steps = {}", report.total_steps());
    println!(
        "Cleaned     = {} / {}",
        report.cleaned_count(),
        report.target_count()
    );
    if !report.uncleaned().is_empty() {
        println!("Unreached   = {:?}", report.uncleaned());
    }
    println!("Efficiency  = {:.4}", report.efficiency());

    Ok(())
}
