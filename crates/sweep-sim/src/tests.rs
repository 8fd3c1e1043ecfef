//! Unit and pipeline tests for sweep-sim.

#[cfg(test)]
mod helpers {
    use std::collections::BTreeSet;

    use sweep_core::Cell;
    use sweep_plan::Route;

    pub fn route(cells: &[(i32, i32)]) -> Route {
        Route {
            cells: cells.iter().map(|&(r, c)| Cell::new(r, c)).collect(),
        }
    }

    pub fn targets(cells: &[(i32, i32)]) -> BTreeSet<Cell> {
        cells.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use sweep_core::AgentId;

    use crate::{CoverageSim, SimError};

    use super::helpers::{route, targets};

    #[test]
    fn no_routes_is_an_error() {
        let result = CoverageSim::new(vec![], targets(&[]));
        assert!(matches!(result, Err(SimError::NoAgents)));
    }

    #[test]
    fn empty_route_is_an_error() {
        let routes = vec![route(&[(0, 0)]), route(&[])];
        let result = CoverageSim::new(routes, targets(&[]));
        assert!(matches!(result, Err(SimError::EmptyRoute(AgentId(1)))));
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ticks {
    use sweep_core::{AgentId, Cell, Tick};

    use crate::{CoverageSim, NoopObserver, SAFETY_MARGIN_TICKS, SimObserver};

    use super::helpers::{route, targets};

    #[test]
    fn straight_route_replay() {
        // Single agent, single target 3 steps away: route of 4 cells,
        // cleaned on arrival, efficiency 1/3.
        let routes = vec![route(&[(0, 0), (0, 1), (0, 2), (0, 3)])];
        let mut sim = CoverageSim::new(routes, targets(&[(0, 3)])).unwrap();
        sim.run(&mut NoopObserver);

        let report = sim.into_report();
        assert_eq!(report.ticks, 4); // 3 movement ticks + 1 halt tick
        assert_eq!(report.total_steps(), 3);
        assert_eq!(report.cleaned, targets(&[(0, 3)]));
        assert!((report.efficiency() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn stationary_agent_cleans_its_start_cell() {
        // The clean-check runs even on the final no-movement tick, so a
        // target under a never-moving agent is still cleaned.
        let routes = vec![route(&[(0, 0)])];
        let mut sim = CoverageSim::new(routes, targets(&[(0, 0)])).unwrap();
        sim.run(&mut NoopObserver);

        let report = sim.into_report();
        assert_eq!(report.ticks, 1);
        assert_eq!(report.cleaned, targets(&[(0, 0)]));
        assert_eq!(report.total_steps(), 0);
        // Degenerate metric: zero steps means efficiency 0, not a panic.
        assert_eq!(report.efficiency(), 0.0);
    }

    #[test]
    fn cleaned_is_monotonic_subset() {
        let routes = vec![route(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)])];
        let tgts = targets(&[(0, 1), (0, 3)]);
        let mut sim = CoverageSim::new(routes, tgts.clone()).unwrap();

        let mut last_len = 0;
        while !sim.is_halted() && sim.tick(&mut NoopObserver) > 0 {
            assert!(sim.cleaned().is_subset(&tgts));
            assert!(sim.cleaned().len() >= last_len, "cleaned set shrank");
            last_len = sim.cleaned().len();
        }
        assert_eq!(sim.cleaned(), &tgts);
    }

    /// Records every `on_cell_cleaned` event.
    struct CleanRecorder(Vec<(Tick, AgentId, Cell)>);
    impl SimObserver for CleanRecorder {
        fn on_cell_cleaned(&mut self, tick: Tick, agent: AgentId, cell: Cell) {
            self.0.push((tick, agent, cell));
        }
    }

    #[test]
    fn first_arrival_cleans_later_arrival_is_noop() {
        // Agent 0 reaches (0,1) on tick 0; agent 1 crosses it on tick 1.
        let routes = vec![
            route(&[(0, 0), (0, 1)]),
            route(&[(0, 3), (0, 2), (0, 1)]),
        ];
        let mut sim = CoverageSim::new(routes, targets(&[(0, 1)])).unwrap();
        let mut recorder = CleanRecorder(Vec::new());
        sim.run(&mut recorder);

        assert_eq!(recorder.0.len(), 1, "cell cleaned exactly once");
        let (tick, agent, cell) = recorder.0[0];
        assert_eq!(tick, Tick(0));
        assert_eq!(agent, AgentId(0));
        assert_eq!(cell, Cell::new(0, 1));
        assert_eq!(sim.cleaned().len(), 1);
    }

    #[test]
    fn visited_history_grows_every_tick() {
        // Agent 0 never moves; agent 1 walks two cells.  Both histories get
        // one entry per tick, including the final no-movement tick.
        let routes = vec![
            route(&[(1, 1)]),
            route(&[(0, 0), (0, 1), (0, 2)]),
        ];
        let mut sim = CoverageSim::new(routes, targets(&[])).unwrap();
        sim.run(&mut NoopObserver);

        let report = sim.into_report();
        assert_eq!(report.ticks, 3);
        assert_eq!(
            report.agents[0].visited,
            vec![Cell::new(1, 1); 3],
            "stationary agent logs its cell every tick"
        );
        assert_eq!(
            report.agents[1].visited,
            vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 2)]
        );
    }

    #[test]
    fn run_stays_under_safety_cap() {
        let routes = vec![
            route(&[(0, 0), (0, 1), (0, 2)]),
            route(&[(5, 5)]),
        ];
        let longest = 3u64;
        let mut sim = CoverageSim::new(routes, targets(&[])).unwrap();
        sim.run(&mut NoopObserver);
        assert!(sim.is_halted());
        assert!(sim.current_tick().0 <= longest + SAFETY_MARGIN_TICKS);
    }

    /// Counts observer invocations.
    #[derive(Default)]
    struct HookCounter {
        starts: usize,
        ends:   usize,
        fins:   usize,
    }
    impl SimObserver for HookCounter {
        fn on_tick_start(&mut self, _t: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _t: Tick, _m: usize) {
            self.ends += 1;
        }
        fn on_sim_end(&mut self, _t: Tick) {
            self.fins += 1;
        }
    }

    #[test]
    fn observer_called_once_per_tick() {
        let routes = vec![route(&[(0, 0), (0, 1), (0, 2), (0, 3)])];
        let mut sim = CoverageSim::new(routes, targets(&[])).unwrap();
        let mut counter = HookCounter::default();
        sim.run(&mut counter);

        assert_eq!(counter.starts, 4);
        assert_eq!(counter.ends, 4);
        assert_eq!(counter.fins, 1);
    }
}

// ── Metrics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use crate::{CoverageSim, NoopObserver};

    use super::helpers::{route, targets};

    #[test]
    fn efficiency_within_unit_interval() {
        let routes = vec![route(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)])];
        let mut sim = CoverageSim::new(routes, targets(&[(0, 2), (0, 4)])).unwrap();
        sim.run(&mut NoopObserver);
        let report = sim.into_report();

        assert!(report.total_steps() > 0);
        let eff = report.efficiency();
        assert!((0.0..=1.0).contains(&eff), "efficiency {eff} out of range");
    }

    #[test]
    fn coverage_zero_without_targets() {
        let routes = vec![route(&[(0, 0), (0, 1)])];
        let mut sim = CoverageSim::new(routes, targets(&[])).unwrap();
        sim.run(&mut NoopObserver);
        let report = sim.into_report();
        assert_eq!(report.coverage(), 0.0);
        assert_eq!(report.efficiency(), 0.0);
    }

    #[test]
    fn uncleaned_targets_reported() {
        // (5,5) is never visited; it must show up in uncleaned(), not vanish.
        let routes = vec![route(&[(0, 0), (0, 1)])];
        let mut sim = CoverageSim::new(routes, targets(&[(0, 1), (5, 5)])).unwrap();
        sim.run(&mut NoopObserver);
        let report = sim.into_report();

        assert_eq!(report.cleaned, targets(&[(0, 1)]));
        assert_eq!(report.uncleaned(), targets(&[(5, 5)]));
        assert!((report.coverage() - 0.5).abs() < 1e-12);
    }
}

// ── Full pipeline ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline {
    use sweep_core::{AgentId, Cell};
    use sweep_grid::scenario::{ScenarioConfig, generate};
    use sweep_grid::{AStarPlanner, GridBuilder, GridModel};
    use sweep_plan::{GreedyAllocator, build_routes};

    use crate::{CoverageSim, NoopObserver};

    use super::helpers::targets;

    #[test]
    fn reference_five_by_five() {
        // The canonical end-to-end check: 5×5 open grid, one agent, one
        // target 3 steps away.
        let grid = GridModel::open(5, 5);
        let starts = [Cell::new(0, 0)];
        let tgts = targets(&[(0, 3)]);

        let assignment = GreedyAllocator::new(AStarPlanner)
            .assign(&grid, &starts, &tgts)
            .unwrap();
        assert_eq!(assignment.targets_for(AgentId(0)), &[Cell::new(0, 3)]);

        let routes = build_routes(&grid, &AStarPlanner, &starts, &assignment).unwrap();
        assert_eq!(routes[0].cell_count(), 4);

        let mut sim = CoverageSim::new(routes, tgts.clone()).unwrap();
        sim.run(&mut NoopObserver);
        let report = sim.into_report();

        assert_eq!(report.cleaned, tgts);
        assert!((report.efficiency() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn enclosed_target_never_cleaned() {
        let mut b = GridBuilder::new(5, 5);
        b.obstacle(Cell::new(1, 2));
        b.obstacle(Cell::new(3, 2));
        b.obstacle(Cell::new(2, 1));
        b.obstacle(Cell::new(2, 3));
        let grid = b.build();

        let starts = [Cell::new(0, 0), Cell::new(4, 4)];
        let tgts = targets(&[(2, 2), (0, 3), (4, 1)]);

        let assignment = GreedyAllocator::new(AStarPlanner)
            .assign(&grid, &starts, &tgts)
            .unwrap();
        assert_eq!(assignment.unassigned(), &targets(&[(2, 2)]));

        let routes = build_routes(&grid, &AStarPlanner, &starts, &assignment).unwrap();
        let mut sim = CoverageSim::new(routes, tgts).unwrap();
        sim.run(&mut NoopObserver);
        let report = sim.into_report();

        assert!(!report.cleaned.contains(&Cell::new(2, 2)));
        assert!(report.uncleaned().contains(&Cell::new(2, 2)));
        assert_eq!(report.cleaned, targets(&[(0, 3), (4, 1)]));
    }

    #[test]
    fn generated_scenario_invariants() {
        // The reference random scenario, end to end: every assigned target
        // gets cleaned, every unassigned target stays dirty, efficiency is
        // a sane fraction.
        let scenario = generate(&ScenarioConfig::default()).unwrap();
        let allocator = GreedyAllocator::new(AStarPlanner);
        let assignment = allocator
            .assign(&scenario.grid, &scenario.agent_starts, &scenario.targets)
            .unwrap();
        let routes = build_routes(
            &scenario.grid,
            &AStarPlanner,
            &scenario.agent_starts,
            &assignment,
        )
        .unwrap();

        let mut sim = CoverageSim::new(routes, scenario.targets.clone()).unwrap();
        sim.run(&mut NoopObserver);
        let report = sim.into_report();

        assert!(report.cleaned.is_subset(&scenario.targets));
        assert_eq!(report.cleaned_count(), assignment.assigned_count());
        assert_eq!(&report.uncleaned(), assignment.unassigned());
        if report.total_steps() > 0 {
            assert!((0.0..=1.0).contains(&report.efficiency()));
        }
    }
}
