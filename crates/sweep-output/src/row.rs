//! Plain data row types written by output backends.

use sweep_plan::Assignment;
use sweep_sim::SimReport;

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickLogRow {
    pub tick:          u64,
    /// Agents that advanced along their route this tick.
    pub agents_moved:  u64,
    /// Running total of cleaned cells at the end of the tick.
    pub cleaned_total: u64,
}

/// Per-agent summary written once after the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSummaryRow {
    pub agent_id:       u32,
    pub tasks_assigned: u64,
    /// Cells on the agent's route, start included.
    pub route_cells:    u64,
    pub steps_taken:    u64,
}

impl AgentSummaryRow {
    /// Derive one row per agent from a finished run.
    ///
    /// `assignment` and `report` must come from the same run — their agent
    /// counts line up by construction of the pipeline.
    pub fn from_run(assignment: &Assignment, report: &SimReport) -> Vec<AgentSummaryRow> {
        assignment
            .iter()
            .zip(&report.agents)
            .map(|((agent, tasks), agent_report)| AgentSummaryRow {
                agent_id:       agent.0,
                tasks_assigned: tasks.len() as u64,
                route_cells:    agent_report.route_cells as u64,
                steps_taken:    agent_report.steps_taken,
            })
            .collect()
    }
}
