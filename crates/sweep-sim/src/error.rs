use thiserror::Error;

use sweep_core::AgentId;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("no routes supplied")]
    NoAgents,

    #[error("route for agent {0} is empty")]
    EmptyRoute(AgentId),
}

pub type SimResult<T> = Result<T, SimError>;
