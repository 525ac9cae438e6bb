use chase_core::{AgentId, NodeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("cannot place an agent on an empty graph")]
    EmptyGraph,

    #[error("start node {0} is not in the graph")]
    UnknownNode(NodeId),

    #[error("agent {0} not found")]
    UnknownAgent(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
