use chase_agent::AgentError;
use chase_core::{AgentId, ChaseError};
use chase_spatial::{SpatialError, TileCoord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] ChaseError),

    #[error("start tile {0} is blocked or outside the grid")]
    BadStart(TileCoord),

    #[error("agent {0} not found")]
    UnknownAgent(AgentId),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("map error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type SimResult<T> = Result<T, SimError>;
