//! Fluent builder for a single [`Agent`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use chase_agent::{AgentBuilder, AgentStore};
//! use chase_core::AgentSettings;
//!
//! let mut agents = AgentStore::new();
//! let player = agents.spawn(
//!     AgentBuilder::new(/*seed=*/ 42).start(node).radius(16.0),
//!     &graph,
//! )?;
//! let robot = agents.spawn(
//!     AgentBuilder::new(42).settings(AgentSettings::with_speeds(0.04, 0.09)),
//!     &graph,
//! )?;
//! ```

use chase_core::{AgentId, AgentRng, AgentSettings, NodeId};
use chase_mobility::Body;
use chase_spatial::Graph;

use crate::{Agent, AgentError, AgentResult};

/// Drawn radius when none is given.
pub const DEFAULT_RADIUS: f64 = 8.0;

/// Fluent builder for [`Agent`].
///
/// The agent starts resting on its start node (the graph root unless set),
/// walking speed selected and the `still` behavior active.
#[derive(Clone, Debug)]
pub struct AgentBuilder {
    seed:     u64,
    settings: AgentSettings,
    radius:   f64,
    start:    Option<NodeId>,
}

impl AgentBuilder {
    /// `seed` is the run's global seed; it is mixed with the agent id.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            settings: AgentSettings::default(),
            radius:   DEFAULT_RADIUS,
            start:    None,
        }
    }

    pub fn settings(mut self, settings: AgentSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn start(mut self, node: NodeId) -> Self {
        self.start = Some(node);
        self
    }

    /// Place the agent on `graph` under `id`.
    pub fn build(self, id: AgentId, graph: &Graph) -> AgentResult<Agent> {
        let node = match self.start {
            Some(node) => node,
            None => graph.root().ok_or(AgentError::EmptyGraph)?,
        };
        let center = graph.center(node).ok_or(AgentError::UnknownNode(node))?;

        let body = Body::new(node, center, self.settings.walk_speed);
        let rng = AgentRng::new(self.seed, id);
        Ok(Agent::new(id, body, self.settings, self.radius, rng))
    }
}
