//! Every agent of a run, indexed by `AgentId`.

use chase_behavior::AgentView;
use chase_core::AgentId;
use chase_spatial::Graph;

use crate::{Agent, AgentBuilder, AgentResult};

/// Agents in ascending id order.  `AgentId(i)` is always at index `i`, so
/// ids double as indices and the update order is the id order.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an agent with the next free id and add it.
    pub fn spawn(&mut self, builder: AgentBuilder, graph: &Graph) -> AgentResult<AgentId> {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(builder.build(id, graph)?);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    /// Snapshot of every agent, sorted by id, as behaviors perceive them.
    pub fn views(&self, graph: &Graph) -> Vec<AgentView> {
        self.agents.iter().map(|a| a.view(graph)).collect()
    }
}
