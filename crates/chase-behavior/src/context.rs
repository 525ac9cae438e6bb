//! Read-only simulation state passed to every behavior callback.

use chase_core::{AgentId, NodeId, Vector};
use chase_mobility::Body;
use chase_spatial::{Geometry, Graph, TileCoord};

/// A snapshot of one agent as the others perceive it.
///
/// Behaviors never hold references to other agents; they hold `AgentId`s and
/// resolve them against the views in [`SimContext::agents`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentView {
    pub id:           AgentId,
    pub position:     Vector,
    pub target_node:  NodeId,
    pub closest_node: Option<NodeId>,
    pub closest_tile: Option<TileCoord>,
    /// Whether the agent is hunting and currently alert.
    pub is_alert:     bool,
}

impl AgentView {
    /// Snapshot of a body that carries no alertness.
    pub fn of(id: AgentId, body: &Body, graph: &Graph) -> Self {
        let closest_node = body.closest_node(graph);
        Self {
            id,
            position: body.position,
            target_node: body.target_node,
            closest_node,
            closest_tile: closest_node.and_then(|n| graph.node(n)).map(|n| n.coord()),
            is_alert: false,
        }
    }
}

/// The world as seen by the agent being updated.
///
/// Built by the driver before each agent update, so `agents` reflects every
/// agent already moved earlier in the same frame.  No mutable access to the
/// graph is possible while a context is alive.
pub struct SimContext<'a> {
    /// The agent being updated.
    pub agent:    AgentId,
    pub graph:    &'a Graph,
    pub geometry: &'a dyn Geometry,
    /// Views of every agent, sorted by `AgentId`.
    pub agents:   &'a [AgentView],
}

impl<'a> SimContext<'a> {
    #[inline]
    pub fn new(
        agent:    AgentId,
        graph:    &'a Graph,
        geometry: &'a dyn Geometry,
        agents:   &'a [AgentView],
    ) -> Self {
        Self { agent, graph, geometry, agents }
    }

    /// The view of `id`, if such an agent exists.
    pub fn view(&self, id: AgentId) -> Option<&AgentView> {
        self.agents
            .binary_search_by_key(&id, |v| v.id)
            .ok()
            .map(|i| &self.agents[i])
    }

    /// Whether `body` can see agent `other` along its axis of sight.
    pub fn can_see(&self, body: &Body, other: AgentId) -> bool {
        let Some(tile) = self.view(other).and_then(|v| v.closest_tile) else {
            return false;
        };
        body.axis_of_sight(self.graph, self.geometry).can_see(tile)
    }
}
