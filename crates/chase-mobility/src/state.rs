//! Per-agent kinematic state.

use chase_core::{Direction, EdgeId, NodeId, Vector};
use chase_spatial::{AxisOfSight, Geometry, Graph, TileCoord};

/// The continuous movement state of a single agent.
///
/// A body is anchored to the graph by two nodes: `last_node`, the node it
/// most recently stood on, and `target_node`, the node it is heading to.
/// `target_point` is normally the center of `target_node`'s tile.
///
/// The facing is tracked separately from the velocity.  Setting a target
/// faces the body toward it, and [`look_at`](Self::look_at) can turn it
/// elsewhere without changing where it walks.  A zero facing is never
/// stored, so orientation queries stay stable while the body is at rest.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub position:     Vector,
    /// Distance units per millisecond.
    pub speed:        f64,
    pub last_node:    NodeId,
    pub target_node:  NodeId,
    /// The edge being walked to reach `target_node`, if any.
    pub current_edge: Option<EdgeId>,
    pub target_point: Vector,
    facing:           Vector,
}

impl Body {
    /// A body resting on `node`, whose center is `center`.
    pub fn new(node: NodeId, center: Vector, speed: f64) -> Self {
        Self {
            position:     center,
            speed,
            last_node:    node,
            target_node:  node,
            current_edge: None,
            target_point: center,
            facing:       Vector::ZERO,
        }
    }

    /// Place the body on `node`: snap onto its center and make it the last
    /// node.  Unknown nodes only update `last_node`.
    pub fn set_node(&mut self, graph: &Graph, node: NodeId) {
        if let Some(center) = graph.center(node) {
            self.position = center;
        }
        self.last_node = node;
    }

    /// Head for `node`.  Without an explicit `edge` the edge from `last_node`
    /// is looked up; it is `None` when the two are not adjacent.
    pub fn set_target(&mut self, graph: &Graph, node: NodeId, edge: Option<EdgeId>) {
        self.target_node = node;
        if let Some(center) = graph.center(node) {
            self.target_point = center;
        }
        self.current_edge = edge.or_else(|| graph.edge_to(self.last_node, node));
        self.turn_to(self.target_point - self.position);
    }

    /// Face `point` without changing the target.
    pub fn look_at(&mut self, point: Vector) {
        self.turn_to(point - self.position);
    }

    fn turn_to(&mut self, direction: Vector) {
        let unit = direction.normalize();
        if unit.is_finite() && !unit.is_zero() {
            self.facing = unit;
        }
    }

    /// The last non-zero facing as a unit vector, [`Vector::ZERO`] before the
    /// body ever turned.
    pub fn facing(&self) -> Vector {
        self.facing
    }

    /// The cardinal direction of the facing, if it is close enough to one.
    pub fn facing_direction(&self) -> Option<Direction> {
        Direction::from_facing(self.facing)
    }

    /// Remaining displacement to `target_point`.
    pub fn target_vector(&self) -> Vector {
        self.target_point - self.position
    }

    /// `true` when the body stands exactly on its target point.
    pub fn at_target(&self) -> bool {
        self.target_vector().is_zero()
    }

    pub fn velocity(&self) -> Vector {
        self.target_vector().normalize() * self.speed
    }

    /// The edge leading back the way the body came.
    pub fn inverse_edge(&self, graph: &Graph) -> Option<EdgeId> {
        self.current_edge.and_then(|e| graph.inverse(e))
    }

    /// The node whose tile contains the body.
    pub fn closest_node(&self, graph: &Graph) -> Option<NodeId> {
        graph.find(self.position)
    }

    pub fn closest_tile(&self, graph: &Graph) -> Option<TileCoord> {
        self.closest_node(graph)
            .and_then(|n| graph.node(n))
            .map(|n| n.coord())
    }

    /// What the body sees from its tile along its facing.
    pub fn axis_of_sight(&self, graph: &Graph, geometry: &dyn Geometry) -> AxisOfSight {
        AxisOfSight::new(geometry, self.closest_tile(graph), self.facing_direction())
    }
}
