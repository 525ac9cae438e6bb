//! Behaviors driven by accumulated virtual time rather than movement.

use chase_core::{AgentRng, EdgeId, NodeId, Tick};
use chase_mobility::Body;

use crate::{Behavior, SimContext, Step};

// ── LookAround ────────────────────────────────────────────────────────────────

/// Stand on a node and look down each of its edges in random order, one
/// every `look_wait_ms`, then finish.
#[derive(Clone, Debug)]
pub struct LookAround {
    look_wait_ms: f64,
    node:         Option<NodeId>,
    time_ms:      f64,
    visited:      Vec<EdgeId>,
}

impl LookAround {
    pub fn new(look_wait_ms: f64) -> Self {
        Self { look_wait_ms, node: None, time_ms: 0.0, visited: Vec::new() }
    }

    /// Start looking around `node` (the body's closest node when `None`).
    /// Edges in `visited` count as already looked at.
    pub fn reset(
        &mut self,
        body:    &mut Body,
        ctx:     &SimContext<'_>,
        rng:     &mut AgentRng,
        node:    Option<NodeId>,
        visited: Vec<EdgeId>,
    ) {
        self.node = node.or_else(|| body.closest_node(ctx.graph));
        self.visited = visited;
        self.look_elsewhere(body, ctx, rng);
    }

    fn look_elsewhere(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) {
        self.time_ms = 0.0;
        let Some(node) = self.node else {
            return;
        };
        // A dead end has nothing new to look at; look back the way we came.
        let Some(edge) = ctx
            .graph
            .random_edge(node, &self.visited, rng.inner())
            .or_else(|| ctx.graph.random_edge(node, &[], rng.inner()))
        else {
            return;
        };
        if !self.visited.contains(&edge) {
            self.visited.push(edge);
        }
        if let Some(to) = ctx.graph.edge(edge).and_then(|e| ctx.graph.center(e.to)) {
            body.look_at(to);
        }
    }

    fn all_visited(&self, ctx: &SimContext<'_>) -> bool {
        self.node.is_none_or(|n| {
            ctx.graph.edges_of(n).all(|(id, _)| self.visited.contains(&id))
        })
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn visited(&self) -> &[EdgeId] {
        &self.visited
    }
}

impl Behavior for LookAround {
    fn name(&self) -> &'static str {
        "lookAround"
    }

    fn update(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng, tick: Tick) -> Step {
        let edgeless = self.node.is_none_or(|n| ctx.graph.edges_of(n).next().is_none());
        if edgeless {
            return Step::Done(tick.carry(tick.elapsed_ms));
        }

        self.time_ms += tick.elapsed_ms;
        if self.time_ms <= self.look_wait_ms {
            return Step::Settled;
        }
        let over = self.time_ms - self.look_wait_ms;

        if self.all_visited(ctx) {
            self.time_ms = 0.0;
            return Step::Done(tick.carry(over));
        }
        self.look_elsewhere(body, ctx, rng);
        Step::Continue(tick.carry(over))
    }
}

// ── Wait ──────────────────────────────────────────────────────────────────────

/// Do nothing for `alert_wait_ms`, then finish.
#[derive(Clone, Debug)]
pub struct Wait {
    alert_wait_ms: f64,
    time_ms:       f64,
}

impl Wait {
    pub fn new(alert_wait_ms: f64) -> Self {
        Self { alert_wait_ms, time_ms: 0.0 }
    }

    pub fn reset(&mut self) {
        self.time_ms = 0.0;
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.time_ms
    }
}

impl Behavior for Wait {
    fn name(&self) -> &'static str {
        "wait"
    }

    fn update(&mut self, _body: &mut Body, _ctx: &SimContext<'_>, _rng: &mut AgentRng, tick: Tick) -> Step {
        self.time_ms += tick.elapsed_ms;
        if self.time_ms <= self.alert_wait_ms {
            return Step::Settled;
        }
        let over = self.time_ms - self.alert_wait_ms;
        self.time_ms = 0.0;
        Step::Done(tick.carry(over))
    }
}
