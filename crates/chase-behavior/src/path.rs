//! Walking a planned path, to a fixed node or after a moving agent.

use chase_core::{AgentId, AgentRng, NodeId, Surface, Tick};
use chase_mobility::Body;

use crate::{locomote, Behavior, SimContext, Step, Transition};

const PATH_RADIUS: f64 = 6.0;

// ── FollowPath ────────────────────────────────────────────────────────────────

/// Walk a shortest path computed once on [`reset`](Self::reset).
///
/// The head of `path` is always the body's current target node; it is
/// popped on arrival.  The behavior finishes when the path runs out.
#[derive(Clone, Debug, Default)]
pub struct FollowPath {
    path: Vec<NodeId>,
}

impl FollowPath {
    /// Plan a path from the body's target node to `goal`.
    ///
    /// If the path doubles back through the node the body just left, the body
    /// turns around on the spot.  If the body already stands on the first
    /// node, it heads straight for the second.
    pub fn reset(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng, goal: NodeId) {
        let graph = ctx.graph;
        self.path = graph.find_path(body.target_node, goal, rng.inner());

        if self.path.len() < 2 {
            return;
        }
        if body.last_node == self.path[1] {
            body.last_node = self.path.remove(0);
            body.set_target(graph, self.path[0], None);
        }

        if self.path.len() < 2 {
            return;
        }
        if body.at_target() {
            body.last_node = self.path.remove(0);
            body.set_target(graph, self.path[0], None);
        }
    }

    /// Remaining nodes, head first.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// `true` when there is at most one node left to visit.
    pub fn is_trivial(&self) -> bool {
        self.path.len() < 2
    }

    pub fn goal(&self) -> Option<NodeId> {
        self.path.last().copied()
    }
}

impl Behavior for FollowPath {
    fn name(&self) -> &'static str {
        "path"
    }

    fn update(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng, tick: Tick) -> Step {
        locomote(self, body, ctx, rng, tick)
    }

    fn set_new_target(&mut self, body: &mut Body, ctx: &SimContext<'_>, _rng: &mut AgentRng) -> Transition {
        if self.path.is_empty() {
            return Transition::Finished;
        }
        let reached = self.path.remove(0);
        body.set_node(ctx.graph, reached);
        match self.path.first() {
            Some(&next) => {
                body.set_target(ctx.graph, next, None);
                Transition::Advanced
            }
            None => {
                body.set_target(ctx.graph, reached, None);
                Transition::Finished
            }
        }
    }

    fn draw(&self, _body: &Body, ctx: &SimContext<'_>, surface: &mut dyn Surface) {
        let mut prev = None;
        for center in self.path.iter().filter_map(|&n| ctx.graph.center(n)) {
            if let Some(p) = prev {
                surface.line(p, center);
            }
            surface.point(center, PATH_RADIUS);
            prev = Some(center);
        }
    }
}

// ── Follow ────────────────────────────────────────────────────────────────────

/// Chase a moving agent, re-planning whenever its closest node changes.
#[derive(Clone, Debug, Default)]
pub struct Follow {
    target:      Option<AgentId>,
    target_node: Option<NodeId>,
    follow_path: FollowPath,
}

impl Follow {
    pub fn reset(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng, target: AgentId) {
        self.target = Some(target);
        self.target_node = ctx.view(target).and_then(|v| v.closest_node);
        if let Some(node) = self.target_node {
            self.follow_path.reset(body, ctx, rng, node);
        }
    }

    /// Plan again toward the same agent.
    pub fn replan(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) {
        if let Some(target) = self.target {
            self.reset(body, ctx, rng, target);
        }
    }

    pub fn target(&self) -> Option<AgentId> {
        self.target
    }

    /// The node currently being walked to.
    pub fn goal(&self) -> Option<NodeId> {
        self.follow_path.goal()
    }
}

impl Behavior for Follow {
    fn name(&self) -> &'static str {
        "follow"
    }

    fn update(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng, tick: Tick) -> Step {
        let Some(target) = self.target else {
            return Step::Settled;
        };
        let node = ctx.view(target).and_then(|v| v.closest_node);
        if node != self.target_node {
            self.target_node = node;
            if let Some(node) = node {
                self.follow_path.reset(body, ctx, rng, node);
            }
        }

        // Caught up: wait for the target to move instead of re-planning the
        // same one-node path over and over.
        if self.follow_path.is_trivial() && body.at_target() {
            return Step::Settled;
        }
        self.follow_path.update(body, ctx, rng, tick)
    }

    fn set_new_target(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) -> Transition {
        self.follow_path.set_new_target(body, ctx, rng)
    }

    fn draw(&self, body: &Body, ctx: &SimContext<'_>, surface: &mut dyn Surface) {
        self.follow_path.draw(body, ctx, surface);
    }
}
