//! Wandering over the graph one random edge at a time.

use chase_core::{AgentRng, Tick};
use chase_mobility::Body;
use chase_spatial::Graph;

use crate::{locomote, Behavior, SimContext, Step, Transition};

/// Take a random edge out of the body's target node.
///
/// The edge leading straight back is avoided unless it is the only one.
fn step_randomly(body: &mut Body, graph: &Graph, rng: &mut AgentRng) -> Transition {
    let inverse = body.inverse_edge(graph);
    let except: &[_] = match &inverse {
        Some(e) => std::slice::from_ref(e),
        None => &[],
    };
    let Some(edge_id) = graph
        .random_edge(body.target_node, except, rng.inner())
        .or(inverse)
    else {
        return Transition::Stalled;
    };
    let Some(edge) = graph.edge(edge_id).copied() else {
        return Transition::Stalled;
    };

    let reached = body.target_node;
    body.set_node(graph, reached);
    body.set_target(graph, edge.to, Some(edge_id));
    Transition::Advanced
}

// ── RandomWalk ────────────────────────────────────────────────────────────────

/// Walk forever, choosing a random edge at every node.
#[derive(Clone, Debug, Default)]
pub struct RandomWalk;

impl RandomWalk {
    /// Nothing to forget between activations.
    pub fn reset(&mut self) {}
}

impl Behavior for RandomWalk {
    fn name(&self) -> &'static str {
        "random"
    }

    fn update(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng, tick: Tick) -> Step {
        locomote(self, body, ctx, rng, tick)
    }

    fn set_new_target(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) -> Transition {
        step_randomly(body, ctx.graph, rng)
    }
}

// ── ToIntersection ────────────────────────────────────────────────────────────

/// Walk randomly until standing on an intersection, then finish.
#[derive(Clone, Debug, Default)]
pub struct ToIntersection {
    moving_on: bool,
}

impl ToIntersection {
    /// Finish right away if already standing on an intersection.
    pub fn reset(&mut self) {
        self.moving_on = false;
    }

    /// Take at least one step before stopping, so an agent that has just
    /// looked around an intersection walks on to the next one.
    pub fn reset_moving_on(&mut self) {
        self.moving_on = true;
    }
}

impl Behavior for ToIntersection {
    fn name(&self) -> &'static str {
        "toIntersection"
    }

    fn update(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng, tick: Tick) -> Step {
        locomote(self, body, ctx, rng, tick)
    }

    fn set_new_target(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) -> Transition {
        let here = body.closest_node(ctx.graph);
        if !self.moving_on && here.is_some_and(|n| ctx.graph.is_intersection(n)) {
            return Transition::Finished;
        }
        let transition = step_randomly(body, ctx.graph, rng);
        if transition == Transition::Advanced {
            self.moving_on = false;
        }
        transition
    }
}
