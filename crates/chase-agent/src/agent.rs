//! The `Agent`: a body on the graph driven by one active behavior.

use chase_behavior::{AgentView, Behavior, GroupSearch, Hunt, SimContext, Step};
use chase_core::{AgentId, AgentRng, AgentSettings, Direction, NodeId, Surface, Tick, Vector};
use chase_mobility::{guard_tripped, Body};
use chase_spatial::{AxisOfSight, Geometry, Graph, TileCoord};

use crate::{BehaviorKind, Repertoire};

/// One robot (or the player) in the simulation.
///
/// The agent owns its [`Body`], its RNG and an instance of every behavior.
/// Commands switch the active behavior and reset it; [`update`](Self::update)
/// spends a frame's worth of virtual time on it.
#[derive(Clone, Debug)]
pub struct Agent {
    id:         AgentId,
    body:       Body,
    settings:   AgentSettings,
    /// Drawn size of the agent.
    radius:     f64,
    rng:        AgentRng,
    repertoire: Repertoire,
    kind:       BehaviorKind,
    previous:   BehaviorKind,
}

impl Agent {
    pub(crate) fn new(
        id:       AgentId,
        body:     Body,
        settings: AgentSettings,
        radius:   f64,
        rng:      AgentRng,
    ) -> Self {
        Self {
            id,
            body,
            settings,
            radius,
            rng,
            repertoire: Repertoire::new(settings),
            kind: BehaviorKind::Still,
            previous: BehaviorKind::Still,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn position(&self) -> Vector {
        self.body.position
    }

    pub fn speed(&self) -> f64 {
        self.body.speed
    }

    pub fn kind(&self) -> BehaviorKind {
        self.kind
    }

    pub fn previous_kind(&self) -> BehaviorKind {
        self.previous
    }

    pub fn behavior(&self) -> &dyn Behavior {
        self.repertoire.get(self.kind)
    }

    pub fn behavior_name(&self) -> &'static str {
        self.behavior().name()
    }

    pub fn previous_behavior_name(&self) -> &'static str {
        self.repertoire.get(self.previous).name()
    }

    pub fn repertoire(&self) -> &Repertoire {
        &self.repertoire
    }

    pub fn hunt_state(&self) -> &Hunt {
        &self.repertoire.hunt
    }

    pub fn group_search_state(&self) -> &GroupSearch {
        &self.repertoire.group_search
    }

    /// Alert while hunting (alone or in a squad) and not strolling.
    pub fn is_alert(&self) -> bool {
        match self.kind {
            BehaviorKind::Hunt => self.repertoire.hunt.is_alert(),
            BehaviorKind::GroupSearch => self.repertoire.group_search.is_alert(),
            _ => false,
        }
    }

    /// How the other agents perceive this one.
    pub fn view(&self, graph: &Graph) -> AgentView {
        AgentView { is_alert: self.is_alert(), ..AgentView::of(self.id, &self.body, graph) }
    }

    // ── Senses ────────────────────────────────────────────────────────────

    pub fn facing(&self) -> Option<Direction> {
        self.body.facing_direction()
    }

    pub fn look_at(&mut self, point: Vector) {
        self.body.look_at(point);
    }

    /// Face the center of `node`.  Unknown nodes are ignored.
    pub fn look_at_node(&mut self, graph: &Graph, node: NodeId) {
        if let Some(center) = graph.center(node) {
            self.body.look_at(center);
        }
    }

    pub fn closest_node(&self, graph: &Graph) -> Option<NodeId> {
        self.body.closest_node(graph)
    }

    pub fn closest_tile(&self, graph: &Graph) -> Option<TileCoord> {
        self.body.closest_tile(graph)
    }

    pub fn axis_of_sight(&self, graph: &Graph, geometry: &dyn Geometry) -> AxisOfSight {
        self.body.axis_of_sight(graph, geometry)
    }

    pub fn can_see(&self, other: &Agent, graph: &Graph, geometry: &dyn Geometry) -> bool {
        other
            .closest_tile(graph)
            .is_some_and(|tile| self.axis_of_sight(graph, geometry).can_see(tile))
    }

    // ── Speed ─────────────────────────────────────────────────────────────

    pub fn walk(&mut self) {
        self.body.speed = self.settings.walk_speed;
    }

    pub fn run(&mut self) {
        self.body.speed = self.settings.run_speed;
    }

    // ── Commands ──────────────────────────────────────────────────────────

    fn switch_to(&mut self, kind: BehaviorKind) {
        if kind != self.kind {
            log::debug!(
                "agent {}: {} -> {}",
                self.id,
                self.behavior_name(),
                self.repertoire.get(kind).name()
            );
        }
        self.previous = self.kind;
        self.kind = kind;
    }

    pub fn stay_put(&mut self) {
        self.switch_to(BehaviorKind::Still);
    }

    pub fn random_walk(&mut self) {
        self.switch_to(BehaviorKind::RandomWalk);
        self.repertoire.random_walk.reset();
        self.walk();
    }

    /// Walk a shortest path to `node`.
    pub fn walk_to(&mut self, node: NodeId, ctx: &SimContext<'_>) {
        self.walk();
        self.switch_to(BehaviorKind::FollowPath);
        self.repertoire.follow_path.reset(&mut self.body, ctx, &mut self.rng, node);
    }

    /// Run a shortest path to `node`.
    pub fn run_to(&mut self, node: NodeId, ctx: &SimContext<'_>) {
        self.walk_to(node, ctx);
        self.run();
    }

    /// Chase `target` at the current speed, re-planning as it moves.
    pub fn follow(&mut self, target: AgentId, ctx: &SimContext<'_>) {
        self.switch_to(BehaviorKind::Follow);
        self.repertoire.follow.reset(&mut self.body, ctx, &mut self.rng, target);
    }

    pub fn walk_to_intersection(&mut self) {
        self.switch_to(BehaviorKind::ToIntersection);
        self.repertoire.to_intersection.reset();
        self.walk();
    }

    pub fn wait(&mut self) {
        self.switch_to(BehaviorKind::Wait);
        self.repertoire.wait.reset();
    }

    /// Look down every edge of the closest node except the one just used.
    pub fn look_around(&mut self, ctx: &SimContext<'_>) {
        self.switch_to(BehaviorKind::LookAround);
        let visited = self.body.inverse_edge(ctx.graph).into_iter().collect();
        self.repertoire
            .look_around
            .reset(&mut self.body, ctx, &mut self.rng, None, visited);
    }

    pub fn patrol(&mut self) {
        self.switch_to(BehaviorKind::Patrol);
        self.repertoire.patrol.reset();
        self.run();
    }

    pub fn hunt(&mut self, target: AgentId) {
        self.switch_to(BehaviorKind::Hunt);
        self.repertoire.hunt.reset(&mut self.body, target);
    }

    /// Hunt `target` as one of a squad.  `friends` may include this agent;
    /// it is ignored.
    pub fn search_for(&mut self, target: AgentId, friends: Vec<AgentId>) {
        self.switch_to(BehaviorKind::GroupSearch);
        self.repertoire.group_search.reset(&mut self.body, target, friends);
    }

    // ── Update ────────────────────────────────────────────────────────────

    /// Spend `elapsed_ms` of virtual time on the active behavior.
    ///
    /// Leftover time after a node is reached carries over to the next edge,
    /// or to whatever behavior the completion policy picks, until the
    /// iteration guard trips.
    pub fn update(&mut self, ctx: &SimContext<'_>, elapsed_ms: f64) {
        let mut tick = Tick::new(elapsed_ms);
        loop {
            if guard_tripped(tick, self.behavior_name()) {
                return;
            }
            let step = self
                .repertoire
                .get_mut(self.kind)
                .update(&mut self.body, ctx, &mut self.rng, tick);
            match step {
                Step::Settled => return,
                Step::Continue(next) => tick = next,
                Step::Done(next) => {
                    self.on_finished(ctx);
                    tick = next;
                }
            }
        }
    }

    /// What to do once the active behavior runs out.
    fn on_finished(&mut self, ctx: &SimContext<'_>) {
        match self.kind {
            BehaviorKind::FollowPath => self.stay_put(),
            BehaviorKind::Follow if self.repertoire.follow.target().is_some() => {
                self.repertoire.follow.replan(&mut self.body, ctx, &mut self.rng);
            }
            BehaviorKind::ToIntersection => self.look_around(ctx),
            BehaviorKind::LookAround => {
                self.walk_to_intersection();
                self.repertoire.to_intersection.reset_moving_on();
            }
            BehaviorKind::Wait => self.random_walk(),
            other => {
                log::debug!("agent {}: {other:?} finished unexpectedly", self.id);
                self.stay_put();
            }
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────

    /// Sight axis, then whatever the behavior plans, then the agent itself.
    pub fn draw(&self, ctx: &SimContext<'_>, surface: &mut dyn Surface) {
        self.axis_of_sight(ctx.graph, ctx.geometry).draw(surface);
        self.behavior().draw(&self.body, ctx, surface);
        surface.point(self.body.position, self.radius);
    }
}
