//! Hunting a single target agent.
//!
//! A hunter strolls until it sees its target, freezes for a moment, then runs
//! to where it last saw it.  If the target slips out of sight the hunter keeps
//! running to that spot, walks on to the next intersection, looks around,
//! and finally gives up and goes back to strolling.
//!
//! ```text
//!  strollAround ──sees──▶ justSpotted ──wait──▶ chaseVisible ◀──sees──┐
//!       ▲                                        │      │             │
//!       │                                  lost  │      │ arrived     │
//!     wait                                       ▼      ▼             │
//!    giveUp ◀──done── lookAround ◀── chaseToIntersection ◀── chaseAroundCorner
//! ```

use chase_core::{AgentId, AgentRng, AgentSettings, NodeId, Surface, Tick};
use chase_mobility::Body;

use crate::{
    Behavior, FollowPath, LookAround, RandomWalk, SimContext, Step, ToIntersection, Transition,
    Wait,
};

/// The sub-state of a [`Hunt`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HuntMode {
    StrollAround,
    JustSpotted,
    ChaseVisible,
    ChaseAroundCorner,
    ChaseToIntersection,
    LookAround,
    GiveUp,
}

impl HuntMode {
    pub const ALL: [HuntMode; 7] = [
        HuntMode::StrollAround,
        HuntMode::JustSpotted,
        HuntMode::ChaseVisible,
        HuntMode::ChaseAroundCorner,
        HuntMode::ChaseToIntersection,
        HuntMode::LookAround,
        HuntMode::GiveUp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HuntMode::StrollAround => "strollAround",
            HuntMode::JustSpotted => "justSpotted",
            HuntMode::ChaseVisible => "chaseVisible",
            HuntMode::ChaseAroundCorner => "chaseAroundCorner",
            HuntMode::ChaseToIntersection => "chaseToIntersection",
            HuntMode::LookAround => "lookAround",
            HuntMode::GiveUp => "giveUp",
        }
    }

    /// Anything but strolling or giving up.
    pub fn is_alert(self) -> bool {
        !matches!(self, HuntMode::StrollAround | HuntMode::GiveUp)
    }

    pub fn is_chasing(self) -> bool {
        matches!(
            self,
            HuntMode::ChaseVisible
                | HuntMode::ChaseAroundCorner
                | HuntMode::ChaseToIntersection
                | HuntMode::LookAround
        )
    }
}

impl std::fmt::Display for HuntMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search for, spot and chase one target agent.
#[derive(Clone, Debug)]
pub struct Hunt {
    settings:              AgentSettings,
    target:                Option<AgentId>,
    last_seen:             Option<NodeId>,
    mode:                  HuntMode,
    stroll_around:         RandomWalk,
    just_spotted:          Wait,
    chase_visible:         FollowPath,
    chase_around_corner:   FollowPath,
    chase_to_intersection: ToIntersection,
    look_around:           LookAround,
    give_up:               Wait,
}

impl Hunt {
    pub fn new(settings: AgentSettings) -> Self {
        Self {
            settings,
            target:                None,
            last_seen:             None,
            mode:                  HuntMode::StrollAround,
            stroll_around:         RandomWalk,
            just_spotted:          Wait::new(settings.alert_wait_ms),
            chase_visible:         FollowPath::default(),
            chase_around_corner:   FollowPath::default(),
            chase_to_intersection: ToIntersection::default(),
            look_around:           LookAround::new(settings.look_wait_ms),
            give_up:               Wait::new(settings.alert_wait_ms),
        }
    }

    /// Start hunting `target` from scratch, strolling.
    pub fn reset(&mut self, body: &mut Body, target: AgentId) {
        self.target = Some(target);
        self.last_seen = None;
        self.be_cool(body);
    }

    pub fn target(&self) -> Option<AgentId> {
        self.target
    }

    pub fn mode(&self) -> HuntMode {
        self.mode
    }

    pub fn mode_name(&self) -> &'static str {
        self.mode.as_str()
    }

    pub fn is_alert(&self) -> bool {
        self.mode.is_alert()
    }

    pub fn is_chasing(&self) -> bool {
        self.mode.is_chasing()
    }

    /// The node the target was last seen on or heading to.
    pub fn last_seen(&self) -> Option<NodeId> {
        self.last_seen
    }

    /// Look for the target and remember where it was if it is visible.
    pub fn can_see_target(&mut self, body: &Body, ctx: &SimContext<'_>) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if !ctx.can_see(body, target) {
            return false;
        }
        if let Some(view) = ctx.view(target) {
            let heading = Some(view.target_node).filter(|&n| ctx.graph.node(n).is_some());
            self.last_seen = heading.or(view.closest_node).or(self.last_seen);
        }
        true
    }

    /// Skip straight to the chase if the target is in sight.
    pub fn chase(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) {
        if self.can_see_target(body, ctx) {
            self.chase_last_seen(body, ctx, rng);
        }
    }

    // ── Mode switches ─────────────────────────────────────────────────────

    fn switch(&mut self, mode: HuntMode) {
        if mode != self.mode {
            log::debug!("hunt: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    fn be_cool(&mut self, body: &mut Body) {
        body.speed = self.settings.walk_speed;
        self.switch(HuntMode::StrollAround);
        self.stroll_around.reset();
    }

    fn just_spotted(&mut self) {
        self.switch(HuntMode::JustSpotted);
        self.just_spotted.reset();
    }

    fn chase_last_seen(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) {
        body.speed = self.settings.run_speed;
        self.switch(HuntMode::ChaseVisible);
        if let Some(node) = self.last_seen {
            self.chase_visible.reset(body, ctx, rng, node);
        }
    }

    fn chase_around_corner(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) {
        body.speed = self.settings.run_speed;
        self.switch(HuntMode::ChaseAroundCorner);
        if let Some(node) = self.last_seen {
            self.chase_around_corner.reset(body, ctx, rng, node);
        }
    }

    fn chase_to_intersection(&mut self, body: &mut Body) {
        body.speed = self.settings.run_speed;
        self.switch(HuntMode::ChaseToIntersection);
        self.chase_to_intersection.reset();
    }

    fn look_around(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) {
        body.speed = self.settings.run_speed;
        self.switch(HuntMode::LookAround);
        let visited = body.inverse_edge(ctx.graph).into_iter().collect();
        self.look_around.reset(body, ctx, rng, None, visited);
    }

    fn give_up(&mut self, body: &mut Body) {
        body.speed = self.settings.walk_speed;
        self.switch(HuntMode::GiveUp);
        self.give_up.reset();
    }

    /// React to what the hunter can see right now.
    fn select_mode(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) {
        if !self.can_see_target(body, ctx) {
            if self.mode == HuntMode::ChaseVisible {
                self.chase_around_corner(body, ctx, rng);
            }
            return;
        }

        if !self.is_alert() {
            self.just_spotted();
        } else if self.is_chasing() {
            self.chase_last_seen(body, ctx, rng);
        }
    }

    /// The active sub-behavior finished.
    fn finish_mode(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) {
        match self.mode {
            HuntMode::StrollAround => {}
            HuntMode::JustSpotted => self.chase_last_seen(body, ctx, rng),
            HuntMode::ChaseVisible | HuntMode::ChaseAroundCorner => self.chase_to_intersection(body),
            HuntMode::ChaseToIntersection => self.look_around(body, ctx, rng),
            HuntMode::LookAround => self.give_up(body),
            HuntMode::GiveUp => self.be_cool(body),
        }
    }

    fn active(&mut self) -> &mut dyn Behavior {
        match self.mode {
            HuntMode::StrollAround => &mut self.stroll_around,
            HuntMode::JustSpotted => &mut self.just_spotted,
            HuntMode::ChaseVisible => &mut self.chase_visible,
            HuntMode::ChaseAroundCorner => &mut self.chase_around_corner,
            HuntMode::ChaseToIntersection => &mut self.chase_to_intersection,
            HuntMode::LookAround => &mut self.look_around,
            HuntMode::GiveUp => &mut self.give_up,
        }
    }

    fn active_ref(&self) -> &dyn Behavior {
        match self.mode {
            HuntMode::StrollAround => &self.stroll_around,
            HuntMode::JustSpotted => &self.just_spotted,
            HuntMode::ChaseVisible => &self.chase_visible,
            HuntMode::ChaseAroundCorner => &self.chase_around_corner,
            HuntMode::ChaseToIntersection => &self.chase_to_intersection,
            HuntMode::LookAround => &self.look_around,
            HuntMode::GiveUp => &self.give_up,
        }
    }
}

impl Behavior for Hunt {
    fn name(&self) -> &'static str {
        "lookFor"
    }

    fn update(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng, tick: Tick) -> Step {
        if self.target.is_none() {
            return Step::Settled;
        }
        self.select_mode(body, ctx, rng);

        match self.active().update(body, ctx, rng, tick) {
            Step::Done(next) => {
                self.finish_mode(body, ctx, rng);
                Step::Continue(next)
            }
            step => step,
        }
    }

    fn set_new_target(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) -> Transition {
        match self.active().set_new_target(body, ctx, rng) {
            Transition::Finished => {
                self.finish_mode(body, ctx, rng);
                Transition::Advanced
            }
            t => t,
        }
    }

    fn draw(&self, body: &Body, ctx: &SimContext<'_>, surface: &mut dyn Surface) {
        self.active_ref().draw(body, ctx, surface);
    }
}
