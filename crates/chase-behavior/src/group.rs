//! Squad coordination on top of [`Hunt`].

use chase_core::{AgentId, AgentRng, AgentSettings, Surface, Tick};
use chase_mobility::Body;

use crate::{Behavior, Hunt, SimContext, Step, Transition};

/// Whom the squad member is currently hunting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Quarry {
    Target,
    Friend(AgentId),
}

/// Hunt a target shared by a squad.
///
/// While the target is out of sight, a member that sees an alert squad-mate
/// hunts that squad-mate instead: it runs toward whoever raised the alarm.
/// It goes back to the target as soon as it sees the target, or when it sees
/// the squad-mate it was rallying to and that one has calmed down.
#[derive(Clone, Debug)]
pub struct GroupSearch {
    target:     Option<AgentId>,
    friends:    Vec<AgentId>,
    quarry:     Quarry,
    for_target: Hunt,
    for_friend: Hunt,
}

impl GroupSearch {
    pub fn new(settings: AgentSettings) -> Self {
        Self {
            target:     None,
            friends:    Vec::new(),
            quarry:     Quarry::Target,
            for_target: Hunt::new(settings),
            for_friend: Hunt::new(settings),
        }
    }

    pub fn reset(&mut self, body: &mut Body, target: AgentId, friends: Vec<AgentId>) {
        self.target = Some(target);
        self.friends = friends;
        self.quarry = Quarry::Target;
        self.for_target.reset(body, target);
    }

    pub fn target(&self) -> Option<AgentId> {
        self.target
    }

    pub fn friends(&self) -> &[AgentId] {
        &self.friends
    }

    /// The squad-mate being rallied to, if any.
    pub fn rallying_to(&self) -> Option<AgentId> {
        match self.quarry {
            Quarry::Target => None,
            Quarry::Friend(f) => Some(f),
        }
    }

    /// The hunt currently driving the agent.
    pub fn hunt(&self) -> &Hunt {
        match self.quarry {
            Quarry::Target => &self.for_target,
            Quarry::Friend(_) => &self.for_friend,
        }
    }

    fn hunt_mut(&mut self) -> &mut Hunt {
        match self.quarry {
            Quarry::Target => &mut self.for_target,
            Quarry::Friend(_) => &mut self.for_friend,
        }
    }

    pub fn is_alert(&self) -> bool {
        self.hunt().is_alert()
    }

    /// The nearest visible alert squad-mate.  On equal distance the one
    /// listed later wins.
    pub fn closest_visible_alert_friend(&self, body: &Body, ctx: &SimContext<'_>) -> Option<AgentId> {
        let mut closest = None;
        let mut closest_dist = f64::INFINITY;
        for &friend in &self.friends {
            if friend == ctx.agent {
                continue;
            }
            let Some(view) = ctx.view(friend) else {
                continue;
            };
            if !view.is_alert || !ctx.can_see(body, friend) {
                continue;
            }
            let dist = view.position.distance(body.position);
            if dist > closest_dist {
                continue;
            }
            closest_dist = dist;
            closest = Some(friend);
        }
        closest
    }

    fn look_for_target(&mut self, body: &mut Body) {
        if self.quarry == Quarry::Target {
            return;
        }
        let Some(target) = self.target else {
            return;
        };
        log::debug!("group search: back to target {target}");
        self.quarry = Quarry::Target;
        self.for_target.reset(body, target);
    }

    fn look_for_friend(&mut self, body: &mut Body, friend: AgentId) {
        if self.quarry == Quarry::Friend(friend) {
            return;
        }
        log::debug!("group search: rallying to {friend}");
        self.quarry = Quarry::Friend(friend);
        self.for_friend.reset(body, friend);
    }

    fn select_quarry(&mut self, body: &mut Body, ctx: &SimContext<'_>) {
        let Some(target) = self.target else {
            return;
        };
        if ctx.can_see(body, target) {
            self.look_for_target(body);
            return;
        }

        match self.closest_visible_alert_friend(body, ctx) {
            Some(friend) => self.look_for_friend(body, friend),
            None => {
                if let Quarry::Friend(friend) = self.quarry {
                    let calmed = ctx.view(friend).is_some_and(|v| !v.is_alert);
                    if calmed && ctx.can_see(body, friend) {
                        self.look_for_target(body);
                    }
                }
            }
        }
    }
}

impl Behavior for GroupSearch {
    fn name(&self) -> &'static str {
        "searchFor"
    }

    fn update(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng, tick: Tick) -> Step {
        self.select_quarry(body, ctx);
        self.hunt_mut().update(body, ctx, rng, tick)
    }

    fn set_new_target(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) -> Transition {
        self.hunt_mut().set_new_target(body, ctx, rng)
    }

    fn draw(&self, body: &Body, ctx: &SimContext<'_>, surface: &mut dyn Surface) {
        self.hunt().draw(body, ctx, surface);
    }
}
