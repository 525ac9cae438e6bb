//! Ambient guard duty.

use chase_core::{AgentRng, Surface, Tick};
use chase_mobility::Body;

use crate::{Behavior, LookAround, SimContext, Step, ToIntersection, Transition};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Leg {
    ToIntersection,
    LookAround,
}

/// Walk to the next intersection, look around it, repeat.
#[derive(Clone, Debug)]
pub struct Patrol {
    leg:             Leg,
    to_intersection: ToIntersection,
    look_around:     LookAround,
}

impl Patrol {
    pub fn new(look_wait_ms: f64) -> Self {
        Self {
            leg:             Leg::ToIntersection,
            to_intersection: ToIntersection::default(),
            look_around:     LookAround::new(look_wait_ms),
        }
    }

    pub fn reset(&mut self) {
        self.leg = Leg::ToIntersection;
        self.to_intersection.reset();
    }

    fn finish_leg(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) {
        match self.leg {
            Leg::ToIntersection => {
                self.leg = Leg::LookAround;
                let visited = body.inverse_edge(ctx.graph).into_iter().collect();
                self.look_around.reset(body, ctx, rng, None, visited);
            }
            Leg::LookAround => {
                self.leg = Leg::ToIntersection;
                self.to_intersection.reset_moving_on();
            }
        }
    }

    fn active(&mut self) -> &mut dyn Behavior {
        match self.leg {
            Leg::ToIntersection => &mut self.to_intersection,
            Leg::LookAround => &mut self.look_around,
        }
    }
}

impl Behavior for Patrol {
    fn name(&self) -> &'static str {
        "patrol"
    }

    fn update(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng, tick: Tick) -> Step {
        match self.active().update(body, ctx, rng, tick) {
            Step::Done(next) => {
                self.finish_leg(body, ctx, rng);
                Step::Continue(next)
            }
            step => step,
        }
    }

    fn set_new_target(&mut self, body: &mut Body, ctx: &SimContext<'_>, rng: &mut AgentRng) -> Transition {
        match self.active().set_new_target(body, ctx, rng) {
            Transition::Finished => {
                self.finish_leg(body, ctx, rng);
                Transition::Advanced
            }
            t => t,
        }
    }

    fn draw(&self, body: &Body, ctx: &SimContext<'_>, surface: &mut dyn Surface) {
        match self.leg {
            Leg::ToIntersection => self.to_intersection.draw(body, ctx, surface),
            Leg::LookAround => self.look_around.draw(body, ctx, surface),
        }
    }
}
