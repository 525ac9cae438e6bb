//! A behavior that does nothing.

use chase_core::{AgentRng, Tick};
use chase_mobility::Body;

use crate::{Behavior, SimContext, Step};

/// Never moves.  The default behavior of a fresh agent.
#[derive(Clone, Debug, Default)]
pub struct Still;

impl Behavior for Still {
    fn name(&self) -> &'static str {
        "still"
    }

    fn update(&mut self, _body: &mut Body, _ctx: &SimContext<'_>, _rng: &mut AgentRng, _tick: Tick) -> Step {
        Step::Settled
    }
}
