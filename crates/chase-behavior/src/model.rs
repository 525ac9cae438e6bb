//! The `Behavior` trait and the tick protocol shared by every behavior.

use chase_core::{AgentRng, Surface, Tick};
use chase_mobility::{advance, Advance, Body};

use crate::SimContext;

/// What happened to a tick handed to [`Behavior::update`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// The tick is used up; nothing more to do this frame.
    Settled,
    /// Time is left over.  Re-enter the active behavior with this tick.
    Continue(Tick),
    /// The behavior finished.  Its owner decides what is next, then
    /// continues with this tick.
    Done(Tick),
}

/// Result of [`Behavior::set_new_target`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A new target was set; keep moving.
    Advanced,
    /// The plan is exhausted.  The body stays on the node it reached.
    Finished,
    /// There is nowhere to go from here.
    Stalled,
}

/// Pluggable agent behavior.
///
/// One instance per agent per kind is created up front and reused across
/// activations.  Each concrete type has its own inherent `reset` taking the
/// arguments it needs (a node, a target agent, edges already seen).
///
/// All methods receive the agent's [`Body`], a read-only [`SimContext`] and
/// the agent's own [`AgentRng`], so random choices are reproducible.
pub trait Behavior {
    /// Stable camelCase name, used in logs and trace output.
    fn name(&self) -> &'static str;

    /// Spend `tick`.
    fn update(
        &mut self,
        body: &mut Body,
        ctx:  &SimContext<'_>,
        rng:  &mut AgentRng,
        tick: Tick,
    ) -> Step;

    /// The body reached its target node; choose the next one.
    ///
    /// Default: there is nowhere to go.
    fn set_new_target(
        &mut self,
        _body: &mut Body,
        _ctx:  &SimContext<'_>,
        _rng:  &mut AgentRng,
    ) -> Transition {
        Transition::Stalled
    }

    /// Draw whatever the behavior is planning.  Default: nothing.
    fn draw(&self, _body: &Body, _ctx: &SimContext<'_>, _surface: &mut dyn Surface) {}
}

/// Move `body` for one tick and, on arrival, ask `behavior` for the next
/// target.  This is the movement step of every walking behavior.
pub fn locomote<B: Behavior + ?Sized>(
    behavior: &mut B,
    body:     &mut Body,
    ctx:      &SimContext<'_>,
    rng:      &mut AgentRng,
    tick:     Tick,
) -> Step {
    match advance(body, tick) {
        Advance::Moving => Step::Settled,
        Advance::Arrived { remaining_ms } => match behavior.set_new_target(body, ctx, rng) {
            Transition::Advanced => Step::Continue(tick.carry(remaining_ms)),
            Transition::Finished => Step::Done(tick.carry(remaining_ms)),
            Transition::Stalled => Step::Settled,
        },
    }
}
