//! `chase-behavior`: what an agent is trying to do, tick by tick.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`context`] | `SimContext<'a>`, `AgentView`: read-only world seen by one agent  |
//! | [`model`]   | `Behavior` trait, `Step`, `Transition`, the shared `locomote` step |
//! | [`still`]   | `Still`                                                           |
//! | [`walk`]    | `RandomWalk`, `ToIntersection`                                    |
//! | [`path`]    | `FollowPath`, `Follow`                                            |
//! | [`timed`]   | `LookAround`, `Wait`                                              |
//! | [`patrol`]  | `Patrol`: ToIntersection and LookAround, alternating forever      |
//! | [`hunt`]    | `Hunt`, `HuntMode`: spot, chase, search, give up                  |
//! | [`group`]   | `GroupSearch`: hunt the shared target or rally to a spotter       |
//!
//! # Control flow
//!
//! A behavior never calls back into its agent.  Each `update` returns a
//! [`Step`] telling the agent loop what happened to the tick:
//!
//! * [`Step::Settled`]: the tick is used up.
//! * [`Step::Continue`]: time is left over; re-enter the agent's active
//!   behavior with the carried tick.
//! * [`Step::Done`]: this behavior finished and time may be left over.  The
//!   owner (a composite, or the agent itself) picks what comes next and then
//!   continues.
//!
//! Composites own their sub-behaviors by value and switch between them by
//! changing a mode field, so nothing is allocated while the simulation runs.

pub mod context;
pub mod group;
pub mod hunt;
pub mod model;
pub mod patrol;
pub mod path;
pub mod still;
pub mod timed;
pub mod walk;

#[cfg(test)]
mod tests;

pub use context::{AgentView, SimContext};
pub use group::GroupSearch;
pub use hunt::{Hunt, HuntMode};
pub use model::{locomote, Behavior, Step, Transition};
pub use patrol::Patrol;
pub use path::{Follow, FollowPath};
pub use still::Still;
pub use timed::{LookAround, Wait};
pub use walk::{RandomWalk, ToIntersection};
