//! `chase-mobility`: continuous movement of an agent along graph edges.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                         |
//! |------------|------------------------------------------------------------------|
//! | [`state`]  | `Body`: position, speed, last/target node, edge, facing          |
//! | [`engine`] | `advance`: the per-tick integrator, `MAX_ITERATIONS` guard       |
//!
//! # Movement model
//!
//! An agent always travels in a straight line from where it is toward its
//! `target_point` at `speed` distance units per millisecond.
//!
//! 1. [`advance`] consumes a [`Tick`][chase_core::Tick].  If the target is
//!    not reached within the tick the position is interpolated and the tick
//!    is spent.
//! 2. Otherwise the body snaps exactly onto the target and `advance` reports
//!    the leftover time.  The caller (a behavior) then picks the next target
//!    and re-issues the leftover as a continuation tick.
//! 3. Continuations are bounded: a tick whose `iteration` exceeds
//!    [`MAX_ITERATIONS`] is dropped with a warning (see [`guard_tripped`]).
//!
//! A body is therefore always either exactly on a target or strictly between
//! two, never past one.

pub mod engine;
pub mod state;


pub use engine::{advance, guard_tripped, Advance, MAX_ITERATIONS};
pub use state::Body;
