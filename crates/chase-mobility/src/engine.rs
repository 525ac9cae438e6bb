//! The movement integrator.

use chase_core::Tick;

use crate::Body;

/// Highest `Tick::iteration` still processed.  A driver tick (iteration 0)
/// may therefore be continued once; the second continuation is dropped.
pub const MAX_ITERATIONS: u32 = 1;

/// Outcome of [`advance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Advance {
    /// The tick was spent travelling (or standing still).
    Moving,
    /// The body reached its target point with time to spare.
    Arrived { remaining_ms: f64 },
}

/// Move `body` toward its target point for `tick.elapsed_ms`.
///
/// If the target lies further than one tick's travel the body is
/// interpolated along the straight line and the tick is spent.  Otherwise it
/// snaps exactly onto the target and the unspent time is returned.
///
/// A non-positive or non-finite speed never reaches anything: the body stays
/// where it is.
pub fn advance(body: &mut Body, tick: Tick) -> Advance {
    if body.speed <= 0.0 || !body.speed.is_finite() {
        return Advance::Moving;
    }

    let remaining = tick.elapsed_ms;
    let distance = body.target_vector().length();
    let time_to_reach = distance / body.speed;

    if time_to_reach >= remaining {
        body.position = body.position + body.velocity() * remaining;
        return Advance::Moving;
    }

    body.position = body.target_point;
    Advance::Arrived { remaining_ms: remaining - time_to_reach }
}

/// `true` (and a warning is logged) when `tick` is a continuation beyond
/// [`MAX_ITERATIONS`].  The caller must drop the rest of the tick.
pub fn guard_tripped(tick: Tick, who: &str) -> bool {
    if tick.iteration <= MAX_ITERATIONS {
        return false;
    }
    log::warn!(
        "{who}: too many iterations in one tick, dropping {:.3}ms",
        tick.elapsed_ms
    );
    true
}
