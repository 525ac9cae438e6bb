//! Simulation time model.
//!
//! # Design
//!
//! The driver advances the world in **frames**.  Each frame hands every agent
//! a [`Tick`]: the elapsed virtual milliseconds since the previous frame.
//!
//! A `Tick` also carries an `iteration` counter.  When an agent reaches its
//! target part-way through a tick, the leftover time is re-issued as a new
//! `Tick` with `iteration + 1` (see [`Tick::carry`]).  The counter is what lets
//! the agent loop bound the number of same-frame continuations.
//!
//! Timers inside behaviors (looking around, waiting) accumulate `elapsed_ms`;
//! nothing here reads a wall clock.

use std::fmt;

use crate::{ChaseError, ChaseResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// One slice of virtual time handed to an agent.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Tick {
    /// Virtual milliseconds to consume.
    pub elapsed_ms: f64,
    /// How many same-frame continuations preceded this slice (0 for the
    /// driver's own tick).
    pub iteration: u32,
}

impl Tick {
    /// A fresh driver tick of `elapsed_ms` milliseconds.
    #[inline]
    pub fn new(elapsed_ms: f64) -> Self {
        Self { elapsed_ms, iteration: 0 }
    }

    /// The continuation of this tick with `remaining_ms` left over.
    #[inline]
    pub fn carry(self, remaining_ms: f64) -> Tick {
        Tick {
            elapsed_ms: remaining_ms,
            iteration:  self.iteration + 1,
        }
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}ms#{}", self.elapsed_ms, self.iteration)
    }
}

// ── Frame ────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current frame and the virtual time accumulated so far.
///
/// Frames need not be uniform: interactive drivers feed the measured delta of
/// each animation frame, headless drivers feed `SimConfig::frame_ms`.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    /// The current frame, advanced by [`SimClock::advance`] each iteration.
    pub current_frame: Frame,
    /// Virtual milliseconds elapsed since frame 0.
    pub elapsed_ms: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one frame of `delta_ms` milliseconds.
    #[inline]
    pub fn advance(&mut self, delta_ms: f64) {
        self.current_frame = self.current_frame + 1;
        self.elapsed_ms += delta_ms;
    }

    /// Elapsed virtual time as whole seconds, for progress logging.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms / 1000.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} s)", self.current_frame, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for a headless run.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Milliseconds per frame.  Default: 32, about 30 frames per second.
    pub frame_ms: f64,

    /// Total frames to simulate.
    pub total_frames: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Take an observer snapshot every N frames.  `0` disables snapshots.
    pub output_interval_frames: u64,
}

impl SimConfig {
    /// The frame at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> Frame {
        Frame(self.total_frames)
    }

    /// Reject frame lengths the movement integrator cannot use.
    pub fn validate(&self) -> ChaseResult<()> {
        check_frame_ms(self.frame_ms)
    }
}

/// A frame must last a finite, positive number of milliseconds.
fn check_frame_ms(frame_ms: f64) -> ChaseResult<()> {
    if frame_ms.is_finite() && frame_ms > 0.0 {
        return Ok(());
    }
    Err(ChaseError::Config(format!("frame_ms must be positive, got {frame_ms}")))
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_ms:               32.0,
            total_frames:           1_000,
            seed:                   0,
            output_interval_frames: 1,
        }
    }
}
