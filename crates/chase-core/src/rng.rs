//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every random choice in the simulation (Dijkstra tie-breaks, random-walk
//! edges, look-around headings, spawn nodes) draws from an explicit RNG, never
//! from a thread-local one.  Each agent gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space, so
//! adding an agent never disturbs the random streams of existing agents.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG, owned by the agent it belongs to.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for APIs generic over `rand::Rng`
    /// (`graph.find_path(a, b, rng.inner())`, …).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global choices (spawn nodes, scenario setup).
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
