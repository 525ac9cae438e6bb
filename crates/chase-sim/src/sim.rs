//! The `Sim` struct and its frame loop.

use chase_agent::{Agent, AgentStore};
use chase_behavior::{AgentView, SimContext};
use chase_core::{AgentId, Frame, NodeId, SimClock, SimConfig, SimRng, Surface};
use chase_spatial::{Geometry, Graph, TileCoord, TileGrid};

use crate::{SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// Holds the map, its navigation graph, every agent and the clock.  Each
/// frame updates the agents one at a time in ascending `AgentId` order; an
/// agent sees the others as they are after every earlier agent has moved in
/// the same frame.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Frame length, total frames, seed, snapshot cadence.
    pub config: SimConfig,

    pub clock: SimClock,

    /// Tile geometry.  Edit through [`block`](Self::block) and
    /// [`unblock`](Self::unblock) so the graph stays in step.
    pub grid: TileGrid,

    pub graph: Graph,

    pub agents: AgentStore,

    /// Global RNG for choices that belong to no agent (random start nodes).
    pub rng: SimRng,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current frame to `config.end_frame()`,
    /// each frame lasting `config.frame_ms`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.config.validate()?;
        while self.clock.current_frame < self.config.end_frame() {
            self.frame(self.config.frame_ms, observer);
        }
        observer.on_sim_end(self.clock.current_frame);
        Ok(())
    }

    /// Run exactly `n` frames from the current position (ignores
    /// `end_frame`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.config.validate()?;
        for _ in 0..n {
            self.frame(self.config.frame_ms, observer);
        }
        Ok(())
    }

    /// Run one frame of `elapsed_ms`, for drivers that measure their own
    /// frame times.
    pub fn frame<O: SimObserver>(&mut self, elapsed_ms: f64, observer: &mut O) {
        let now = self.clock.current_frame;
        observer.on_frame_start(now);
        self.step(elapsed_ms);
        observer.on_frame_end(now, elapsed_ms, self.agents.len());

        let interval = self.config.output_interval_frames;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(now, &self.agents, &self.graph);
        }
        self.clock.advance(elapsed_ms);
    }

    /// Update every agent once, without touching the clock or any observer.
    pub fn step(&mut self, elapsed_ms: f64) {
        let mut views = self.agents.views(&self.graph);
        for i in 0..views.len() {
            let id = AgentId(i as u32);
            let Some(agent) = self.agents.get_mut(id) else {
                continue;
            };
            let ctx = SimContext::new(id, &self.graph, &self.grid, &views);
            agent.update(&ctx, elapsed_ms);
            views[i] = agent.view(&self.graph);
        }
    }

    /// Give agent `id` a command (or query it) with a context of the current
    /// world.
    ///
    /// ```rust,ignore
    /// sim.command(robot, |agent, _| agent.search_for(player, squad.clone()))?;
    /// sim.command(player, |agent, ctx| agent.run_to(node, ctx))?;
    /// ```
    pub fn command<T, F>(&mut self, id: AgentId, f: F) -> SimResult<T>
    where
        F: FnOnce(&mut Agent, &SimContext<'_>) -> T,
    {
        let views = self.agents.views(&self.graph);
        let agent = self.agents.get_mut(id).ok_or(SimError::UnknownAgent(id))?;
        let ctx = SimContext::new(id, &self.graph, &self.grid, &views);
        Ok(f(agent, &ctx))
    }

    /// Every agent as the others perceive it, sorted by id.
    pub fn views(&self) -> Vec<AgentView> {
        self.agents.views(&self.graph)
    }

    /// A uniformly random node, or `None` on an empty graph.
    pub fn random_node(&mut self) -> Option<NodeId> {
        self.graph.random_node(self.rng.inner())
    }

    // ── Runtime map edits ─────────────────────────────────────────────────

    /// Block a free tile and drop its node from the graph.
    ///
    /// Returns `false` if the tile is outside the grid or already blocked.
    /// Agents heading for the node keep walking toward its center.
    pub fn block(&mut self, coord: TileCoord) -> bool {
        if self.grid.tile(coord).is_none_or(|t| t.blocked) {
            return false;
        }
        self.grid.set_blocked(coord, true);
        let removed = self.graph.remove_node(coord).is_some();
        log::debug!("blocked {coord} (node removed: {removed})");
        true
    }

    /// Free a blocked tile and link a fresh node for it into the graph.
    ///
    /// Returns `false` if the tile is outside the grid or already free.
    pub fn unblock(&mut self, coord: TileCoord) -> bool {
        if self.grid.tile(coord).is_none_or(|t| !t.blocked) {
            return false;
        }
        self.grid.set_blocked(coord, false);
        let added = self.grid.tile(coord).and_then(|tile| self.graph.add_node(tile));
        log::debug!("unblocked {coord} (node: {added:?})");
        true
    }

    // ── Drawing ───────────────────────────────────────────────────────────

    /// The graph, then every agent in id order.
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.graph.draw(surface);
        let views = self.views();
        for agent in self.agents.iter() {
            let ctx = SimContext::new(agent.id(), &self.graph, &self.grid, &views);
            agent.draw(&ctx, surface);
        }
    }

    #[inline]
    pub fn current_frame(&self) -> Frame {
        self.clock.current_frame
    }

}
