//! Fluent builder for constructing a [`Sim`].

use chase_agent::{AgentBuilder, AgentError, AgentStore};
use chase_core::{AgentSettings, SimClock, SimConfig, SimRng};
use chase_spatial::{Graph, TileCoord, TileGrid};

use crate::{Sim, SimError, SimResult};

/// Agent size relative to a tile.
const AGENT_TILE_FRACTION: f64 = 0.4;

struct AgentSpec {
    settings: AgentSettings,
    start:    Option<TileCoord>,
}

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: frame length, total frames, seed, snapshot cadence
/// - [`TileGrid`]: the map, with its blocked tiles already set
///
/// # Optional inputs
///
/// | Method               | Default                                 |
/// |----------------------|-----------------------------------------|
/// | `.agent(s, start)`   | no agents                               |
/// | `.agent_radius(r)`   | 40% of the smaller tile side            |
///
/// Agents get ids in the order they are added.  A `None` start places the
/// agent on a random free tile drawn from the simulation RNG.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, grid)
///     .agent(AgentSettings::default(), Some(TileCoord::new(0, 0)))
///     .agent(AgentSettings::with_speeds(0.04, 0.09), None)
///     .build()?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    grid:   TileGrid,
    agents: Vec<AgentSpec>,
    radius: Option<f64>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, grid: TileGrid) -> Self {
        Self { config, grid, agents: Vec::new(), radius: None }
    }

    /// Add an agent with `settings`, starting on the tile `start`.
    pub fn agent(mut self, settings: AgentSettings, start: Option<TileCoord>) -> Self {
        self.agents.push(AgentSpec { settings, start });
        self
    }

    /// Drawn radius of every agent.
    pub fn agent_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Validate the config, build the graph and place the agents.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let graph = Graph::new(&self.grid);
        let mut rng = SimRng::new(self.config.seed);
        let radius = self.radius.unwrap_or_else(|| {
            self.grid.tile_width().min(self.grid.tile_height()) * AGENT_TILE_FRACTION
        });

        let mut agents = AgentStore::new();
        for spec in self.agents {
            let node = match spec.start {
                Some(coord) => graph.node_at(coord).ok_or(SimError::BadStart(coord))?,
                None => graph.random_node(rng.inner()).ok_or(AgentError::EmptyGraph)?,
            };
            let builder = AgentBuilder::new(self.config.seed)
                .settings(spec.settings)
                .radius(radius)
                .start(node);
            agents.spawn(builder, &graph)?;
        }
        log::info!(
            "sim ready: {}x{} tiles, {} nodes, {} agents",
            graph.columns(),
            graph.rows(),
            graph.node_count(),
            agents.len()
        );

        Ok(Sim {
            clock: SimClock::new(),
            config: self.config,
            grid: self.grid,
            graph,
            agents,
            rng,
        })
    }
}
