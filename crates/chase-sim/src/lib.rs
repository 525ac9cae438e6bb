//! `chase-sim`: frame loop orchestrator for the chase pursuit simulation.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① views    : snapshot every agent (position, nodes, alertness)
//!   ② update   : for each agent in ascending AgentId order
//!                  build its SimContext from the views
//!                  agent.update(ctx, frame_ms)
//!                  refresh its own view, so later agents see it moved
//!   ③ snapshot : every output_interval_frames, hand the agents to the observer
//! ```
//!
//! Map edits ([`Sim::block`], [`Sim::unblock`]) and agent commands
//! ([`Sim::command`]) happen between frames, never during an update.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use chase_core::{AgentSettings, SimConfig};
//! use chase_sim::{NoopObserver, SimBuilder};
//! use chase_spatial::TileGrid;
//!
//! let grid = TileGrid::from_map(&map, 800.0, 600.0)?;
//! let mut sim = SimBuilder::new(SimConfig::default(), grid)
//!     .agent(AgentSettings::default(), None)
//!     .build()?;
//! sim.command(AgentId(0), |agent, _ctx| agent.random_walk())?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
