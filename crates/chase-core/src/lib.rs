//! `chase-core`: foundational types for the `chase` pursuit simulation.
//!
//! This crate is a dependency of every other `chase-*` crate.  It has no
//! `chase-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`, `EdgeId`                             |
//! | [`geo`]         | `Vector`: 2-D point / displacement in canvas units       |
//! | [`direction`]   | `Direction`: the four cardinal grid directions           |
//! | [`time`]        | `Tick`, `Frame`, `SimClock`, `SimConfig`                  |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)                 |
//! | [`settings`]    | `AgentSettings`: per-agent speeds and timers             |
//! | [`draw`]        | `Surface` drawing trait, `RecordingSurface`               |
//! | [`error`]       | `ChaseError`, `ChaseResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod direction;
pub mod draw;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod settings;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use draw::{Primitive, RecordingSurface, Surface};
pub use error::{ChaseError, ChaseResult};
pub use geo::Vector;
pub use ids::{AgentId, EdgeId, NodeId};
pub use rng::{AgentRng, SimRng};
pub use settings::AgentSettings;
pub use time::{Frame, SimClock, SimConfig, Tick};
