//! `chase-agent`: the agents that walk, look and hunt on the grid.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`repertoire`] | `BehaviorKind`, `Repertoire`: one instance of every behavior |
//! | [`agent`]      | `Agent`: commands, the update loop, the completion policy    |
//! | [`builder`]    | `AgentBuilder` (fluent construction)                         |
//! | [`store`]      | `AgentStore`: every agent, indexed by `AgentId`              |
//! | [`error`]      | `AgentError`, `AgentResult`                                  |
//!
//! # Update loop
//!
//! ```text
//! tick = Tick::new(elapsed_ms)
//! loop:
//!   guard tripped?          → drop the rest of the tick
//!   active.update(tick) →
//!     Settled               → done for this frame
//!     Continue(rest)        → tick = rest
//!     Done(rest)            → completion policy picks a new behavior; tick = rest
//! ```

pub mod agent;
pub mod builder;
pub mod error;
pub mod repertoire;
pub mod store;


pub use agent::Agent;
pub use builder::AgentBuilder;
pub use error::{AgentError, AgentResult};
pub use repertoire::{BehaviorKind, Repertoire};
pub use store::AgentStore;
