//! `chase-spatial`: tile grid, navigation graph, routing, and sight.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`grid`]   | `Geometry` trait, `Tile`, `TileCoord`, `TileGrid`               |
//! | [`map`]    | JSON map loading (`load_map_reader`, `load_map_path`)           |
//! | [`graph`]  | `Graph` arena of `Node`s and paired `Edge`s, R-tree point lookup |
//! | [`router`] | Dijkstra with random tie-breaking: `Graph::search`, `find_path` |
//! | [`sight`]  | `AxisOfSight`, straight runs of unblocked tiles                |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod graph;
pub mod grid;
pub mod map;
pub mod router;
pub mod sight;


pub use error::{SpatialError, SpatialResult};
pub use graph::{Edge, Graph, Node};
pub use grid::{Geometry, Tile, TileCoord, TileGrid};
pub use map::{load_map_path, load_map_reader};
pub use router::{Search, Visit};
pub use sight::AxisOfSight;
