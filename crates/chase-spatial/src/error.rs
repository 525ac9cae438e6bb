//! Spatial-subsystem error type.
//!
//! Only map loading can fail.  Graph queries and mutations degrade to `None`
//! or no-ops instead.

use thiserror::Error;

/// Errors produced by `chase-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("map has no columns or no rows")]
    EmptyMap,

    #[error("map column {column} has {got} rows, expected {expected}")]
    RaggedMap { column: usize, expected: usize, got: usize },

    #[error("map of {columns}x{rows} does not fit a {grid_columns}x{grid_rows} grid")]
    MapTooLarge {
        columns:      usize,
        rows:         usize,
        grid_columns: u32,
        grid_rows:    u32,
    },

    #[error("map JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
