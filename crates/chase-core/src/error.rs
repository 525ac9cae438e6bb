//! Framework error type.
//!
//! The simulation core degrades instead of failing (unreachable targets yield
//! a one-node path, runaway ticks are logged and truncated).  Errors only
//! arise at construction and I/O boundaries.  Sub-crates define their own
//! enums and wrap `ChaseError` as one variant.

use thiserror::Error;

/// The error type for `chase-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ChaseError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `chase-core`.
pub type ChaseResult<T> = Result<T, ChaseError>;
