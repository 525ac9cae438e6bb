//! `chase-output`: CSV traces of a pursuit simulation.
//!
//! | File                    | One row per                       |
//! |-------------------------|-----------------------------------|
//! | `agent_snapshots.csv`   | agent, every snapshot frame       |
//! | `frame_summaries.csv`   | frame                             |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `chase_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use chase_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     log::error!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, FrameSummaryRow};
pub use writer::OutputWriter;
