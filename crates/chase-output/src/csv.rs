//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `frame_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, FrameSummaryRow, OutputResult};

pub const SNAPSHOT_HEADER: [&str; 6] = ["frame", "agent_id", "x", "y", "target_node", "behavior"];
pub const SUMMARY_HEADER: [&str; 3] = ["frame", "elapsed_ms", "agents"];

/// Writes a trace to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        log::debug!("writing CSV trace to {}", dir.display());
        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.frame.to_string(),
                row.agent_id.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.target_node.to_string(),
                row.behavior.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.elapsed_ms.to_string(),
            row.agents.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
