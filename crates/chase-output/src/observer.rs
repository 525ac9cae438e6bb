//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use chase_agent::AgentStore;
use chase_core::{Frame, NodeId};
use chase_sim::SimObserver;
use chase_spatial::Graph;

use crate::row::{AgentSnapshotRow, FrameSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and frame summaries to any
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                log::error!("trace write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, elapsed_ms: f64, agents: usize) {
        let row = FrameSummaryRow { frame: frame.0, elapsed_ms, agents: agents as u64 };
        let result = self.writer.write_frame_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Frame, agents: &AgentStore, graph: &Graph) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|agent| {
                let target = agent.body().target_node;
                AgentSnapshotRow {
                    frame:       frame.0,
                    agent_id:    agent.id().0,
                    x:           agent.position().x,
                    y:           agent.position().y,
                    target_node: if graph.center(target).is_some() { target.0 } else { NodeId::INVALID.0 },
                    behavior:    agent.behavior_name(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_frame: Frame) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
