//! Simulation observer trait for progress reporting and data collection.

use chase_agent::AgentStore;
use chase_core::Frame;
use chase_spatial::Graph;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, frame: Frame, _elapsed_ms: f64, agents: usize) {
///         if frame.0 % self.interval == 0 {
///             println!("{frame}: {agents} agents");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before any agent moves.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called once every agent has been updated for the frame.
    fn on_frame_end(&mut self, _frame: Frame, _elapsed_ms: f64, _agents: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_frames`
    /// frames) with read-only access to every agent and the graph.
    fn on_snapshot(&mut self, _frame: Frame, _agents: &AgentStore, _graph: &Graph) {}

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
