//! Plain data rows written by the trace backends.

/// Where one agent is and what it is doing at a snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub frame:       u64,
    pub agent_id:    u32,
    pub x:           f64,
    pub y:           f64,
    /// The node the agent is heading to; `u32::MAX` if it has none.
    pub target_node: u32,
    /// Name of the active behavior, e.g. `"searchFor"`.
    pub behavior:    &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummaryRow {
    pub frame:      u64,
    pub elapsed_ms: f64,
    pub agents:     u64,
}
