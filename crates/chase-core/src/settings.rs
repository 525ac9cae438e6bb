//! Per-agent construction-time settings.

/// Speeds and timers for one agent.
///
/// Speeds are distance units per millisecond; waits are virtual milliseconds.
/// With the `serde` feature, every field is optional in the serialized form
/// and missing fields fall back to [`AgentSettings::default`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AgentSettings {
    pub walk_speed: f64,
    pub run_speed: f64,
    /// Time spent facing each edge while looking around.
    pub look_wait_ms: f64,
    /// Time spent frozen after spotting a target, and before giving up.
    pub alert_wait_ms: f64,
}

impl AgentSettings {
    pub const DEFAULT_WALK_SPEED: f64 = 0.04;
    pub const DEFAULT_RUN_SPEED: f64 = 0.12;
    pub const DEFAULT_LOOK_WAIT_MS: f64 = 500.0;
    pub const DEFAULT_ALERT_WAIT_MS: f64 = 1_000.0;

    /// Defaults with the two speeds overridden.
    pub fn with_speeds(walk_speed: f64, run_speed: f64) -> Self {
        Self { walk_speed, run_speed, ..Self::default() }
    }
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            walk_speed:    Self::DEFAULT_WALK_SPEED,
            run_speed:     Self::DEFAULT_RUN_SPEED,
            look_wait_ms:  Self::DEFAULT_LOOK_WAIT_MS,
            alert_wait_ms: Self::DEFAULT_ALERT_WAIT_MS,
        }
    }
}
