use serde::{Deserialize, Serialize};

/// Longest accepted polling interval (one year).
pub const MAX_INTERVAL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Upper bound on concurrently active sessions; unlimited when unset.
    #[serde(default)]
    pub max_sessions: Option<usize>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            max_sessions: None,
        }
    }
}

fn default_interval_secs() -> u64 {
    600
}
