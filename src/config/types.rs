use serde::{Deserialize, Serialize};

use crate::settings::FormState;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub autosave: AutosaveConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    /// Values the form starts with (and the first saved snapshot).
    #[serde(default)]
    pub initial: FormState,
}

/// Debounce settings for autosave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutosaveConfig {
    /// Quiet period after the last edit before a save starts (default: 2000).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Simulated settings backend behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Artificial latency of each save in milliseconds (default: 1000).
    #[serde(default = "default_backend_delay_ms")]
    pub delay_ms: u64,
    /// Reject every save. Useful for exercising the failure path.
    #[serde(default)]
    pub fail_saves: bool,
}

fn default_debounce_ms() -> u64 {
    2000
}

fn default_backend_delay_ms() -> u64 {
    1000
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_backend_delay_ms(),
            fail_saves: false,
        }
    }
}
