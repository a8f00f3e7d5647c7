//! Settings backend seam.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use crate::config::BackendConfig;
use crate::settings::form::FormState;

/// Errors a backend may return from a save. The form treats them as opaque.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SaveError {
    #[error("Settings backend rejected the save: {reason}")]
    Rejected { reason: String },

    #[error("Settings backend unavailable")]
    Unavailable,
}

/// Accepts a full `FormState` and either stores it or fails.
///
/// Implementations must not partially apply a state: a failed save leaves
/// whatever was stored before untouched.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Name used in log lines.
    fn name(&self) -> &'static str;

    async fn save(&self, state: FormState) -> Result<(), SaveError>;
}

/// In-memory stand-in for a real settings service.
///
/// Logs the payload, waits `delay`, then accepts the state (or rejects it
/// when configured to fail).
pub struct SimulatedBackend {
    delay: Duration,
    fail_saves: bool,
    stored: Mutex<Option<FormState>>,
}

impl SimulatedBackend {
    pub fn new(delay: Duration, fail_saves: bool) -> Self {
        Self {
            delay,
            fail_saves,
            stored: Mutex::new(None),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms), config.fail_saves)
    }

    /// Last state accepted by this backend.
    pub fn stored(&self) -> Option<FormState> {
        self.stored.lock().clone()
    }
}

#[async_trait]
impl SettingsBackend for SimulatedBackend {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn save(&self, state: FormState) -> Result<(), SaveError> {
        match serde_json::to_string(&state) {
            Ok(payload) => tracing::info!(target: "settings::backend", %payload, "Saving changes"),
            Err(err) => tracing::warn!(target: "settings::backend", "Failed to encode payload: {}", err),
        }

        tokio::time::sleep(self.delay).await;

        if self.fail_saves {
            return Err(SaveError::Rejected {
                reason: "simulated failure".to_string(),
            });
        }

        *self.stored.lock() = Some(state);
        tracing::info!(target: "settings::backend", "Changes saved successfully");
        Ok(())
    }
}
