//! Settings backend that records every save it receives.

use async_trait::async_trait;
use parking_lot::Mutex;
use settings_form::settings::{FormState, SaveError, SettingsBackend};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct SaveCall {
    pub at: Instant,
    pub state: FormState,
}

pub struct RecordingBackend {
    delay: Duration,
    fail: AtomicBool,
    calls: Mutex<Vec<SaveCall>>,
}

impl RecordingBackend {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            fail: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn failing(delay: Duration) -> Self {
        let backend = Self::new(delay);
        backend.set_failing(true);
        backend
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<SaveCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SettingsBackend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn save(&self, state: FormState) -> Result<(), SaveError> {
        self.calls.lock().push(SaveCall {
            at: Instant::now(),
            state,
        });
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(SaveError::Unavailable);
        }
        Ok(())
    }
}
