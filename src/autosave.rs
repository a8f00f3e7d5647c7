//! Debounce timer for autosave.
//!
//! Every `schedule()` aborts the pending countdown and starts a new one on
//! the tokio runtime. When a countdown runs out it posts
//! `AppEvent::AutosaveDue` tagged with its generation; only the latest
//! generation is honored by `fire()`.

use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::ui::events::AppEvent;

pub struct AutosaveScheduler {
    delay: Duration,
    runtime: Handle,
    events: Sender<AppEvent>,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl AutosaveScheduler {
    pub fn new(delay: Duration, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            delay,
            runtime,
            events,
            generation: 0,
            pending: None,
        }
    }

    /// Start the countdown, restarting it if one is already running.
    /// Returns the generation of the new countdown.
    pub fn schedule(&mut self) -> u64 {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;
        let events = self.events.clone();
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(AppEvent::AutosaveDue { generation }).is_err() {
                tracing::trace!("Autosave: event dropped (receiver gone)");
            }
        }));
        tracing::debug!(generation, delay_ms = delay.as_millis() as u64, "Autosave scheduled");
        generation
    }

    /// Abort the pending countdown, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume a fired countdown. Returns `false` for stale or cancelled
    /// generations.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.pending.is_none() || generation != self.generation {
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for AutosaveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
