use crate::autosave::AutosaveScheduler;
use crate::settings::{FormState, SaveError, SettingsBackend};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::settings::{SettingsFormState, SettingsIntent, SettingsReducer};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Form state (MVI pattern).
    settings: SettingsFormState,
    autosave: AutosaveScheduler,
    backend: Arc<dyn SettingsBackend>,
    runtime: Handle,
    events: Sender<AppEvent>,
    /// A countdown fired while a save was in flight.
    save_deferred: bool,
    shut_down: bool,
}

impl App {
    pub fn new(
        initial: FormState,
        backend: Arc<dyn SettingsBackend>,
        debounce: Duration,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            settings: SettingsFormState::new(initial),
            autosave: AutosaveScheduler::new(debounce, runtime.clone(), events.clone()),
            backend,
            runtime,
            events,
            save_deferred: false,
            shut_down: false,
        }
    }

    pub fn settings(&self) -> &SettingsFormState {
        &self.settings
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Called after the first frame is drawn.
    pub fn mark_mounted(&mut self) {
        if self.settings.lifecycle.is_ready() {
            return;
        }
        self.dispatch(SettingsIntent::Mounted);
    }

    pub fn autosave_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    /// Run an intent through the reducer. Any accepted edit that leaves the
    /// form dirty restarts the autosave countdown; an edit that brings it back
    /// to the saved values cancels it.
    pub fn dispatch(&mut self, intent: SettingsIntent) {
        let revision = self.settings.revision;
        dispatch_mvi!(self, settings, SettingsReducer, intent);
        if self.settings.revision == revision || self.shut_down {
            return;
        }
        if self.settings.dirty {
            self.autosave.schedule();
        } else {
            self.autosave.cancel();
        }
    }

    /// Bracketed paste goes into the focused search box, one line only.
    pub fn on_paste(&mut self, text: &str) {
        let Some(field) = self.settings.focus.field() else {
            return;
        };
        for ch in text.chars().take_while(|ch| *ch != '\n' && *ch != '\r') {
            self.dispatch(SettingsIntent::TypeChar { field, ch });
        }
    }

    pub fn on_autosave_due(&mut self, generation: u64) {
        if self.shut_down || !self.autosave.fire(generation) {
            return;
        }
        if !self.settings.dirty {
            return;
        }
        if self.settings.saving {
            tracing::debug!(generation, "Autosave deferred until the current save resolves");
            self.save_deferred = true;
            return;
        }
        self.start_save();
    }

    pub fn on_save_finished(&mut self, sent: FormState, result: Result<(), SaveError>) {
        if self.shut_down {
            return;
        }
        let succeeded = result.is_ok();
        match result {
            Ok(()) => {
                tracing::info!(backend = self.backend.name(), "Changes saved");
                self.dispatch(SettingsIntent::SaveSucceeded { saved: sent });
            }
            Err(err) => {
                tracing::error!(backend = self.backend.name(), "Failed to save changes: {}", err);
                self.dispatch(SettingsIntent::SaveFailed);
            }
        }

        let deferred = std::mem::take(&mut self.save_deferred);
        if !self.settings.dirty {
            return;
        }
        if deferred {
            self.start_save();
        } else if succeeded && !self.autosave.is_pending() {
            // Reverted to the old snapshot mid-save; the new one differs.
            self.autosave.schedule();
        }
    }

    /// Cancel the pending countdown. Results of an in-flight save are
    /// ignored from here on.
    pub fn shutdown(&mut self) {
        self.autosave.cancel();
        self.shut_down = true;
    }

    fn start_save(&mut self) {
        let state = self.settings.form.clone();
        self.dispatch(SettingsIntent::SaveStarted);

        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = backend.save(state.clone()).await;
            if events
                .send(AppEvent::SaveFinished {
                    sent: state,
                    result,
                })
                .is_err()
            {
                tracing::trace!("Save result dropped (receiver gone)");
            }
        });
    }
}
