//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use mock_backend::RecordingBackend;
use settings_form::settings::FormState;
use settings_form::ui::app::App;
use settings_form::ui::events::AppEvent;
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// An `App` wired to a recording backend and a test-owned event channel.
pub struct Harness {
    pub app: App,
    pub rx: Receiver<AppEvent>,
    pub backend: Arc<RecordingBackend>,
}

impl Harness {
    /// Mounted app with the default form. Must be called inside a tokio runtime.
    pub fn new(debounce_ms: u64, backend: RecordingBackend) -> Self {
        Self::with_initial(FormState::default(), debounce_ms, backend)
    }

    pub fn with_initial(initial: FormState, debounce_ms: u64, backend: RecordingBackend) -> Self {
        let (tx, rx) = mpsc::channel();
        let backend = Arc::new(backend);
        let mut app = App::new(
            initial,
            backend.clone(),
            Duration::from_millis(debounce_ms),
            Handle::current(),
            tx,
        );
        app.mark_mounted();
        Self { app, rx, backend }
    }

    /// Route every queued async event into the app, like the UI loop does.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            match event {
                AppEvent::AutosaveDue { generation } => self.app.on_autosave_due(generation),
                AppEvent::SaveFinished { sent, result } => self.app.on_save_finished(sent, result),
                _ => continue,
            }
            handled += 1;
        }
        handled
    }

    /// Let paused time run forward, then pump.
    pub async fn advance(&mut self, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        self.pump();
    }
}

/// Shared in-memory sink for captured log output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<parking_lot::Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Capture tracing output on the current thread until the guard drops.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
