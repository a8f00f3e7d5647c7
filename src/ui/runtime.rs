use crate::config::AppConfig;
use crate::settings::{SettingsBackend, SimulatedBackend};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

pub fn run(config: AppConfig, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let backend: Arc<dyn SettingsBackend> =
        Arc::new(SimulatedBackend::from_config(&config.backend));
    let mut app = App::new(
        config.initial,
        backend,
        Duration::from_millis(config.autosave.debounce_ms),
        runtime,
        events.sender(),
    );

    terminal.draw(|frame| draw(frame, &app))?;
    app.mark_mounted();
    tracing::info!("Settings form mounted");

    loop {
        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Ok(AppEvent::AutosaveDue { generation }) => app.on_autosave_due(generation),
            Ok(AppEvent::SaveFinished { sent, result }) => app.on_save_finished(sent, result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if app.should_quit() {
            break;
        }
        terminal.draw(|frame| draw(frame, &app))?;
    }

    if app.settings().dirty {
        tracing::warn!("Quitting with unsaved changes");
    }
    app.shutdown();
    drop(guard);
    Ok(())
}
