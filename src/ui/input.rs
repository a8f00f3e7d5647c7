use crate::ui::app::App;
use crate::ui::settings::{FormFocus, SettingsIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.dispatch(SettingsIntent::FocusNext);
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.dispatch(SettingsIntent::FocusPrev);
            return;
        }
        _ => {}
    }

    let (field, selected) = match app.settings().focus {
        FormFocus::Notifications => {
            if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                app.dispatch(SettingsIntent::ToggleNotifications);
            }
            return;
        }
        FormFocus::Tags { field, selected } => (field, selected),
    };

    // Ctrl+F: explicit search trigger
    if is_ctrl_char(key, 'f') {
        app.dispatch(SettingsIntent::SearchDraft { field });
        return;
    }

    let intent = match (key.code, selected) {
        (KeyCode::Left, _) => Some(SettingsIntent::SelectPrevTag),
        (KeyCode::Right, _) => Some(SettingsIntent::SelectNextTag),
        (KeyCode::Enter, Some(index)) => Some(SettingsIntent::ClickTag { field, index }),
        (KeyCode::Enter, None) => Some(SettingsIntent::CommitDraft { field }),
        (KeyCode::Delete | KeyCode::Backspace, Some(index)) => {
            Some(SettingsIntent::RemoveTag { field, index })
        }
        (KeyCode::Backspace, None) => Some(SettingsIntent::Backspace { field }),
        (KeyCode::Esc, Some(_)) => Some(SettingsIntent::ClearSelection),
        (KeyCode::Esc, None) => Some(SettingsIntent::ClearDraft { field }),
        (KeyCode::Char(ch), _)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(SettingsIntent::TypeChar { field, ch })
        }
        _ => None,
    };

    if let Some(intent) = intent {
        app.dispatch(intent);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FormState, SimulatedBackend, TagField};
    use crossterm::event::KeyEventState;
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::runtime::Handle;

    fn make_app() -> App {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new(
            FormState::default(),
            Arc::new(SimulatedBackend::new(Duration::from_millis(10), false)),
            Duration::from_millis(2000),
            Handle::current(),
            tx,
        );
        app.mark_mounted();
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, press(KeyCode::Char(ch)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn space_toggles_notifications() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(app.settings().form.notifications_enabled);
        assert!(app.settings().dirty);
    }

    #[tokio::test(start_paused = true)]
    async fn typing_urgent_then_enter_appends_category() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Tab));
        type_str(&mut app, "Urgent");
        assert_eq!(app.settings().drafts.get(TagField::Categories), "Urgent");
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(
            app.settings().form.categories.last().map(String::as_str),
            Some("Urgent")
        );
        assert_eq!(app.settings().drafts.get(TagField::Categories), "");
    }

    #[tokio::test(start_paused = true)]
    async fn ctrl_f_triggers_search_commit() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::BackTab));
        type_str(&mut app, "Thanks!");
        handle_key(&mut app, ctrl('f'));
        assert_eq!(
            app.settings().form.replies.last().map(String::as_str),
            Some("Thanks!")
        );
        assert!(app.settings().dirty);
    }

    #[tokio::test(start_paused = true)]
    async fn selected_chip_removed_with_delete() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Delete));
        assert_eq!(
            app.settings().form.categories,
            vec!["Hiring".to_string(), "Resignation".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn enter_on_chip_copies_it_to_draft() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Left));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.settings().drafts.get(TagField::Users), "Narendra Modi");
        assert_eq!(app.settings().form.users.len(), 3);
        assert!(!app.settings().dirty);
    }

    #[tokio::test(start_paused = true)]
    async fn ctrl_q_requests_quit() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }
}
