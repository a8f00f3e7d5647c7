use crate::settings::{detect_changes, FormLifecycle, TagField};
use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::{FormFocus, SettingsFormState};

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsFormState;
    type Intent = SettingsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::Mounted => {
                // Only the first draw counts; later repeats are no-ops.
                state.lifecycle = FormLifecycle::Ready;
                state
            }
            SettingsIntent::ToggleNotifications => {
                state.form.notifications_enabled = !state.form.notifications_enabled;
                mark_changed(state)
            }
            SettingsIntent::FocusNext => {
                state.focus = state.focus.next();
                state
            }
            SettingsIntent::FocusPrev => {
                state.focus = state.focus.prev();
                state
            }
            SettingsIntent::SelectNextTag => {
                if let FormFocus::Tags { field, selected } = state.focus {
                    let len = state.form.tags(field).len();
                    let selected = match selected {
                        None if len > 0 => Some(0),
                        Some(index) if index + 1 < len => Some(index + 1),
                        _ => None,
                    };
                    state.focus = FormFocus::Tags { field, selected };
                }
                state
            }
            SettingsIntent::SelectPrevTag => {
                if let FormFocus::Tags { field, selected } = state.focus {
                    let len = state.form.tags(field).len();
                    let selected = match selected {
                        None => len.checked_sub(1),
                        Some(0) => None,
                        Some(index) => Some((index - 1).min(len.saturating_sub(1))),
                    };
                    state.focus = FormFocus::Tags { field, selected };
                }
                state
            }
            SettingsIntent::ClearSelection => {
                if let FormFocus::Tags { field, .. } = state.focus {
                    state.focus = FormFocus::input(field);
                }
                state
            }
            SettingsIntent::TypeChar { field, ch } => {
                state.drafts.get_mut(field).push(ch);
                state.focus = FormFocus::input(field);
                state
            }
            SettingsIntent::Backspace { field } => {
                state.drafts.get_mut(field).pop();
                state
            }
            SettingsIntent::ClearDraft { field } => {
                state.drafts.clear(field);
                state
            }
            SettingsIntent::CommitDraft { field } => {
                let added = state.form.add_tag(field, state.drafts.get(field));
                state.drafts.clear(field);
                if added {
                    mark_changed(state)
                } else {
                    state
                }
            }
            SettingsIntent::SearchDraft { field } => {
                if state.drafts.get(field).trim().is_empty() {
                    return state;
                }
                let added = state.form.add_tag(field, state.drafts.get(field));
                state.drafts.clear(field);
                if added {
                    mark_changed(state)
                } else {
                    state
                }
            }
            SettingsIntent::ClickTag { field, index } => {
                if let Some(tag) = state.form.tags(field).get(index).cloned() {
                    state.drafts.set(field, tag);
                    state.focus = FormFocus::input(field);
                }
                state
            }
            SettingsIntent::RemoveTag { field, index } => {
                if state.form.remove_tag(field, index).is_none() {
                    return state;
                }
                state.focus = refocus_after_remove(state.focus, field, state.form.tags(field).len());
                mark_changed(state)
            }
            SettingsIntent::SaveStarted => {
                state.saving = true;
                state
            }
            SettingsIntent::SaveSucceeded { saved } => {
                state.saving = false;
                state.saved = saved;
                state.dirty = detect_changes(state.lifecycle, &state.form, &state.saved);
                state
            }
            SettingsIntent::SaveFailed => {
                state.saving = false;
                state
            }
        }
    }
}

/// Record an accepted mutation of `form` and rerun change detection.
fn mark_changed(mut state: SettingsFormState) -> SettingsFormState {
    state.revision += 1;
    state.dirty = detect_changes(state.lifecycle, &state.form, &state.saved);
    state
}

fn refocus_after_remove(focus: FormFocus, field: TagField, remaining: usize) -> FormFocus {
    match focus {
        FormFocus::Tags {
            field: focused,
            selected: Some(index),
        } if focused == field => FormFocus::Tags {
            field,
            selected: if remaining == 0 {
                None
            } else {
                Some(index.min(remaining - 1))
            },
        },
        other => other,
    }
}
