use settings_form::settings::{FormLifecycle, FormState, TagField};
use settings_form::ui::mvi::Reducer;
use settings_form::ui::settings::{FormFocus, SaveStatus, SettingsFormState, SettingsIntent, SettingsReducer};

fn ready() -> SettingsFormState {
    SettingsReducer::reduce(SettingsFormState::default(), SettingsIntent::Mounted)
}

fn apply(state: SettingsFormState, intents: Vec<SettingsIntent>) -> SettingsFormState {
    intents.into_iter().fold(state, SettingsReducer::reduce)
}

fn typed(field: TagField, text: &str) -> Vec<SettingsIntent> {
    text.chars()
        .map(|ch| SettingsIntent::TypeChar { field, ch })
        .collect()
}

#[test]
fn duplicate_user_is_ignored() {
    let mut intents = typed(TagField::Users, "Narendra Modi");
    intents.push(SettingsIntent::CommitDraft {
        field: TagField::Users,
    });
    let state = apply(ready(), intents);

    assert_eq!(state.form.users.len(), 3);
    assert_eq!(state.drafts.get(TagField::Users), "");
    assert!(!state.dirty);
    assert_eq!(state.revision, 0);
}

#[test]
fn removing_middle_category_keeps_order() {
    let state = SettingsReducer::reduce(
        ready(),
        SettingsIntent::RemoveTag {
            field: TagField::Categories,
            index: 1,
        },
    );
    assert_eq!(
        state.form.categories,
        vec!["Hiring".to_string(), "Resignation".to_string()]
    );
    assert!(state.dirty);
    assert_eq!(state.status(), SaveStatus::Pending);
}

#[test]
fn urgent_is_appended_and_draft_cleared() {
    let mut intents = typed(TagField::Categories, "  Urgent ");
    intents.push(SettingsIntent::CommitDraft {
        field: TagField::Categories,
    });
    let state = apply(ready(), intents);

    assert_eq!(
        state.form.categories,
        vec![
            "Hiring".to_string(),
            "Budget 2025".to_string(),
            "Resignation".to_string(),
            "Urgent".to_string(),
        ]
    );
    assert_eq!(state.drafts.get(TagField::Categories), "");
    assert!(state.dirty);
}

#[test]
fn blank_search_keeps_draft_and_state() {
    let state = apply(
        ready(),
        vec![
            SettingsIntent::TypeChar {
                field: TagField::Replies,
                ch: ' ',
            },
            SettingsIntent::SearchDraft {
                field: TagField::Replies,
            },
        ],
    );
    assert_eq!(state.drafts.get(TagField::Replies), " ");
    assert_eq!(state.form.replies.len(), 2);
    assert!(!state.dirty);
}

#[test]
fn edits_before_mount_are_not_changes() {
    let state = apply(
        SettingsFormState::default(),
        vec![
            SettingsIntent::ToggleNotifications,
            SettingsIntent::RemoveTag {
                field: TagField::Users,
                index: 0,
            },
        ],
    );
    assert_eq!(state.lifecycle, FormLifecycle::Initializing);
    assert!(!state.dirty);
    assert_eq!(state.form.users.len(), 2);
}

#[test]
fn reverting_edits_clears_dirty() {
    let mut intents = typed(TagField::Categories, "Urgent");
    intents.push(SettingsIntent::CommitDraft {
        field: TagField::Categories,
    });
    let state = apply(ready(), intents);
    assert!(state.dirty);

    let state = SettingsReducer::reduce(
        state,
        SettingsIntent::RemoveTag {
            field: TagField::Categories,
            index: 3,
        },
    );
    assert_eq!(state.form, state.saved);
    assert!(!state.dirty);
    assert_eq!(state.status(), SaveStatus::Idle);
}

#[test]
fn failed_save_keeps_dirty_until_a_save_succeeds() {
    let state = SettingsReducer::reduce(ready(), SettingsIntent::ToggleNotifications);
    let sent = state.form.clone();
    let state = apply(
        state,
        vec![SettingsIntent::SaveStarted, SettingsIntent::SaveFailed],
    );
    assert!(state.dirty);
    assert!(!state.saving);

    let state = apply(
        state,
        vec![
            SettingsIntent::SaveStarted,
            SettingsIntent::SaveSucceeded { saved: sent },
        ],
    );
    assert!(!state.dirty);
    assert_eq!(state.status(), SaveStatus::Idle);
}

#[test]
fn edit_during_save_stays_dirty_after_success() {
    let state = SettingsReducer::reduce(ready(), SettingsIntent::ToggleNotifications);
    let sent = state.form.clone();
    let mut intents = vec![SettingsIntent::SaveStarted];
    intents.extend(typed(TagField::Users, "Ann"));
    intents.push(SettingsIntent::CommitDraft {
        field: TagField::Users,
    });
    let state = apply(state, intents);
    assert_eq!(state.status(), SaveStatus::Saving);

    let state = SettingsReducer::reduce(state, SettingsIntent::SaveSucceeded { saved: sent.clone() });
    assert_eq!(state.saved, sent);
    assert!(state.dirty);
    assert_eq!(state.status(), SaveStatus::Pending);
}

#[test]
fn clicking_chip_fills_search_box_only() {
    let state = SettingsReducer::reduce(
        ready(),
        SettingsIntent::ClickTag {
            field: TagField::Replies,
            index: 0,
        },
    );
    let first = FormState::default().replies[0].clone();
    assert_eq!(state.drafts.get(TagField::Replies), first);
    assert_eq!(state.focus, FormFocus::input(TagField::Replies));
    assert_eq!(state.form, FormState::default());
    assert!(!state.dirty);
}

#[test]
fn out_of_range_remove_is_a_no_op() {
    let state = SettingsReducer::reduce(
        ready(),
        SettingsIntent::RemoveTag {
            field: TagField::Replies,
            index: 9,
        },
    );
    assert_eq!(state.form, FormState::default());
    assert!(!state.dirty);
    assert_eq!(state.revision, 0);
}
