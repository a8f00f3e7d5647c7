use crate::settings::{FormState, TagField};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    /// First frame has been drawn. Moves the form out of `Initializing`.
    Mounted,
    ToggleNotifications,
    FocusNext,
    FocusPrev,
    /// Move the chip cursor in the focused tag list.
    SelectNextTag,
    SelectPrevTag,
    /// Drop the chip cursor back to the search box.
    ClearSelection,
    TypeChar { field: TagField, ch: char },
    Backspace { field: TagField },
    ClearDraft { field: TagField },
    /// Enter in the search box. The draft is always cleared.
    CommitDraft { field: TagField },
    /// Explicit search trigger. The draft is cleared only if it had content.
    SearchDraft { field: TagField },
    /// Clicking a chip copies its value into the draft.
    ClickTag { field: TagField, index: usize },
    RemoveTag { field: TagField, index: usize },
    SaveStarted,
    /// `saved` is the exact state that was sent to the backend.
    SaveSucceeded { saved: FormState },
    SaveFailed,
}

impl Intent for SettingsIntent {}
