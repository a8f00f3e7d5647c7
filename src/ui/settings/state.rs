use crate::settings::{FormLifecycle, FormState, PendingInputs, TagField};
use crate::ui::mvi::UiState;

/// Which control on the form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Notifications,
    /// A tag-list editor. `selected` is the highlighted chip; `None` means
    /// the search box has focus.
    Tags {
        field: TagField,
        selected: Option<usize>,
    },
}

impl FormFocus {
    /// Focus ring order: toggle, then each tag list.
    pub fn next(self) -> Self {
        match self {
            Self::Notifications => Self::input(TagField::Users),
            Self::Tags { field, .. } => match field {
                TagField::Users => Self::input(TagField::Categories),
                TagField::Categories => Self::input(TagField::Replies),
                TagField::Replies => Self::Notifications,
            },
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Notifications => Self::input(TagField::Replies),
            Self::Tags { field, .. } => match field {
                TagField::Users => Self::Notifications,
                TagField::Categories => Self::input(TagField::Users),
                TagField::Replies => Self::input(TagField::Categories),
            },
        }
    }

    pub fn input(field: TagField) -> Self {
        Self::Tags {
            field,
            selected: None,
        }
    }

    pub fn field(&self) -> Option<TagField> {
        match self {
            Self::Tags { field, .. } => Some(*field),
            Self::Notifications => None,
        }
    }

    pub fn selected_tag(&self) -> Option<usize> {
        match self {
            Self::Tags { selected, .. } => *selected,
            Self::Notifications => None,
        }
    }
}

/// What the status line should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Idle,
    Pending,
    Saving,
}

impl SaveStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Pending => Some("Changes detected - auto-saving soon"),
            Self::Saving => Some("Saving changes..."),
        }
    }
}

/// Full state of the settings screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsFormState {
    pub lifecycle: FormLifecycle,
    /// Live, editable values.
    pub form: FormState,
    /// Values as of mount or the last successful save.
    pub saved: FormState,
    pub drafts: PendingInputs,
    pub dirty: bool,
    pub saving: bool,
    pub focus: FormFocus,
    /// Bumped on every accepted change to `form`.
    pub revision: u64,
}

impl Default for SettingsFormState {
    fn default() -> Self {
        Self::new(FormState::default())
    }
}

impl UiState for SettingsFormState {}

impl SettingsFormState {
    pub fn new(initial: FormState) -> Self {
        Self {
            lifecycle: FormLifecycle::Initializing,
            saved: initial.clone(),
            form: initial,
            drafts: PendingInputs::default(),
            dirty: false,
            saving: false,
            focus: FormFocus::default(),
            revision: 0,
        }
    }

    /// Saving wins over the pending notice.
    pub fn status(&self) -> SaveStatus {
        if self.saving {
            SaveStatus::Saving
        } else if self.dirty {
            SaveStatus::Pending
        } else {
            SaveStatus::Idle
        }
    }
}
