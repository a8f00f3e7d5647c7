//! Change detection between the live form and the last saved snapshot.

use crate::settings::form::FormState;

/// Mount guard for the form.
///
/// Mutations while `Initializing` never mark the form dirty. The runtime
/// moves the form to `Ready` once, after the first frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormLifecycle {
    #[default]
    Initializing,
    Ready,
}

impl FormLifecycle {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Recompute the dirty flag after a mutation.
///
/// Always `false` while `Initializing`. Once `Ready`, the form is dirty
/// exactly when it differs from the saved snapshot, so editing back to the
/// saved values clears the flag.
pub fn detect_changes(lifecycle: FormLifecycle, form: &FormState, saved: &FormState) -> bool {
    lifecycle.is_ready() && form != saved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::form::TagField;

    #[test]
    fn initializing_never_marks_dirty() {
        let saved = FormState::default();
        let mut form = saved.clone();
        form.notifications_enabled = true;
        assert!(!detect_changes(FormLifecycle::Initializing, &form, &saved));
    }

    #[test]
    fn ready_detects_divergence() {
        let saved = FormState::default();
        let mut form = saved.clone();
        form.add_tag(TagField::Categories, "Urgent");
        assert!(detect_changes(FormLifecycle::Ready, &form, &saved));
    }

    #[test]
    fn equal_state_stays_clean() {
        let saved = FormState::default();
        assert!(!detect_changes(FormLifecycle::Ready, &saved.clone(), &saved));
    }

    #[test]
    fn order_matters() {
        let saved = FormState::default();
        let mut form = saved.clone();
        form.categories.swap(0, 2);
        assert!(detect_changes(FormLifecycle::Ready, &form, &saved));
    }

    #[test]
    fn reverting_to_saved_values_is_clean() {
        let saved = FormState::default();
        let mut form = saved.clone();
        form.add_tag(TagField::Users, "Ann");
        assert!(detect_changes(FormLifecycle::Ready, &form, &saved));

        let last = form.users.len() - 1;
        form.remove_tag(TagField::Users, last);
        assert!(!detect_changes(FormLifecycle::Ready, &form, &saved));
    }
}
