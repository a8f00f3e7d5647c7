//! Settings domain: the form model, change detection and the save backend.

mod backend;
mod change;
mod form;

pub use backend::{SaveError, SettingsBackend, SimulatedBackend};
pub use change::{detect_changes, FormLifecycle};
pub use form::{FormState, PendingInputs, TagField};
