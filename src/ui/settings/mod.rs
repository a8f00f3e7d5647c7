//! Settings form feature module.
//!
//! - `state.rs` - form snapshot, saved snapshot, drafts, flags and focus
//! - `intent.rs` - key-driven edits plus mount and save lifecycle events
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::{FormFocus, SaveStatus, SettingsFormState};
