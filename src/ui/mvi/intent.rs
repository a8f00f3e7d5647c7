//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses on the form)
/// - System events (save started, save finished, first frame drawn)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
