//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned to produce new states, carry everything the view
/// needs, and compare with `PartialEq` so tests can assert on them whole.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
