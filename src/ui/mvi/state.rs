/// Marker trait for UI state.
///
/// States are cheap to clone, comparable (so redraws can be skipped when
/// nothing changed) and self-contained for rendering.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
