/// Marker trait for intents.
///
/// Intents are facts delivered to the UI thread (engine publications,
/// system events) and consumed by a reducer.
pub trait Intent: Send + 'static {}
