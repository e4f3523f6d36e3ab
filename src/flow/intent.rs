//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (form submissions, flow navigation)
/// - System events (API responses, polling results, deep links)
///
/// Intents are processed by reducers to produce new states. The `Debug`
/// bound exists so the store can log every dispatch.
pub trait Intent: std::fmt::Debug + Send + 'static {}
