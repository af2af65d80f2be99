//! Error types for the session layer.

/// Errors that can occur while persisting session state.
///
/// Reads never produce these: hydration treats missing or malformed
/// persisted data as "logged out" rather than failing. Only writes —
/// login, token update, logout — surface storage trouble.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The storage backend failed to read or write a slot.
    #[error("session storage failed: {0}")]
    Storage(String),

    /// Session state could not be serialized for persistence.
    #[error("session serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}
