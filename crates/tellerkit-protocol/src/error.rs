//! Error types for the protocol layer.
//!
//! Each crate in Tellerkit defines its own error enum. When you see a
//! `ProtocolError`, the problem is in the shape of a server response,
//! not in networking or session state.

/// Errors that can occur while interpreting a server response.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The `data` payload was present but didn't match the expected type.
    ///
    /// Common causes: missing required fields, wrong data types, or an
    /// endpoint whose shape drifted from what the SDK expects.
    #[error("decode failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The envelope carried no `data` payload where one was required.
    #[error("response envelope has no data payload")]
    MissingData,

    /// The envelope itself reported an error outcome.
    ///
    /// This happens when the HTTP status was in the success range but the
    /// body says `status: "error"` or `success: false`. The string is the
    /// server-supplied message, or a generic fallback if there was none.
    #[error("server rejected request: {0}")]
    Rejected(String),
}
