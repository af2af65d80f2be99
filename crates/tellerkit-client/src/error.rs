//! Error taxonomy for the request executor.
//!
//! The four-way split matters to callers because each variant demands a
//! different reaction: redirect to login, surface a message, or show a
//! connectivity error. The executor never swallows a failure silently —
//! the one deliberate degradation is a response body that fails to parse,
//! which becomes a null body rather than an error.

use tellerkit_protocol::ProtocolError;
use tellerkit_session::SessionError;
use tellerkit_transport::TransportError;

/// Why a token refresh failed.
///
/// `Clone` on purpose: when several requests coalesce onto one refresh,
/// every waiter receives the *same* cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("token refresh failed: {reason}")]
pub struct RefreshError {
    reason: String,
}

impl RefreshError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The leader was dropped before the refresh settled (cancellation or
    /// panic). Waiters receive this instead of hanging forever.
    pub(crate) fn abandoned() -> Self {
        Self::new("refresh abandoned before settling")
    }

    /// The server's explanation, or a generic one.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors that can come out of [`ApiClient`](crate::ApiClient).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No token pair in the session store. No network call was made;
    /// the caller should redirect to login.
    #[error("no session tokens available")]
    AuthRequired,

    /// The access token expired and the refresh was rejected or errored.
    /// The session has already been cleared as a side effect; the caller
    /// should redirect to login.
    #[error(transparent)]
    RefreshFailed(#[from] RefreshError),

    /// The server answered outside the success range after (at most) one
    /// retry. Carries the server-supplied message when there is one, else
    /// `request failed with status <code>`. The session is untouched.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Network-level failure, propagated as-is. No retry is attempted
    /// beyond the single refresh-triggered one.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A 2xx body whose envelope or `data` payload didn't match the
    /// expected shape (typed execution only).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The session store failed to persist a change.
    #[error(transparent)]
    Session(#[from] SessionError),
}
