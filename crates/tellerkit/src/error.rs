//! Unified error type for the Tellerkit SDK.

use tellerkit_client::ApiError;
use tellerkit_protocol::ProtocolError;
use tellerkit_session::SessionError;
use tellerkit_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `tellerkit` meta-crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum TellerkitError {
    /// A transport-level error (connect, send, read).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (envelope shape, data decoding).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A session-level error (storage read/write).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A request-executor error (auth required, refresh failed,
    /// request failed).
    #[error(transparent)]
    Client(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transport_error() {
        let err = TransportError::ConnectFailed("gone".into());
        let top: TellerkitError = err.into();
        assert!(matches!(top, TellerkitError::Transport(_)));
        assert!(top.to_string().contains("gone"));
    }

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::Rejected("bad payload".into());
        let top: TellerkitError = err.into();
        assert!(matches!(top, TellerkitError::Protocol(_)));
    }

    #[test]
    fn test_from_session_error() {
        let err = SessionError::Storage("disk full".into());
        let top: TellerkitError = err.into();
        assert!(matches!(top, TellerkitError::Session(_)));
    }

    #[test]
    fn test_from_api_error() {
        let err = ApiError::AuthRequired;
        let top: TellerkitError = err.into();
        assert!(matches!(top, TellerkitError::Client(_)));
        assert_eq!(top.to_string(), "no session tokens available");
    }
}
