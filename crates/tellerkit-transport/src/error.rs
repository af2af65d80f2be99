/// Errors that can occur in the transport layer.
///
/// These are network-level failures only. A response with an error status
/// is not a `TransportError` — it comes back as a normal `HttpResponse`
/// and the layers above decide what it means.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectFailed(String),

    /// The request was built or sent incorrectly (bad URL, write error).
    #[error("send failed: {0}")]
    SendFailed(String),

    /// The response body could not be read.
    #[error("response read failed: {0}")]
    ReceiveFailed(String),
}
