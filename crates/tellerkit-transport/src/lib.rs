//! Transport abstraction layer for Tellerkit.
//!
//! Provides the [`HttpTransport`] trait that the request executor speaks,
//! plus the plain value types it moves around. The executor never touches a
//! concrete HTTP client directly — it goes through this seam, which is what
//! lets the whole refresh pipeline be tested with a scripted in-process
//! transport and no sockets.
//!
//! # Feature Flags
//!
//! - `reqwest` (default) — real HTTP via [`reqwest`]

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "reqwest")]
mod reqwest_transport;

pub use error::TransportError;
#[cfg(feature = "reqwest")]
pub use reqwest_transport::ReqwestTransport;

use serde_json::Value;

/// The HTTP methods the admin API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// One outgoing request, fully assembled.
///
/// Headers are a plain list: order-preserving, duplicates allowed, nothing
/// clever. The executor is responsible for merging its own headers over the
/// caller's before the request reaches the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL, query string included.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON body, if any. The transport serializes it.
    pub body: Option<Value>,
}

/// One response, body captured whole.
///
/// The body stays raw bytes here — parsing (and the "unparseable body is
/// null" rule) is the executor's concern, not the transport's.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one HTTP request and yields the response.
///
/// # Trait bounds
///
/// - `Send + Sync` → a transport is shared by every in-flight request.
/// - `'static` → it owns everything it needs and lives as long as the client.
///
/// Implementations must not retry, redirect-follow into other origins, or
/// otherwise resend a request on their own: retry policy belongs to the
/// executor above. A non-2xx status is a normal `Ok` response here; `Err`
/// is reserved for transport-level failure (connect, send, read).
pub trait HttpTransport: Send + Sync + 'static {
    /// Sends the request and reads the full response body.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}
