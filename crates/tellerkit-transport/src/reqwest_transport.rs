//! Real HTTP transport implementation using `reqwest`.

use crate::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

/// An [`HttpTransport`] backed by a pooled [`reqwest::Client`].
///
/// No timeout is configured here: this layer relies on the transport
/// defaults, and callers that need deadlines wrap the executor call.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                TransportError::ConnectFailed(e.to_string())
            } else {
                TransportError::SendFailed(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::ReceiveFailed(e.to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}
