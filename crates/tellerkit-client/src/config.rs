//! Client configuration.

/// Configuration for an [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every path is joined onto, e.g.
    /// `http://127.0.0.1:8080/api/v1`. A trailing slash is tolerated.
    pub base_url: String,

    /// Path of the token-refresh endpoint, relative to `base_url`.
    pub refresh_path: String,
}

impl ClientConfig {
    /// Creates a config for the given base URL with the standard
    /// refresh endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api/v1".to_string(),
            refresh_path: "/auth/refresh".to_string(),
        }
    }
}
