//! `ApiClient`: executes one logical request with transparent refresh.
//!
//! The control flow mirrors what every caller needs and nothing more:
//!
//! ```text
//! execute() ──→ tokens? ──no──→ AuthRequired (zero network calls)
//!                 │yes
//!                 ▼
//!           send with bearer ──2xx/4xx/5xx──→ parse / RequestFailed
//!                 │401
//!                 ▼
//!           refresh gate ──leader──→ POST /auth/refresh
//!                 │waiter              │
//!                 ▼                    ▼
//!           shared outcome ──ok──→ retry ONCE with new token
//!                 │err                 (result is final, even a 401)
//!                 ▼
//!           RefreshFailed (session already cleared)
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tellerkit_protocol::{AuthTokens, Envelope, RefreshGrant};
use tellerkit_session::SessionStore;
use tellerkit_transport::{HttpRequest, HttpResponse, HttpTransport, Method};

use crate::refresh::{await_outcome, RefreshGate, RefreshOutcome, RefreshTicket};
use crate::{ApiError, ClientConfig, RefreshError};

/// Authenticated HTTP client for the admin API.
///
/// Owns its collaborators: the transport it sends through, the session
/// store it reads tokens from (and mutates on refresh), and the refresh
/// gate that serializes refresh attempts. Two `ApiClient` values share
/// nothing unless handed the same `Arc<SessionStore>`.
pub struct ApiClient<T: HttpTransport> {
    transport: T,
    session: Arc<SessionStore>,
    gate: RefreshGate,
    config: ClientConfig,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Creates a client over the given transport and session store.
    pub fn new(transport: T, session: Arc<SessionStore>, config: ClientConfig) -> Self {
        Self {
            transport,
            session,
            gate: RefreshGate::new(),
            config,
        }
    }

    /// The session store this client reads and mutates.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Executes one authenticated request, refreshing the access token
    /// (at most once) if the server rejects it.
    ///
    /// Returns the parsed JSON body; a body that fails to parse is
    /// `Value::Null`, not an error.
    ///
    /// # Errors
    /// - [`ApiError::AuthRequired`] — no tokens in the store; nothing was sent
    /// - [`ApiError::RefreshFailed`] — the 401-triggered refresh failed;
    ///   the session has been cleared
    /// - [`ApiError::RequestFailed`] — final status outside the success range
    /// - [`ApiError::Transport`] — network-level failure, no retry
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        headers: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let tokens = self.session.tokens().ok_or(ApiError::AuthRequired)?;

        tracing::debug!(%method, path, "executing authenticated request");

        let mut response = self
            .send_with_token(method, path, &headers, &body, &tokens.access_token)
            .await?;

        if response.status == 401 {
            let fresh = self.refresh(&tokens).await?;
            // Exactly one retry; its result is final even if it 401s again.
            response = self
                .send_with_token(method, path, &headers, &body, &fresh.access_token)
                .await?;
        }

        finish(response)
    }

    /// [`execute`](Self::execute) plus envelope normalization: unwraps the
    /// `data` payload into a typed value.
    pub async fn execute_as<D: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        headers: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<D, ApiError> {
        let body = self.execute(method, path, headers, body).await?;
        Ok(Envelope::from_value(&body).require_data()?)
    }

    /// Executes an unauthenticated request (login, signup): same parse and
    /// status policy, but no bearer header and no refresh cycle.
    pub async fn execute_public(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        tracing::debug!(%method, path, "executing public request");
        let request = self.assemble(method, path, &[], &body, None);
        let response = self.transport.send(request).await?;
        finish(response)
    }

    /// Builds the outgoing request: joins the URL onto the base, merges
    /// our headers over the caller's.
    ///
    /// The bearer header always wins over a caller-supplied Authorization.
    /// `Content-Type: application/json` is added unless the caller set one
    /// — and it is sent even on body-less requests, which the server may
    /// rely on.
    fn assemble(
        &self,
        method: Method,
        path: &str,
        headers: &[(String, String)],
        body: &Option<Value>,
        bearer: Option<&str>,
    ) -> HttpRequest {
        let mut merged: Vec<(String, String)> = headers.to_vec();

        if let Some(token) = bearer {
            merged.retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
            merged.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        let caller_set_content_type = headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
        if !caller_set_content_type {
            merged.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        HttpRequest {
            method,
            url: self.url(path),
            headers: merged,
            body: body.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn send_with_token(
        &self,
        method: Method,
        path: &str,
        headers: &[(String, String)],
        body: &Option<Value>,
        access_token: &str,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.assemble(method, path, headers, body, Some(access_token));
        Ok(self.transport.send(request).await?)
    }

    /// Obtains a fresh token pair, coalescing with any refresh already in
    /// flight. The leader clears the session on failure before settling,
    /// so by the time any caller sees `RefreshFailed` the store is empty.
    async fn refresh(&self, current: &AuthTokens) -> Result<AuthTokens, ApiError> {
        match self.gate.join() {
            RefreshTicket::Leader(permit) => {
                tracing::info!("access token rejected, starting refresh");
                let outcome = self.run_refresh(current).await;
                match &outcome {
                    Ok(_) => tracing::info!("token refresh succeeded"),
                    Err(e) => {
                        tracing::warn!(error = %e, "token refresh failed, clearing session");
                        if let Err(storage) = self.session.logout() {
                            tracing::warn!(error = %storage, "session clear failed after refresh failure");
                        }
                    }
                }
                permit.settle(outcome.clone());
                Ok(outcome?)
            }
            RefreshTicket::Waiter(rx) => {
                tracing::debug!("refresh already in flight, awaiting its outcome");
                Ok(await_outcome(rx).await?)
            }
        }
    }

    /// The actual refresh call. On success the new pair — original refresh
    /// token carried forward, server-issued access token and expiry — is
    /// written to the session store *before* the gate settles, so waiters
    /// and any later call observe it.
    async fn run_refresh(&self, current: &AuthTokens) -> RefreshOutcome {
        let request = HttpRequest {
            method: Method::Post,
            url: self.url(&self.config.refresh_path),
            headers: vec![(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )],
            body: Some(json!({ "refresh_token": current.refresh_token })),
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| RefreshError::new(e.to_string()))?;

        let body = parse_body(&response);
        if !response.is_success() {
            return Err(RefreshError::new(error_message(&body, response.status)));
        }

        let grant: RefreshGrant = Envelope::from_value(&body)
            .require_data()
            .map_err(|e| RefreshError::new(e.to_string()))?;

        let tokens = AuthTokens {
            access_token: grant.access_token,
            refresh_token: current.refresh_token.clone(),
            expires_in: grant.expires_in,
        };
        self.session
            .update_tokens(tokens.clone())
            .map_err(|e| RefreshError::new(e.to_string()))?;

        Ok(tokens)
    }
}

/// Applies the shared response policy: parse-or-null, then status check.
fn finish(response: HttpResponse) -> Result<Value, ApiError> {
    let body = parse_body(&response);
    if !response.is_success() {
        return Err(ApiError::RequestFailed {
            status: response.status,
            message: error_message(&body, response.status),
        });
    }
    Ok(body)
}

/// Body-parse failure degrades to `Null`; it is never an error by itself.
fn parse_body(response: &HttpResponse) -> Value {
    serde_json::from_slice(&response.body).unwrap_or(Value::Null)
}

/// Server-supplied message if present, generic fallback otherwise.
fn error_message(body: &Value, status: u16) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("request failed with status {status}"))
}
