//! Login and signup.
//!
//! These are the two unauthenticated endpoints: they use
//! [`execute_public`](ApiClient::execute_public), so no bearer header and
//! no refresh cycle. A successful login writes the user and token pair
//! into the session store atomically — from then on, every protected call
//! picks the credentials up from there.

use serde::Deserialize;
use serde_json::json;
use tellerkit_client::ApiClient;
use tellerkit_protocol::{Account, AuthTokens, Envelope, User};
use tellerkit_transport::{HttpTransport, Method};

use crate::TellerkitError;

/// What the operator types into the login form.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// What a new member submits to request an account.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The login response payload: the user record plus a fresh token pair.
#[derive(Debug, Deserialize)]
struct LoginGrant {
    user: User,
    access_token: String,
    refresh_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct SignupReceipt {
    user: Account,
}

/// Logs in: `POST /auth/login`, then records the session.
///
/// On success the store holds both the user and the tokens; a client that
/// was mid-flight on other calls sees them on its next read.
pub async fn login<T: HttpTransport>(
    client: &ApiClient<T>,
    credentials: &LoginCredentials,
) -> Result<User, TellerkitError> {
    let body = client
        .execute_public(
            Method::Post,
            "/auth/login",
            Some(json!({
                "email": credentials.email,
                "password": credentials.password,
            })),
        )
        .await?;

    let grant: LoginGrant = Envelope::from_value(&body).require_data()?;
    let tokens = AuthTokens {
        access_token: grant.access_token,
        refresh_token: grant.refresh_token,
        expires_in: grant.expires_in,
    };
    client.session().login(grant.user.clone(), Some(tokens))?;
    Ok(grant.user)
}

/// Signs up a new member: `POST /auth/signup`.
///
/// Does *not* log in — accounts start unapproved and a super admin has to
/// approve them first.
pub async fn signup<T: HttpTransport>(
    client: &ApiClient<T>,
    request: &SignupRequest,
) -> Result<Account, TellerkitError> {
    let body = client
        .execute_public(
            Method::Post,
            "/auth/signup",
            Some(json!({
                "username": request.username,
                "email": request.email,
                "password": request.password,
            })),
        )
        .await?;

    let receipt: SignupReceipt = Envelope::from_value(&body).require_data()?;
    Ok(receipt.user)
}
