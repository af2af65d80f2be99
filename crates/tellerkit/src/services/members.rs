//! Member accounts: listing, approval, rejection.
//!
//! Approve/reject answer with a message-only envelope (no `data`), so
//! those two return the server's message instead of a record.

use tellerkit_client::ApiClient;
use tellerkit_protocol::{Envelope, MemberPage};
use tellerkit_transport::{HttpTransport, Method};

use crate::TellerkitError;

/// Accounts waiting for approval: `GET /users/pending-approval`.
pub async fn pending<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<MemberPage, TellerkitError> {
    Ok(client
        .execute_as(Method::Get, "/users/pending-approval", vec![], None)
        .await?)
}

/// Every member account: `GET /users`.
pub async fn all<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<MemberPage, TellerkitError> {
    Ok(client.execute_as(Method::Get, "/users", vec![], None).await?)
}

/// Approves a pending account: `PUT /users/{id}/approve`.
pub async fn approve<T: HttpTransport>(
    client: &ApiClient<T>,
    user_id: &str,
) -> Result<Option<String>, TellerkitError> {
    let body = client
        .execute(
            Method::Put,
            &format!("/users/{user_id}/approve"),
            vec![],
            None,
        )
        .await?;
    Ok(Envelope::from_value(&body).message)
}

/// Rejects a pending account: `DELETE /users/{id}/reject`.
pub async fn reject<T: HttpTransport>(
    client: &ApiClient<T>,
    user_id: &str,
) -> Result<Option<String>, TellerkitError> {
    let body = client
        .execute(
            Method::Delete,
            &format!("/users/{user_id}/reject"),
            vec![],
            None,
        )
        .await?;
    Ok(Envelope::from_value(&body).message)
}
