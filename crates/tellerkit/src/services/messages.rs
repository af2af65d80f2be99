//! Customer messages: paged listings, the recent panel, and search.

use serde::Deserialize;
use tellerkit_client::ApiClient;
use tellerkit_protocol::{MessagePage, RecentMessage};
use tellerkit_transport::{HttpTransport, Method};

use crate::TellerkitError;

/// The `/messages/recent` payload wraps its rows in an object.
#[derive(Debug, Deserialize)]
struct RecentPayload {
    messages: Vec<RecentMessage>,
}

/// One page of all messages: `GET /messages?page=&limit=`.
pub async fn list<T: HttpTransport>(
    client: &ApiClient<T>,
    page: u64,
    limit: u64,
) -> Result<MessagePage, TellerkitError> {
    Ok(client
        .execute_as(
            Method::Get,
            &format!("/messages?page={page}&limit={limit}"),
            vec![],
            None,
        )
        .await?)
}

/// One page of a single customer's messages.
///
/// Same endpoint as [`list`]; the customer is selected with the
/// `X-Customer-ID` header rather than a path segment.
pub async fn by_customer<T: HttpTransport>(
    client: &ApiClient<T>,
    customer_id: &str,
    page: u64,
    limit: u64,
) -> Result<MessagePage, TellerkitError> {
    Ok(client
        .execute_as(
            Method::Get,
            &format!("/messages?page={page}&limit={limit}"),
            vec![("X-Customer-ID".to_string(), customer_id.to_string())],
            None,
        )
        .await?)
}

/// The newest messages for the dashboard panel: `GET /messages/recent`.
pub async fn recent<T: HttpTransport>(
    client: &ApiClient<T>,
    limit: u64,
) -> Result<Vec<RecentMessage>, TellerkitError> {
    let payload: RecentPayload = client
        .execute_as(
            Method::Get,
            &format!("/messages/recent?limit={limit}"),
            vec![],
            None,
        )
        .await?;
    Ok(payload.messages)
}

/// Full-text message search: `GET /messages/search?q=`.
///
/// The query is percent-encoded here; callers pass it raw.
pub async fn search<T: HttpTransport>(
    client: &ApiClient<T>,
    query: &str,
    page: u64,
    limit: u64,
) -> Result<MessagePage, TellerkitError> {
    let q = urlencoding::encode(query);
    Ok(client
        .execute_as(
            Method::Get,
            &format!("/messages/search?q={q}&page={page}&limit={limit}"),
            vec![],
            None,
        )
        .await?)
}
