//! The customer list.

use tellerkit_client::ApiClient;
use tellerkit_protocol::Customer;
use tellerkit_transport::{HttpTransport, Method};

use crate::TellerkitError;

/// Fetches all customers: `GET /customers`.
pub async fn list<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<Vec<Customer>, TellerkitError> {
    Ok(client
        .execute_as(Method::Get, "/customers", vec![], None)
        .await?)
}
