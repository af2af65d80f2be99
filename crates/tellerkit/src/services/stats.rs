//! Aggregate dashboard figures.

use tellerkit_client::ApiClient;
use tellerkit_protocol::DashboardStats;
use tellerkit_transport::{HttpTransport, Method};

use crate::TellerkitError;

/// The landing-page numbers: `GET /stats`.
pub async fn dashboard<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<DashboardStats, TellerkitError> {
    Ok(client.execute_as(Method::Get, "/stats", vec![], None).await?)
}
