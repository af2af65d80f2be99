//! A minimal terminal dashboard: log in, then print the numbers an
//! operator would see on the landing page.
//!
//! Configuration comes from the environment:
//!
//! - `TELLERKIT_BASE_URL`  (default `http://127.0.0.1:8080/api/v1`)
//! - `TELLERKIT_EMAIL` / `TELLERKIT_PASSWORD`  (required on first run)
//! - `TELLERKIT_SESSION_DIR`  (default `.tellerkit-session`)
//!
//! The session is persisted to disk, so a second run skips the login and
//! goes straight to the data. Token refresh happens inside the client;
//! nothing here knows tokens exist.

use std::sync::Arc;

use tellerkit::prelude::*;
use tracing_subscriber::EnvFilter;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_url = env_or("TELLERKIT_BASE_URL", "http://127.0.0.1:8080/api/v1");
    let session_dir = env_or("TELLERKIT_SESSION_DIR", ".tellerkit-session");

    let session = Arc::new(SessionStore::open(FileStorage::new(&session_dir)));
    let client = ApiClient::new(
        ReqwestTransport::new(),
        session,
        ClientConfig::new(&base_url),
    );

    if !client.session().is_authenticated() {
        let credentials = LoginCredentials {
            email: std::env::var("TELLERKIT_EMAIL")
                .map_err(|_| "TELLERKIT_EMAIL is not set and no session is stored")?,
            password: std::env::var("TELLERKIT_PASSWORD")
                .map_err(|_| "TELLERKIT_PASSWORD is not set and no session is stored")?,
        };
        let user = services::auth::login(&client, &credentials).await?;
        tracing::info!(email = %user.email, role = %user.role, "logged in");
    } else if let Some(user) = client.session().user() {
        tracing::info!(email = %user.email, "resuming stored session");
    }

    let stats = services::stats::dashboard(&client).await?;
    println!("== dashboard ==");
    println!("customers:        {} ({} new)", stats.total_customers, stats.new_customers);
    println!("active customers: {}", stats.active_customers);
    println!("messages:         {} ({} unread)", stats.total_messages, stats.unread_messages);
    println!("credit issued:    {:.2}", stats.total_credit_limit);

    let customers = services::customers::list(&client).await?;
    println!("\n== customers ({}) ==", customers.len());
    for customer in &customers {
        println!(
            "{:<24} {:<28} limit {:>10.2} / {:>10.2}",
            customer.full_name, customer.email, customer.available_limit, customer.total_limit,
        );
    }

    let recent = services::messages::recent(&client, 5).await?;
    println!("\n== recent messages ==");
    for row in &recent {
        println!("[{}] {} / {}: {}", row.date, row.sender, row.subject, row.preview);
    }

    Ok(())
}
