//! Typed wrappers over the admin API, one module per dashboard view.
//!
//! Every protected call goes through
//! [`ApiClient`](tellerkit_client::ApiClient) — no wrapper ever attaches a
//! bearer token itself, so all of them inherit the refresh-and-retry
//! pipeline for free. The wrappers only know their URL, their payload
//! shape, and nothing else.

pub mod auth;
pub mod customers;
pub mod members;
pub mod messages;
pub mod stats;
