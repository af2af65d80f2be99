//! The record types exchanged with the admin API.
//!
//! Field names follow the server's JSON exactly (snake_case except where
//! noted), so these derive straight `Serialize`/`Deserialize` with only a
//! handful of renames.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The role attached to a logged-in user.
///
/// Roles gate what the dashboard lets an operator do; the SDK only carries
/// the value, it does not enforce anything with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular administrator.
    Admin,
    /// Administrator who can approve/reject member accounts.
    SuperAdmin,
    /// Ordinary member, no admin surfaces.
    Member,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Admin => "admin",
            UserRole::SuperAdmin => "super_admin",
            UserRole::Member => "member",
        };
        f.write_str(s)
    }
}

/// The identity of the logged-in operator.
///
/// This is what the session store persists alongside the token pair.
/// The wire name for the display name is `name`; the server's account
/// records call the same thing `username`, so we accept that too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(rename = "name", alias = "username")]
    pub display_name: String,
    pub role: UserRole,
}

/// The access/refresh token pair issued at login.
///
/// `expires_in` is the access token's lifetime in seconds, as issued by
/// the server. The pair is replaced wholesale on refresh; the refresh
/// token itself is never rotated by this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

/// What a successful `POST /auth/refresh` hands back.
///
/// Note there is no refresh token here — the caller keeps using the one
/// it already holds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RefreshGrant {
    pub access_token: String,
    pub expires_in: u64,
}

// ---------------------------------------------------------------------------
// Admin records
// ---------------------------------------------------------------------------

/// A member/admin account as the server stores it.
///
/// Returned by signup, the member list, and the pending-approval list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub is_approved: bool,
    pub last_login: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A banking customer, card details included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub phone_number: String,
    pub full_name: String,
    pub email: String,
    pub device_id: String,
    pub last_active: String,
    pub message_count: u64,
    pub is_active: bool,
    pub name: String,
    pub total_limit: f64,
    pub available_limit: f64,
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A message a customer sent to the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub customer_id: String,
    pub content: String,
    pub timestamp: String,
    pub starred: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A condensed message row for the dashboard's "recent" panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentMessage {
    pub id: String,
    pub sender: String,
    pub subject: String,
    pub preview: String,
    pub date: String,
    pub status: String,
}

/// Paging metadata attached to message listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub has_more: bool,
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
}

/// One page of messages plus its paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePage {
    pub messages: Vec<Message>,
    pub pagination: Pagination,
}

/// The member-list payload: a count plus the accounts themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberPage {
    pub count: u64,
    pub users: Vec<Account>,
}

/// Aggregate figures for the dashboard landing page.
///
/// This endpoint is the one place the server uses camelCase keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: u64,
    pub new_customers: u64,
    pub total_messages: u64,
    pub unread_messages: u64,
    pub active_customers: u64,
    pub total_credit_limit: f64,
}
