//! Wire types for the Tellerkit admin API.
//!
//! This crate defines the shared vocabulary of the SDK:
//!
//! 1. **Identity** — [`User`], [`UserRole`], [`AuthTokens`], [`RefreshGrant`]
//! 2. **Admin records** — [`Customer`], [`Account`], [`Message`], [`DashboardStats`], …
//! 3. **Envelope** — the normalized server response contract ([`Envelope`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Services (above)      ← deserialize record types out of envelopes
//!     ↕
//! Protocol (this crate) ← shared types, envelope normalization
//!     ↕
//! Transport (below)     ← moves raw JSON bodies, knows nothing of shapes
//! ```

mod envelope;
mod error;
mod types;

pub use envelope::{Envelope, Outcome};
pub use error::ProtocolError;
pub use types::{
    Account, AuthTokens, Customer, DashboardStats, MemberPage, Message,
    MessagePage, Pagination, RecentMessage, RefreshGrant, User, UserRole,
};
