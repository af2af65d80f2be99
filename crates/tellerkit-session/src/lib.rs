//! Login session state for Tellerkit.
//!
//! This crate answers one question — "who is logged in, and with what
//! credentials?" — and keeps the answer durable across restarts:
//!
//! 1. **Storage** — two persisted string slots behind the
//!    [`SessionStorage`] trait ([`MemoryStorage`], [`FileStorage`])
//! 2. **Store** — the in-memory source of truth with write-through
//!    persistence ([`SessionStore`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Client Layer (above)   ← reads tokens per request, writes them on refresh
//!     ↕
//! Session Layer (this crate) ← owns identity + token pair, persists both
//!     ↕
//! Protocol Layer (below) ← provides the User and AuthTokens types
//! ```

mod error;
mod storage;
mod store;

pub use error::SessionError;
pub use storage::{FileStorage, MemoryStorage, SessionStorage, Slot};
pub use store::SessionStore;
