//! The authenticated request executor for Tellerkit.
//!
//! This crate is the piece with real invariants. [`ApiClient`] wraps every
//! protected HTTP call with:
//!
//! 1. **Bearer attachment** — the access token from the session store is
//!    merged over the caller's headers; callers never attach it themselves
//! 2. **Transparent refresh** — a 401 triggers one token refresh, and all
//!    requests that 401 while it's in flight share the same outcome
//!    (exactly one refresh call, ever, per expiry)
//! 3. **Retry once** — after a successful refresh the original request is
//!    retried exactly once; a second 401 surfaces as an error, never a loop
//! 4. **Forced logout** — a failed refresh clears the session as a side
//!    effect, because nothing the client holds can ever work again
//!
//! # How it fits in the stack
//!
//! ```text
//! Services (above)      ← typed wrappers, one per dashboard view
//!     ↕
//! Client (this crate)   ← bearer + refresh + retry + error taxonomy
//!     ↕
//! Session / Transport (below) ← token storage; raw HTTP
//! ```

mod client;
mod config;
mod error;
mod refresh;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, RefreshError};
