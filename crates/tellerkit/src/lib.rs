//! # Tellerkit
//!
//! Client SDK for the banking-administration dashboard API.
//!
//! Tellerkit gives admin tooling a session that survives restarts and an
//! HTTP pipeline that handles expired access tokens by itself: one
//! coalesced refresh, one retry, forced logout when the refresh token is
//! dead. On top of that sit typed wrappers for the dashboard's endpoints
//! (auth, customers, members, messages, stats).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tellerkit::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), TellerkitError> {
//!     let session = Arc::new(SessionStore::open(FileStorage::new(".tellerkit")));
//!     let client = ApiClient::new(
//!         ReqwestTransport::new(),
//!         session,
//!         ClientConfig::new("http://127.0.0.1:8080/api/v1"),
//!     );
//!
//!     if !client.session().is_authenticated() {
//!         let credentials = LoginCredentials {
//!             email: "ops@example.com".into(),
//!             password: "secret".into(),
//!         };
//!         services::auth::login(&client, &credentials).await?;
//!     }
//!
//!     let customers = services::customers::list(&client).await?;
//!     println!("{} customers", customers.len());
//!     Ok(())
//! }
//! ```

mod error;
pub mod services;

pub use error::TellerkitError;

pub use tellerkit_client::{ApiClient, ApiError, ClientConfig, RefreshError};
pub use tellerkit_protocol::{
    Account, AuthTokens, Customer, DashboardStats, Envelope, MemberPage,
    Message, MessagePage, Outcome, Pagination, ProtocolError, RecentMessage,
    RefreshGrant, User, UserRole,
};
pub use tellerkit_session::{
    FileStorage, MemoryStorage, SessionError, SessionStorage, SessionStore, Slot,
};
#[cfg(feature = "reqwest")]
pub use tellerkit_transport::ReqwestTransport;
pub use tellerkit_transport::{
    HttpRequest, HttpResponse, HttpTransport, Method, TransportError,
};

/// The items nearly every consumer needs.
pub mod prelude {
    pub use crate::services;
    pub use crate::services::auth::{LoginCredentials, SignupRequest};
    pub use crate::TellerkitError;
    pub use tellerkit_client::{ApiClient, ApiError, ClientConfig};
    pub use tellerkit_protocol::{
        Account, AuthTokens, Customer, DashboardStats, MemberPage, Message,
        MessagePage, RecentMessage, User, UserRole,
    };
    pub use tellerkit_session::{FileStorage, MemoryStorage, SessionStore};
    #[cfg(feature = "reqwest")]
    pub use tellerkit_transport::ReqwestTransport;
    pub use tellerkit_transport::{HttpTransport, Method};
}
