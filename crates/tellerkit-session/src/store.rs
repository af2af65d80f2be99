//! The session store: single source of truth for the logged-in session.
//!
//! Holds the current user identity and token pair in memory, hydrated once
//! from durable storage at startup, and writes every change through to
//! storage in the same step. It's responsible for:
//! - Resuming a session after a restart (hydration)
//! - Recording a login (user + optional tokens, atomically)
//! - Replacing the token pair when the client refreshes
//! - Clearing everything on logout or unrecoverable refresh failure
//!
//! # Concurrency note
//!
//! Reads and writes go through a `std::sync::Mutex` that is never held
//! across an await point. Storage writes happen under the same lock as the
//! in-memory update, so a read after a write observes the new value
//! immediately and no reader ever sees user and tokens out of step.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use tellerkit_protocol::{AuthTokens, User};

use crate::{SessionError, SessionStorage, Slot};

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    tokens: Option<AuthTokens>,
}

/// Who is logged in, and with what credentials.
///
/// ## Lifecycle
///
/// ```text
/// open() ──→ login() ──→ update_tokens() ──→ logout()
///   │           │              │                │
///   ▼           ▼              ▼                ▼
/// [restored] [authenticated] [tokens replaced] [cleared]
/// ```
///
/// A session counts as authenticated only when *both* the user and the
/// token pair are present.
pub struct SessionStore {
    state: Mutex<SessionState>,
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    /// Opens the store, hydrating once from the given storage.
    ///
    /// Missing slots, unreadable slots, and malformed persisted JSON all
    /// hydrate as "absent" — a broken session file means you're logged
    /// out, not that the app can't start.
    pub fn open(storage: impl SessionStorage) -> Self {
        let user: Option<User> = hydrate(&storage, Slot::User);
        let tokens: Option<AuthTokens> = hydrate(&storage, Slot::Tokens);

        tracing::debug!(
            has_user = user.is_some(),
            has_tokens = tokens.is_some(),
            "session store hydrated"
        );

        Self {
            state: Mutex::new(SessionState { user, tokens }),
            storage: Box::new(storage),
        }
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<User> {
        self.state.lock().expect("session lock").user.clone()
    }

    /// The current token pair, if any.
    pub fn tokens(&self) -> Option<AuthTokens> {
        self.state.lock().expect("session lock").tokens.clone()
    }

    /// `true` iff both the user and the token pair are present.
    pub fn is_authenticated(&self) -> bool {
        let state = self.state.lock().expect("session lock");
        state.user.is_some() && state.tokens.is_some()
    }

    /// Records a login: sets the user unconditionally and, if tokens are
    /// provided, persists and sets them too. If no tokens are provided,
    /// any persisted tokens are cleared — a user record without
    /// credentials must not resurrect stale tokens on the next restart.
    pub fn login(
        &self,
        user: User,
        tokens: Option<AuthTokens>,
    ) -> Result<(), SessionError> {
        let user_json =
            serde_json::to_string(&user).map_err(SessionError::Serialize)?;
        let tokens_json = tokens
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(SessionError::Serialize)?;

        let mut state = self.state.lock().expect("session lock");
        self.storage.store(Slot::User, &user_json)?;
        match &tokens_json {
            Some(json) => self.storage.store(Slot::Tokens, json)?,
            None => self.storage.remove(Slot::Tokens)?,
        }
        state.user = Some(user);
        state.tokens = tokens;

        tracing::info!(
            user = %state.user.as_ref().map(|u| u.id.as_str()).unwrap_or_default(),
            "session logged in"
        );
        Ok(())
    }

    /// Replaces the token pair wholesale. Does not alter the user.
    ///
    /// The refresh flow passes the carried-forward refresh token here, so
    /// from the caller's point of view the previously stored refresh token
    /// survives a refresh unchanged.
    pub fn update_tokens(&self, tokens: AuthTokens) -> Result<(), SessionError> {
        let json =
            serde_json::to_string(&tokens).map_err(SessionError::Serialize)?;

        let mut state = self.state.lock().expect("session lock");
        self.storage.store(Slot::Tokens, &json)?;
        state.tokens = Some(tokens);

        tracing::debug!("session tokens replaced");
        Ok(())
    }

    /// Clears both the user and the tokens, in memory and in storage.
    pub fn logout(&self) -> Result<(), SessionError> {
        let mut state = self.state.lock().expect("session lock");
        self.storage.remove(Slot::User)?;
        self.storage.remove(Slot::Tokens)?;
        state.user = None;
        state.tokens = None;

        tracing::info!("session logged out");
        Ok(())
    }
}

/// Reads and deserializes one slot, degrading every failure to `None`.
fn hydrate<T: DeserializeOwned>(
    storage: &impl SessionStorage,
    slot: Slot,
) -> Option<T> {
    let raw = match storage.load(slot) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(slot = slot.key(), error = %e, "session slot unreadable, treating as absent");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(slot = slot.key(), error = %e, "persisted session data malformed, treating as absent");
            None
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use tellerkit_protocol::UserRole;

    use super::*;
    use crate::MemoryStorage;

    // -- Helpers ----------------------------------------------------------

    fn sample_user() -> User {
        User {
            id: "u-1".into(),
            email: "ops@example.com".into(),
            display_name: "ops".into(),
            role: UserRole::Admin,
        }
    }

    fn sample_tokens(tag: &str) -> AuthTokens {
        AuthTokens {
            access_token: format!("at-{tag}"),
            refresh_token: format!("rt-{tag}"),
            expires_in: 900,
        }
    }

    fn empty_store() -> SessionStore {
        SessionStore::open(MemoryStorage::new())
    }

    // =====================================================================
    // login() / logout() round trip
    // =====================================================================

    #[test]
    fn test_login_round_trips_user_and_tokens() {
        let store = empty_store();

        store
            .login(sample_user(), Some(sample_tokens("a")))
            .expect("login should succeed");

        assert_eq!(store.user(), Some(sample_user()));
        assert_eq!(store.tokens(), Some(sample_tokens("a")));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_logout_clears_both_reads_to_none() {
        let store = empty_store();
        store.login(sample_user(), Some(sample_tokens("a"))).unwrap();

        store.logout().expect("logout should succeed");

        assert_eq!(store.user(), None);
        assert_eq!(store.tokens(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_without_tokens_is_not_authenticated() {
        // A user record alone isn't a usable session.
        let store = empty_store();

        store.login(sample_user(), None).unwrap();

        assert_eq!(store.user(), Some(sample_user()));
        assert_eq!(store.tokens(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_without_tokens_clears_previous_tokens() {
        let store = empty_store();
        store.login(sample_user(), Some(sample_tokens("a"))).unwrap();

        // Re-login without tokens: the old pair must not linger.
        store.login(sample_user(), None).unwrap();

        assert_eq!(store.tokens(), None);
    }

    // =====================================================================
    // update_tokens()
    // =====================================================================

    #[test]
    fn test_update_tokens_replaces_pair_wholesale() {
        let store = empty_store();
        store.login(sample_user(), Some(sample_tokens("a"))).unwrap();

        store.update_tokens(sample_tokens("b")).unwrap();

        assert_eq!(store.tokens(), Some(sample_tokens("b")));
    }

    #[test]
    fn test_update_tokens_does_not_alter_user() {
        let store = empty_store();
        store.login(sample_user(), Some(sample_tokens("a"))).unwrap();

        store.update_tokens(sample_tokens("b")).unwrap();

        assert_eq!(store.user(), Some(sample_user()));
    }

    #[test]
    fn test_update_tokens_carrying_old_refresh_preserves_it() {
        // The refresh flow builds the new pair with the old refresh token;
        // the store must hand it back unchanged.
        let store = empty_store();
        store.login(sample_user(), Some(sample_tokens("a"))).unwrap();

        let refreshed = AuthTokens {
            access_token: "at-new".into(),
            refresh_token: sample_tokens("a").refresh_token,
            expires_in: 900,
        };
        store.update_tokens(refreshed).unwrap();

        assert_eq!(store.tokens().unwrap().refresh_token, "rt-a");
        assert_eq!(store.tokens().unwrap().access_token, "at-new");
    }

    #[test]
    fn test_reads_after_write_observe_new_value_immediately() {
        let store = empty_store();
        store.login(sample_user(), Some(sample_tokens("a"))).unwrap();

        store.update_tokens(sample_tokens("b")).unwrap();

        // No eventual-consistency window: the very next read sees it.
        assert_eq!(store.tokens().unwrap().access_token, "at-b");
    }

    // =====================================================================
    // Hydration
    // =====================================================================

    #[test]
    fn test_open_restores_persisted_session() {
        let storage = MemoryStorage::new();
        storage
            .store(
                Slot::User,
                &serde_json::to_string(&sample_user()).unwrap(),
            )
            .unwrap();
        storage
            .store(
                Slot::Tokens,
                &serde_json::to_string(&sample_tokens("a")).unwrap(),
            )
            .unwrap();

        let store = SessionStore::open(storage);

        assert_eq!(store.user(), Some(sample_user()));
        assert_eq!(store.tokens(), Some(sample_tokens("a")));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_open_with_empty_storage_is_logged_out() {
        let store = empty_store();
        assert_eq!(store.user(), None);
        assert_eq!(store.tokens(), None);
    }

    #[test]
    fn test_open_tolerates_malformed_persisted_data() {
        let storage = MemoryStorage::new();
        storage.store(Slot::User, "definitely not json{{").unwrap();
        storage.store(Slot::Tokens, "[1, 2, 3]").unwrap();

        let store = SessionStore::open(storage);

        // Malformed slots hydrate as absent, never as an error.
        assert_eq!(store.user(), None);
        assert_eq!(store.tokens(), None);
    }

    #[test]
    fn test_open_with_tokens_but_no_user_is_not_authenticated() {
        let storage = MemoryStorage::new();
        storage
            .store(
                Slot::Tokens,
                &serde_json::to_string(&sample_tokens("a")).unwrap(),
            )
            .unwrap();

        let store = SessionStore::open(storage);

        assert!(!store.is_authenticated());
        assert_eq!(store.tokens(), Some(sample_tokens("a")));
    }

    #[test]
    fn test_logout_then_reopen_stays_logged_out() {
        // Persistence must reflect logout, not just memory.
        let storage = MemoryStorage::new();
        storage
            .store(
                Slot::User,
                &serde_json::to_string(&sample_user()).unwrap(),
            )
            .unwrap();

        let store = SessionStore::open(storage);
        store.logout().unwrap();

        // The same backend would now hydrate empty. We can't reuse the
        // moved storage, so assert through the store's own reads.
        assert_eq!(store.user(), None);
        assert_eq!(store.tokens(), None);
    }
}
