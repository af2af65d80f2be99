//! Durable storage backends for session state.
//!
//! Persistence is deliberately primitive: two named string slots, one for
//! the serialized user record and one for the serialized token pair.
//! Absence of either slot means "logged out". The slots are written
//! synchronously with the in-memory update so a reader never observes a
//! torn state.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::SessionError;

/// The two persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The serialized [`User`](tellerkit_protocol::User) record.
    User,
    /// The serialized [`AuthTokens`](tellerkit_protocol::AuthTokens) pair.
    Tokens,
}

impl Slot {
    /// Stable storage key for this slot.
    pub fn key(self) -> &'static str {
        match self {
            Slot::User => "user",
            Slot::Tokens => "tokens",
        }
    }
}

/// A durable key/value home for the two session slots.
///
/// Implementations are synchronous on purpose: the store updates memory and
/// storage in one step, with no await point in between, so no concurrent
/// request can see one without the other.
pub trait SessionStorage: Send + Sync + 'static {
    /// Reads a slot. `Ok(None)` means the slot was never written or was
    /// removed.
    fn load(&self, slot: Slot) -> Result<Option<String>, SessionError>;

    /// Writes a slot, replacing any previous value.
    fn store(&self, slot: Slot, value: &str) -> Result<(), SessionError>;

    /// Removes a slot. Removing an absent slot is not an error.
    fn remove(&self, slot: Slot) -> Result<(), SessionError>;
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// In-process storage. Nothing survives the process; useful for tests and
/// for tools that should never write credentials to disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<Slot, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, slot: Slot) -> Result<Option<String>, SessionError> {
        Ok(self.slots.lock().expect("storage lock").get(&slot).cloned())
    }

    fn store(&self, slot: Slot, value: &str) -> Result<(), SessionError> {
        self.slots
            .lock()
            .expect("storage lock")
            .insert(slot, value.to_string());
        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<(), SessionError> {
        self.slots.lock().expect("storage lock").remove(&slot);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// File-backed storage: one JSON file per slot under a directory.
///
/// The directory is created on the first write. A missing file reads as an
/// absent slot, so a fresh directory behaves exactly like a logged-out
/// session.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at `dir`. The directory need not exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, slot: Slot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, slot: Slot) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }

    fn store(&self, slot: Slot, value: &str) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        std::fs::write(self.path(slot), value)
            .map_err(|e| SessionError::Storage(e.to_string()))
    }

    fn remove(&self, slot: Slot) -> Result<(), SessionError> {
        match std::fs::remove_file(self.path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }
}
