//! Persistent key-value session storage.
//!
//! The client keeps exactly three keys per logged-in role: the raw token,
//! the identity record as JSON, and the login instant. [`SessionStore`] is
//! the injected seam; [`MemoryStore`] backs tests and embedded use,
//! [`FileStore`] is the local-storage analogue for native clients.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use campus_core::error::StoreError;
use campus_core::roles::Role;
use campus_core::types::Timestamp;

/// Shared key holding the login instant (Unix seconds, as a string).
pub const TOKEN_TIMESTAMP_KEY: &str = "tokenTimestamp";

/// The three persisted key names belonging to one role's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    /// Raw compact token (`adminToken`, `teacherToken`, ...).
    pub token: String,
    /// Identity record JSON (`adminData`, `teacherData`, ...).
    pub data: String,
    /// Login instant, shared across roles.
    pub timestamp: &'static str,
}

impl SessionKeys {
    /// Derive the key names for a role.
    pub fn for_role(role: Role) -> Self {
        Self {
            token: format!("{}Token", role.as_str()),
            data: format!("{}Data", role.as_str()),
            timestamp: TOKEN_TIMESTAMP_KEY,
        }
    }
}

/// A synchronous string key-value store holding session state.
///
/// Implementations use interior mutability so a guard and its watcher can
/// share one store behind an `Arc`.
pub trait SessionStore: Send + Sync {
    /// Read a key, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Write all three session keys at login.
pub fn write_session<S: SessionStore + ?Sized>(
    store: &S,
    role: Role,
    token: &str,
    identity_json: &str,
    logged_in_at: Timestamp,
) -> Result<(), StoreError> {
    let keys = SessionKeys::for_role(role);
    store.set(&keys.token, token)?;
    store.set(&keys.data, identity_json)?;
    store.set(keys.timestamp, &logged_in_at.timestamp().to_string())
}

/// Remove all three session keys. Safe to call on an empty store.
pub fn clear_session<S: SessionStore + ?Sized>(store: &S, role: Role) -> Result<(), StoreError> {
    let keys = SessionKeys::for_role(role);
    store.remove(&keys.token)?;
    store.remove(&keys.data)?;
    store.remove(keys.timestamp)
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means another thread panicked mid-write;
        // the map itself is still usable.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object per file, rewritten on every write.
///
/// A missing file loads as empty; a corrupt file is logged and discarded
/// rather than wedging the client in a half-logged-in state.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, loading any existing contents.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Session file is corrupt, starting empty"
                );
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries();
        if entries.remove(key).is_some() {
            return self.persist(&entries);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_session_keys_are_role_specific() {
        let keys = SessionKeys::for_role(Role::Clerk);
        assert_eq!(keys.token, "clerkToken");
        assert_eq!(keys.data, "clerkData");
        assert_eq!(keys.timestamp, "tokenTimestamp");
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("adminToken").unwrap(), None);

        store.set("adminToken", "abc.def.ghi").unwrap();
        assert_eq!(store.get("adminToken").unwrap().as_deref(), Some("abc.def.ghi"));

        store.remove("adminToken").unwrap();
        assert_eq!(store.get("adminToken").unwrap(), None);

        // Removing again is a no-op, not an error.
        store.remove("adminToken").unwrap();
    }

    #[test]
    fn test_write_then_clear_session() {
        let store = MemoryStore::new();
        write_session(&store, Role::Teacher, "a.b.c", "{\"role\":\"teacher\"}", Utc::now())
            .unwrap();

        assert!(store.get("teacherToken").unwrap().is_some());
        assert!(store.get("teacherData").unwrap().is_some());
        assert!(store.get(TOKEN_TIMESTAMP_KEY).unwrap().is_some());

        clear_session(&store, Role::Teacher).unwrap();
        assert_eq!(store.get("teacherToken").unwrap(), None);
        assert_eq!(store.get("teacherData").unwrap(), None);
        assert_eq!(store.get(TOKEN_TIMESTAMP_KEY).unwrap(), None);
    }

    #[test]
    fn test_clear_session_leaves_other_roles_alone() {
        let store = MemoryStore::new();
        store.set("adminToken", "a.b.c").unwrap();
        store.set("teacherToken", "d.e.f").unwrap();

        clear_session(&store, Role::Admin).unwrap();
        assert_eq!(store.get("adminToken").unwrap(), None);
        assert!(store.get("teacherToken").unwrap().is_some());
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = FileStore::open(&path);
            store.set("studentToken", "x.y.z").unwrap();
            store.set(TOKEN_TIMESTAMP_KEY, "1700000000").unwrap();
        }

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("studentToken").unwrap().as_deref(), Some("x.y.z"));
        assert_eq!(
            reopened.get(TOKEN_TIMESTAMP_KEY).unwrap().as_deref(),
            Some("1700000000")
        );

        reopened.remove("studentToken").unwrap();
        let reopened_again = FileStore::open(&path);
        assert_eq!(reopened_again.get("studentToken").unwrap(), None);
    }

    #[test]
    fn test_file_store_tolerates_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("adminToken").unwrap(), None);

        // And it recovers: writes go through normally afterwards.
        store.set("adminToken", "a.b.c").unwrap();
        assert_eq!(store.get("adminToken").unwrap().as_deref(), Some("a.b.c"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("never-written.json"));
        assert_eq!(store.get("clerkToken").unwrap(), None);
    }
}
