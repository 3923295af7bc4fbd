//! Persistent key-value storage for the session token and user identity.
//!
//! The auth store writes two fixed keys: [`SESSION_KEY`] holds the raw token
//! and [`USER_KEY`] holds the user as JSON (`{"_id": .., "username": ..}`).
//! Both are removed on logout.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::SdkError;

/// Storage key for the session token.
pub const SESSION_KEY: &str = "sessionId";

/// Storage key for the serialized user identity.
pub const USER_KEY: &str = "user";

/// Synchronous string key-value store.
pub trait SessionStorage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, SdkError>;
    fn store(&self, key: &str, value: &str) -> Result<(), SdkError>;
    fn remove(&self, key: &str) -> Result<(), SdkError>;
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ─── MemoryStorage ───────────────────────────────────────────────────────────

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, SdkError> {
        Ok(lock(&self.entries).get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), SdkError> {
        lock(&self.entries).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SdkError> {
        lock(&self.entries).remove(key);
        Ok(())
    }
}

// ─── FileStorage ─────────────────────────────────────────────────────────────

/// Storage backed by a single JSON object on disk.
///
/// The file is read once on open and rewritten in full on every change.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or lazily create) the storage file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => HashMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(SdkError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), SdkError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SdkError::Storage(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }
        let text = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, text).map_err(|e| {
            SdkError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, SdkError> {
        Ok(lock(&self.entries).get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), SdkError> {
        let mut entries = lock(&self.entries);
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SdkError> {
        let mut entries = lock(&self.entries);
        if entries.contains_key(key) {
            let mut next = entries.clone();
            next.remove(key);
            self.flush(&next)?;
            *entries = next;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "challenge-sdk-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load(SESSION_KEY).unwrap().is_none());
        storage.store(SESSION_KEY, "tok").unwrap();
        assert_eq!(storage.load(SESSION_KEY).unwrap().as_deref(), Some("tok"));
        storage.remove(SESSION_KEY).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_memory_storage_clones_share() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.store(USER_KEY, "{}").unwrap();
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_file_storage_persists_across_opens() {
        let path = temp_path("persist");
        let _ = std::fs::remove_file(&path);

        {
            let storage = FileStorage::open(&path).unwrap();
            storage.store(SESSION_KEY, "tok_file").unwrap();
        }

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(
            reopened.load(SESSION_KEY).unwrap().as_deref(),
            Some("tok_file")
        );
        reopened.remove(SESSION_KEY).unwrap();

        let cleared = FileStorage::open(&path).unwrap();
        assert!(cleared.load(SESSION_KEY).unwrap().is_none());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_storage_failed_write_keeps_previous_state() {
        let path = temp_path("unwritable");
        let _ = std::fs::remove_dir_all(&path);
        let storage = FileStorage::open(&path).unwrap();

        // A directory at the file path makes every flush fail.
        std::fs::create_dir(&path).unwrap();
        assert!(storage.store(SESSION_KEY, "tok").is_err());
        assert!(storage.load(SESSION_KEY).unwrap().is_none());

        std::fs::remove_dir(&path).unwrap();
        storage.store(USER_KEY, "{}").unwrap();
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        assert!(storage.remove(USER_KEY).is_err());
        assert_eq!(storage.load(USER_KEY).unwrap().as_deref(), Some("{}"));

        let _ = std::fs::remove_dir(&path);
    }

    #[test]
    fn test_file_storage_rejects_corrupt_file() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json").unwrap();
        assert!(FileStorage::open(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
