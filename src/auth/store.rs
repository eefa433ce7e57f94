//! Persistence adapters for cached tokens.
//!
//! The session persists tokens through the [`TokenStore`] trait so the
//! backing medium is injectable: an in-memory map for tests and short-lived
//! processes, or a JSON file on disk standing in for device-local storage.
//!
//! Stores hold plain string values under the fixed keys from
//! [`TokenKind::storage_key`]; there is no schema versioning, matching the
//! original client's key-value storage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::auth::token::TokenKind;

/// Errors raised by a token store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("Token storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted contents could not be parsed.
    #[error("Token storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persistence adapter for cached tokens.
///
/// Implementations must be `Send + Sync`; the session may be shared across
/// async tasks.
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    /// Loads the token of the given kind, if one is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be read.
    fn load(&self, kind: TokenKind) -> Result<Option<String>, StoreError>;

    /// Persists the token of the given kind, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    fn save(&self, kind: TokenKind, token: &str) -> Result<(), StoreError>;

    /// Removes the token of the given kind. Removing an absent token is a
    /// no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    fn delete(&self, kind: TokenKind) -> Result<(), StoreError>;
}

/// In-memory token store.
///
/// Holds tokens for the lifetime of the process only. This is the store of
/// choice for tests and for callers that do not want credentials on disk.
///
/// # Example
///
/// ```rust
/// use soanch_api::auth::{MemoryTokenStore, TokenKind, TokenStore};
///
/// let store = MemoryTokenStore::new();
/// store.save(TokenKind::Private, "token-a").unwrap();
/// assert_eq!(store.load(TokenKind::Private).unwrap(), Some("token-a".to_string()));
///
/// store.delete(TokenKind::Private).unwrap();
/// assert_eq!(store.load(TokenKind::Private).unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<&'static str, String>>,
}

impl MemoryTokenStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self, kind: TokenKind) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(kind.storage_key()).cloned())
    }

    fn save(&self, kind: TokenKind, token: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(kind.storage_key(), token.to_string());
        Ok(())
    }

    fn delete(&self, kind: TokenKind) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.remove(kind.storage_key());
        Ok(())
    }
}

/// File-backed token store.
///
/// Persists tokens as a small JSON object (storage key to token string) at a
/// caller-chosen path, the desktop/server equivalent of the mobile client's
/// device storage. Parent directories are created on first write.
///
/// Reads and writes are whole-file; concurrent writers from separate
/// processes can lose an update, the same inherited limitation as the
/// original client's storage.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by the JSON file at `path`.
    ///
    /// The file does not need to exist yet; it is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self, kind: TokenKind) -> Result<Option<String>, StoreError> {
        let entries = self.read_entries()?;
        Ok(entries.get(kind.storage_key()).cloned())
    }

    fn save(&self, kind: TokenKind, token: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(kind.storage_key().to_string(), token.to_string());
        self.write_entries(&entries)
    }

    fn delete(&self, kind: TokenKind) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(kind.storage_key()).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();

        assert_eq!(store.load(TokenKind::Private).unwrap(), None);

        store.save(TokenKind::Private, "token-a").unwrap();
        assert_eq!(
            store.load(TokenKind::Private).unwrap(),
            Some("token-a".to_string())
        );

        // Kinds are independent
        assert_eq!(store.load(TokenKind::Public).unwrap(), None);
    }

    #[test]
    fn test_memory_store_save_replaces_previous_value() {
        let store = MemoryTokenStore::new();
        store.save(TokenKind::Public, "old").unwrap();
        store.save(TokenKind::Public, "new").unwrap();
        assert_eq!(
            store.load(TokenKind::Public).unwrap(),
            Some("new".to_string())
        );
    }

    #[test]
    fn test_memory_store_delete_is_idempotent() {
        let store = MemoryTokenStore::new();
        store.save(TokenKind::Private, "token").unwrap();

        store.delete(TokenKind::Private).unwrap();
        assert_eq!(store.load(TokenKind::Private).unwrap(), None);

        // Deleting again is a no-op
        store.delete(TokenKind::Private).unwrap();
    }

    #[test]
    fn test_file_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("tokens.json"));

        assert_eq!(store.load(TokenKind::Private).unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("tokens.json"));

        store.save(TokenKind::Private, "oauth-token").unwrap();
        store.save(TokenKind::Public, "public-token").unwrap();

        assert_eq!(
            store.load(TokenKind::Private).unwrap(),
            Some("oauth-token".to_string())
        );
        assert_eq!(
            store.load(TokenKind::Public).unwrap(),
            Some("public-token".to_string())
        );
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        FileTokenStore::new(&path)
            .save(TokenKind::Private, "survives")
            .unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(
            reopened.load(TokenKind::Private).unwrap(),
            Some("survives".to_string())
        );
    }

    #[test]
    fn test_file_store_delete_leaves_other_kind_intact() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("tokens.json"));

        store.save(TokenKind::Private, "a").unwrap();
        store.save(TokenKind::Public, "b").unwrap();
        store.delete(TokenKind::Private).unwrap();

        assert_eq!(store.load(TokenKind::Private).unwrap(), None);
        assert_eq!(store.load(TokenKind::Public).unwrap(), Some("b".to_string()));
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/dir/tokens.json"));

        store.save(TokenKind::Public, "token").unwrap();
        assert_eq!(
            store.load(TokenKind::Public).unwrap(),
            Some("token".to_string())
        );
    }

    #[test]
    fn test_file_store_corrupt_contents_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(matches!(
            store.load(TokenKind::Private),
            Err(StoreError::Corrupt(_))
        ));
    }
}
