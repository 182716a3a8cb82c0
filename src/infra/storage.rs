//! Key-value slots: a directory of JSON files, or a map in memory.

use std::collections::HashMap;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised by a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid slot key '{key}': keys may only contain letters, digits, '-' and '_'")]
    InvalidKey { key: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid encoding in {path}: invalid UTF-8 at byte {valid_up_to}")]
    InvalidEncoding { path: PathBuf, valid_up_to: usize },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl StorageError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied { path: path.into() },
            _ => StorageError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// A string-valued key-value store with whole-value reads and writes.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Checks that `key` is non-empty and only uses `[A-Za-z0-9_-]`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey { key: key.into() })
    }
}

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go through a temporary file in the same directory followed by an
/// atomic rename, so a slot is never observed half-written.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) the directory at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotADirectory` if `dir` exists but is a file.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        if dir.exists() && !dir.is_dir() {
            return Err(StorageError::NotADirectory { path: dir });
        }
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::from_io(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let path = self.slot_path(key);

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::from_io(&path, e)),
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StorageError::InvalidEncoding {
                path,
                valid_up_to: e.utf8_error().valid_up_to(),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.slot_path(key);

        let mut temp =
            NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::from_io(&path, e))?;
        temp.write_all(value.as_bytes())
            .map_err(|e| StorageError::from_io(&path, e))?;
        temp.persist(&path).map_err(|e| StorageError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        tracing::trace!(path = %path.display(), bytes = value.len(), "wrote slot");
        Ok(())
    }
}

/// In-memory store, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with one slot already filled.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.slots.insert(key.into(), value.into());
        Ok(())
    }
}
