//! Durable storage and the persistence bridge

mod persistence;
mod storage;

pub use persistence::{DEFAULT_SLOT, PersistenceBridge, PersistenceError, SaveOutcome, SaveStatus};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, validate_key};
