//! Mirrors the note collection into a single durable slot.
//!
//! The slot holds the whole collection as a JSON array and is overwritten on
//! every change. Loading never fails: unreadable or malformed data is logged
//! and treated as an empty collection.

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use super::storage::{KeyValueStore, StorageError};
use crate::domain::Note;
use crate::store::{Change, StoreObserver};

/// Default slot key.
pub const DEFAULT_SLOT: &str = "notes";

/// Errors while moving notes in or out of the slot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("malformed notes in slot '{key}': {source}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize notes: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// What a call to [`PersistenceBridge::save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written,
    /// Empty collection and nothing stored yet, so nothing was written.
    Skipped,
}

/// Shared record of the most recent failed write.
///
/// Writes triggered through the observer path have no caller to return an
/// error to; the failure lands here instead.
#[derive(Debug, Clone, Default)]
pub struct SaveStatus(Rc<RefCell<Option<String>>>);

impl SaveStatus {
    /// Returns and clears the last write error, if any.
    pub fn take_error(&self) -> Option<String> {
        self.0.borrow_mut().take()
    }

    fn record(&self, message: String) {
        *self.0.borrow_mut() = Some(message);
    }
}

/// Loads the collection at startup and writes it back after each change.
pub struct PersistenceBridge<S> {
    storage: S,
    key: String,
    status: SaveStatus,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            status: SaveStatus::default(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Handle for checking write failures after the bridge is subscribed.
    pub fn status(&self) -> SaveStatus {
        self.status.clone()
    }

    /// Loads the saved collection, or an empty one if there is none or it
    /// cannot be read.
    pub fn load(&self) -> Vec<Note> {
        match self.try_load() {
            Ok(notes) => {
                tracing::debug!(key = %self.key, count = notes.len(), "loaded notes");
                notes
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding stored notes");
                Vec::new()
            }
        }
    }

    /// Loads the saved collection, reporting why it could not be read.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Storage` if the slot cannot be read and
    /// `PersistenceError::Deserialization` if it does not hold a note array.
    pub fn try_load(&self) -> Result<Vec<Note>, PersistenceError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| PersistenceError::Deserialization {
            key: self.key.clone(),
            source,
        })
    }

    /// Overwrites the slot with the whole collection.
    ///
    /// An empty collection is not written when the slot has never held a
    /// value.
    pub fn save(&mut self, notes: &[Note]) -> Result<SaveOutcome, PersistenceError> {
        if notes.is_empty() && self.storage.get(&self.key)?.is_none() {
            return Ok(SaveOutcome::Skipped);
        }

        let json = serde_json::to_string(notes).map_err(PersistenceError::Serialization)?;
        self.storage.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, count = notes.len(), "saved notes");
        Ok(SaveOutcome::Written)
    }
}

impl<S: KeyValueStore> StoreObserver for PersistenceBridge<S> {
    fn on_change(&mut self, change: &Change, notes: &[Note]) {
        if !change.touches_collection() {
            return;
        }
        if let Err(err) = self.save(notes) {
            tracing::error!(key = %self.key, error = %err, "failed to save notes");
            self.status.record(err.to_string());
        }
    }
}
