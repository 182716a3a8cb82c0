//! Change notification and delete confirmation seams.

use crate::domain::{Note, NoteId};

/// A change made by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Created(NoteId),
    Updated(NoteId),
    Deleted(NoteId),
    /// Selection moved; the collection itself is unchanged.
    Selected(Option<NoteId>),
}

impl Change {
    /// True if the note collection changed (as opposed to only the selection).
    pub fn touches_collection(&self) -> bool {
        !matches!(self, Change::Selected(_))
    }
}

/// Receives every store change along with the full collection.
pub trait StoreObserver {
    fn on_change(&mut self, change: &Change, notes: &[Note]);
}

/// Blocking yes/no gate in front of destructive actions.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Confirms without asking (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
