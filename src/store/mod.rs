//! In-memory note collection and selection.
//!
//! [`NoteStore`] is the only mutator of the collection. Every mutation is
//! reported to the registered [`StoreObserver`]s together with the full
//! collection, which is how persistence and re-rendering hook in.

mod observer;

pub use observer::{AlwaysConfirm, Change, Confirm, StoreObserver};

use std::collections::HashSet;

use crate::domain::{Clock, Note, NoteId, NotePatch, SearchText, SystemClock};

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The note was removed.
    Deleted,
    /// The user declined; nothing changed.
    Cancelled,
    /// No note has that id; nothing changed and no prompt was shown.
    NotFound,
}

/// Ordered note collection (newest-created first) plus the selected note.
///
/// The selection is held as an id, so the editor always reads the canonical
/// entry and can never drift from it.
pub struct NoteStore {
    notes: Vec<Note>,
    selected: Option<NoteId>,
    clock: Box<dyn Clock>,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl NoteStore {
    /// Creates an empty store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Creates an empty store on the given clock.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            notes: Vec::new(),
            selected: None,
            clock,
            observers: Vec::new(),
        }
    }

    /// Creates a store holding previously saved notes, in their saved order.
    ///
    /// Observers are not notified. Later duplicates of an id are dropped.
    pub fn from_notes(notes: Vec<Note>, clock: Box<dyn Clock>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(notes.len());
        for mut note in notes {
            if !seen.insert(note.id().clone()) {
                tracing::warn!(id = %note.id(), "dropping note with duplicate id");
                continue;
            }
            note.normalize();
            kept.push(note);
        }

        let mut store = Self::with_clock(clock);
        store.notes = kept;
        store
    }

    /// Registers an observer for all subsequent changes.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// All notes, newest-created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns the selected note, read from the collection.
    pub fn selected(&self) -> Option<&Note> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn selected_id(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    /// Creates an empty note, prepends it and selects it.
    pub fn create(&mut self) -> NoteId {
        let now = self.clock.now_millis();
        let note = Note::new(NoteId::new(), now);
        let id = note.id().clone();

        self.notes.insert(0, note);
        self.selected = Some(id.clone());
        tracing::debug!(%id, "created note");

        self.notify(Change::Created(id.clone()));
        id
    }

    /// Merges `patch` into the note with `id`.
    ///
    /// Returns `false` (and changes nothing) if there is no such note.
    pub fn update(&mut self, id: &NoteId, patch: &NotePatch) -> bool {
        let now = self.clock.now_millis();
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            tracing::debug!(%id, "update ignored: no such note");
            return false;
        };

        note.apply(patch, now);
        tracing::trace!(%id, updated_at = note.updated_at(), "updated note");

        self.notify(Change::Updated(id.clone()));
        true
    }

    /// Deletes the note with `id` once `confirm` agrees.
    ///
    /// Clears the selection if the deleted note was selected.
    pub fn delete(&mut self, id: &NoteId, confirm: &mut dyn Confirm) -> DeleteOutcome {
        let Some(pos) = self.notes.iter().position(|n| n.id() == id) else {
            return DeleteOutcome::NotFound;
        };

        let prompt = format!(
            "Delete \"{}\"? This cannot be undone.",
            self.notes[pos].display_title()
        );
        if !confirm.confirm(&prompt) {
            tracing::debug!(%id, "delete cancelled");
            return DeleteOutcome::Cancelled;
        }

        self.notes.remove(pos);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        tracing::debug!(%id, "deleted note");

        self.notify(Change::Deleted(id.clone()));
        DeleteOutcome::Deleted
    }

    /// Notes whose title or content contains `search`, ignoring case.
    ///
    /// An empty search matches every note. Collection order is preserved.
    pub fn query(&self, search: &str) -> Vec<&Note> {
        let needle = SearchText::new(search);
        self.notes.iter().filter(|n| n.matches(&needle)).collect()
    }

    /// Notes whose id starts with `prefix` (ASCII case-insensitive).
    pub fn find_by_id_prefix(&self, prefix: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.id().matches_prefix(prefix))
            .collect()
    }

    /// Selects the note with `id`. Returns `false` if there is no such note.
    pub fn select(&mut self, id: &NoteId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if self.selected.as_ref() != Some(id) {
            self.selected = Some(id.clone());
            self.notify(Change::Selected(Some(id.clone())));
        }
        true
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.notify(Change::Selected(None));
        }
    }

    fn notify(&mut self, change: Change) {
        for observer in &mut self.observers {
            observer.on_change(&change, &self.notes);
        }
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
