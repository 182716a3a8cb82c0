//! Event dispatch from user input to store operations.

use super::{Pane, Screen, ViewState};
use crate::domain::{Millis, NoteId, NotePatch};
use crate::store::{Confirm, DeleteOutcome, NoteStore};

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The header's "new note" action.
    NewNote,
    /// Click on a list row.
    Select(NoteId),
    /// Narrow-viewport back action.
    Back,
    /// Click on a row's delete affordance. Never selects the row.
    Delete(NoteId),
    /// A keystroke in the title field of the editor.
    EditTitle(String),
    /// A keystroke in the content field of the editor.
    EditContent(String),
    /// A keystroke in the search box.
    Search(String),
}

/// What dispatching an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Created(NoteId),
    Changed,
    /// The event had nothing to act on (e.g. an edit with no selection).
    Ignored,
    Delete(DeleteOutcome),
}

/// The store plus UI-local state, driven one event at a time.
pub struct Session {
    store: NoteStore,
    state: ViewState,
}

impl Session {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            state: ViewState::default(),
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Applies `event`. `confirm` is only consulted for deletes.
    pub fn dispatch(&mut self, event: ViewEvent, confirm: &mut dyn Confirm) -> EventOutcome {
        if event != ViewEvent::NewNote {
            self.state.just_created = false;
        }

        match event {
            ViewEvent::NewNote => {
                let id = self.store.create();
                self.state.just_created = true;
                self.state.pane = Pane::Detail;
                EventOutcome::Created(id)
            }
            ViewEvent::Select(id) => {
                if self.store.select(&id) {
                    self.state.pane = Pane::Detail;
                    EventOutcome::Changed
                } else {
                    EventOutcome::Ignored
                }
            }
            ViewEvent::Back => {
                self.state.pane = Pane::List;
                EventOutcome::Changed
            }
            ViewEvent::Delete(id) => {
                let outcome = self.store.delete(&id, confirm);
                if outcome == DeleteOutcome::Deleted && self.store.selected().is_none() {
                    self.state.pane = Pane::List;
                }
                EventOutcome::Delete(outcome)
            }
            ViewEvent::EditTitle(title) => self.edit_selected(NotePatch::title(title)),
            ViewEvent::EditContent(content) => self.edit_selected(NotePatch::content(content)),
            ViewEvent::Search(text) => {
                self.state.search = text;
                EventOutcome::Changed
            }
        }
    }

    /// Builds the current frame.
    pub fn screen(&self, now: Millis, width: usize) -> Screen {
        Screen::build(&self.store, &self.state, now, width)
    }

    fn edit_selected(&mut self, patch: NotePatch) -> EventOutcome {
        let Some(id) = self.store.selected_id().cloned() else {
            return EventOutcome::Ignored;
        };
        if self.store.update(&id, &patch) {
            EventOutcome::Changed
        } else {
            EventOutcome::Ignored
        }
    }
}
