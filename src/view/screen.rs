//! Screen model built from store and view state.

use serde::Serialize;

use super::time::format_relative;
use super::{NO_CONTENT, Pane, ViewState};
use crate::domain::{Millis, Note, NoteId};
use crate::store::NoteStore;

/// Viewports narrower than this show one pane at a time.
pub const NARROW_WIDTH: usize = 80;

/// Number of content lines shown under each list row.
const PREVIEW_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// List and detail side by side.
    Split,
    ListOnly,
    DetailOnly,
}

/// One entry in the list pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub id: NoteId,
    pub title: String,
    pub preview: Vec<String>,
    pub updated: String,
    pub selected: bool,
}

impl ListRow {
    fn from_note(note: &Note, selected: bool, now: Millis) -> Self {
        let content = note.content();
        let preview = if content.is_empty() {
            vec![NO_CONTENT.to_string()]
        } else {
            let filled: Vec<String> = content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .take(PREVIEW_LINES)
                .map(str::to_string)
                .collect();
            if filled.is_empty() {
                content.lines().take(PREVIEW_LINES).map(str::to_string).collect()
            } else {
                filled
            }
        };

        Self {
            id: note.id().clone(),
            title: note.display_title().to_string(),
            preview,
            updated: format_relative(note.updated_at(), now),
            selected,
        }
    }
}

/// The right-hand pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailPane {
    /// Nothing selected.
    Empty,
    Editor {
        id: NoteId,
        title: String,
        content: String,
        updated: String,
        autofocus_title: bool,
    },
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub layout: Layout,
    pub search: String,
    pub rows: Vec<ListRow>,
    /// Total notes in the store, before filtering.
    pub total: usize,
    pub detail: DetailPane,
}

impl Screen {
    /// Builds the frame for a viewport `width` columns wide.
    pub fn build(store: &NoteStore, state: &ViewState, now: Millis, width: usize) -> Self {
        let selected = store.selected();
        let selected_id = selected.map(Note::id);

        let rows = store
            .query(&state.search)
            .into_iter()
            .map(|note| ListRow::from_note(note, Some(note.id()) == selected_id, now))
            .collect();

        let detail = match selected {
            Some(note) => DetailPane::Editor {
                id: note.id().clone(),
                title: note.title().to_string(),
                content: note.content().to_string(),
                updated: format_relative(note.updated_at(), now),
                autofocus_title: state.just_created,
            },
            None => DetailPane::Empty,
        };

        let layout = if width >= NARROW_WIDTH {
            Layout::Split
        } else if selected.is_some() && state.pane == Pane::Detail {
            Layout::DetailOnly
        } else {
            Layout::ListOnly
        };

        Self {
            layout,
            search: state.search.clone(),
            rows,
            total: store.len(),
            detail,
        }
    }
}
