//! Note record and the partial update applied to it.

use crate::domain::{Millis, NoteId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown in place of an empty title.
pub const UNTITLED: &str = "Untitled Note";

/// A single note.
///
/// Serialized with camelCase keys and epoch-millisecond timestamps:
///
/// ```json
/// {"id":"01HQ3K5M7NXJK4QZPW8V2R6T9Y","title":"","content":"","createdAt":0,"updatedAt":0}
/// ```
///
/// # Invariants
/// - `id` and `created_at` never change after creation
/// - `created_at <= updated_at`
/// - `updated_at` never moves backwards
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, NoteId, NotePatch};
///
/// let mut note = Note::new(NoteId::new(), 1_000);
/// note.apply(&NotePatch::title("Groceries"), 2_000);
/// assert_eq!(note.title(), "Groceries");
/// assert_eq!(note.updated_at(), 2_000);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    created_at: Millis,
    updated_at: Millis,
}

impl Note {
    /// Creates an empty note stamped with `now` for both timestamps.
    pub fn new(id: NoteId, now: Millis) -> Self {
        Self {
            id,
            title: String::new(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a note from stored parts.
    ///
    /// An `updated_at` earlier than `created_at` is raised to `created_at`.
    pub fn from_parts(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: Millis,
        updated_at: Millis,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> Millis {
        self.created_at
    }

    pub fn updated_at(&self) -> Millis {
        self.updated_at
    }

    /// Merges `patch` into this note and bumps `updated_at`.
    ///
    /// The new `updated_at` is `max(now, previous)`, so a clock stepping back
    /// cannot break ordering.
    pub fn apply(&mut self, patch: &NotePatch, now: Millis) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(content) = &patch.content {
            self.content.clone_from(content);
        }
        self.updated_at = now.max(self.updated_at);
    }

    /// Returns true if the title or content contains `needle`.
    ///
    /// `needle` must already be lowercased; see [`SearchText`].
    pub fn matches(&self, needle: &SearchText) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle.as_str())
            || self.content.to_lowercase().contains(needle.as_str())
    }

    /// The title, or [`UNTITLED`] when it is empty.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Repairs `updated_at < created_at` in records read from storage.
    pub(crate) fn normalize(&mut self) {
        self.updated_at = self.updated_at.max(self.created_at);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.display_title(), self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// A partial update: only the fields that are `Some` are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    /// A patch that only sets the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    /// A patch that only sets the content.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Lowercased search text, prepared once per query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchText(String);

impl SearchText {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
