//! Builder for slot records with sensible defaults.

use chrono::{Duration, Utc};
use jot::domain::{Millis, NoteId};
use serde_json::{Value, json};

/// Builder for a note record as it is stored in the slot.
///
/// Automatically generates an ID and timestamps, with a fluent API
/// for setting optional fields.
#[derive(Debug, Clone)]
pub struct TestNote {
    id: NoteId,
    title: String,
    content: String,
    created_at: Millis,
    updated_at: Millis,
}

impl TestNote {
    /// Creates a new test note with the given title.
    ///
    /// Automatically generates a unique ID and sets timestamps to now.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Sets the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Moves both timestamps into the past.
    pub fn aged(mut self, age: Duration) -> Self {
        let then = Utc::now().timestamp_millis() - age.num_milliseconds();
        self.created_at = then;
        self.updated_at = then;
        self
    }

    /// Returns the full ID.
    pub fn id_str(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the 10-character ID prefix.
    pub fn id_prefix(&self) -> String {
        self.id.prefix().to_string()
    }

    /// The record in slot format.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id.as_str(),
            "title": self.title,
            "content": self.content,
            "createdAt": self.created_at,
            "updatedAt": self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Defaults");
        let record = note.to_json();
        assert_eq!(record["title"], "Defaults");
        assert_eq!(record["content"], "");
        assert_eq!(record["createdAt"], record["updatedAt"]);
        assert_eq!(record["id"].as_str().map(str::len), Some(26));
    }

    #[test]
    fn test_note_explicit_id() {
        let note = TestNote::new("Fixed").id("01HQ3K5M7NXJK4QZPW8V2R6T9Y");
        assert_eq!(note.id_str(), "01HQ3K5M7NXJK4QZPW8V2R6T9Y");
        assert_eq!(note.id_prefix(), "01HQ3K5M7N");
    }

    #[test]
    fn test_note_aged_moves_timestamps_back() {
        let fresh = TestNote::new("Fresh").to_json();
        let old = TestNote::new("Old").aged(Duration::days(3)).to_json();
        let diff = fresh["updatedAt"].as_i64().unwrap() - old["updatedAt"].as_i64().unwrap();
        assert!(diff >= Duration::days(3).num_milliseconds());
    }
}
