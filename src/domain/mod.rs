//! Core types: Note, NoteId (ULID), NotePatch, Clock

mod clock;
mod note;
mod note_id;

pub use clock::{Clock, ManualClock, Millis, SystemClock};
pub use note::{Note, NotePatch, SearchText, UNTITLED};
pub use note_id::{NoteId, ParseNoteIdError, PREFIX_LEN};
