//! New note command handler.

use anyhow::Result;

use super::{ensure_saved, open_store};
use crate::cli::NewArgs;
use crate::cli::config::Settings;
use crate::domain::{NoteId, NotePatch};
use crate::store::NoteStore;

/// Creates a note and fills in any initial fields.
///
/// The initial fields go through a regular update, so a note created with a
/// title is written twice: once empty, once filled.
pub fn create_note(store: &mut NoteStore, title: Option<&str>, content: Option<&str>) -> NoteId {
    let id = store.create();

    let patch = NotePatch {
        title: title.map(str::to_string),
        content: content.map(str::to_string),
    };
    if !patch.is_empty() {
        store.update(&id, &patch);
    }
    id
}

pub fn handle_new(args: &NewArgs, settings: &Settings) -> Result<()> {
    let (mut store, status) = open_store(settings)?;

    let id = create_note(&mut store, args.title.as_deref(), args.content.as_deref());
    ensure_saved(&status)?;

    if let Some(note) = store.get(&id) {
        println!("Created: {}", note);
        println!("  id: {}", note.id());
    }
    Ok(())
}
