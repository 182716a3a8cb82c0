//! Note resolution utilities.

use anyhow::{Result, bail};

use crate::domain::{Note, NoteId};
use crate::store::NoteStore;

/// Shortest prefix accepted when resolving an id.
const MIN_PREFIX_LEN: usize = 4;

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<&'a Note>),
    /// No notes matched.
    NotFound,
}

/// Resolves a note identifier to a unique note.
///
/// Resolution order:
/// 1. Exact id match (as typed, then trimmed)
/// 2. Id prefix match (case-insensitive, at least 4 characters, no whitespace)
pub fn resolve_note<'a>(store: &'a NoteStore, identifier: &str) -> ResolveResult<'a> {
    let trimmed = identifier.trim();

    let exact = [identifier, trimmed]
        .into_iter()
        .filter_map(|candidate| candidate.parse::<NoteId>().ok())
        .find_map(|id| store.get(&id));
    if let Some(note) = exact {
        return ResolveResult::Unique(note);
    }

    if trimmed.chars().count() < MIN_PREFIX_LEN || trimmed.contains(char::is_whitespace) {
        return ResolveResult::NotFound;
    }

    let mut candidates = store.find_by_id_prefix(trimmed);
    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(candidates.remove(0)),
        _ => ResolveResult::Ambiguous(candidates),
    }
}

/// One-line description of why `identifier` did not resolve, or the id.
pub(crate) fn resolve_message(store: &NoteStore, identifier: &str) -> Result<NoteId, String> {
    match resolve_note(store, identifier) {
        ResolveResult::Unique(note) => Ok(note.id().clone()),
        ResolveResult::Ambiguous(notes) => Err(format!(
            "ambiguous: '{}' matches {} notes; use a longer prefix",
            identifier.trim(),
            notes.len()
        )),
        ResolveResult::NotFound => Err(format!("note not found: '{}'", identifier.trim())),
    }
}

/// Prints detailed information about ambiguous notes to help distinguish them.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[&Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id(), note.display_title());
    }
    eprintln!();
    eprintln!("Use a longer ID prefix to specify which note you mean.");
}

/// Resolves `identifier` or fails with a user-facing error.
pub(crate) fn resolve_id(store: &NoteStore, identifier: &str) -> Result<NoteId> {
    match resolve_note(store, identifier) {
        ResolveResult::Unique(note) => Ok(note.id().clone()),
        ResolveResult::Ambiguous(notes) => {
            print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}
