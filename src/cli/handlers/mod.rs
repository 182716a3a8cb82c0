//! Command handlers for the CLI.

mod delete;
mod list;
mod new;
mod resolve;
mod shell;
mod show_edit;
mod view;


use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use std::io;

use crate::cli::config::Settings;
use crate::cli::{Cli, CompletionsArgs};
use crate::domain::SystemClock;
use crate::infra::{FileStore, PersistenceBridge, SaveStatus};
use crate::store::NoteStore;

// Re-export public items
pub use delete::handle_delete;
pub use list::handle_list;
pub use new::{create_note, handle_new};
pub use resolve::{ResolveResult, resolve_note};
pub use shell::{ShellCommand, handle_shell, run_shell};
pub use show_edit::{handle_edit, handle_show};
pub use view::handle_view;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the slot in the data directory, loads it into a store and
/// subscribes the bridge so every change is written back.
pub(crate) fn open_store(settings: &Settings) -> Result<(NoteStore, SaveStatus)> {
    let storage = FileStore::open(&settings.dir)
        .with_context(|| format!("failed to open data directory {}", settings.dir.display()))?;
    let bridge = PersistenceBridge::new(storage, settings.slot.clone());
    let status = bridge.status();

    let mut store = NoteStore::from_notes(bridge.load(), Box::new(SystemClock));
    store.subscribe(Box::new(bridge));
    Ok((store, status))
}

/// Fails if any write made through the bridge failed.
pub(crate) fn ensure_saved(status: &SaveStatus) -> Result<()> {
    match status.take_error() {
        Some(err) => bail!("failed to save notes: {err}"),
        None => Ok(()),
    }
}

/// Render width for `view`/`shell`, with the command flag taking precedence.
pub(crate) fn render_width(flag: Option<usize>, settings: &Settings) -> Result<usize> {
    let width = flag.unwrap_or(settings.width);
    if width == 0 {
        bail!("width must be greater than 0");
    }
    Ok(width)
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "jot", &mut io::stdout());
    Ok(())
}
