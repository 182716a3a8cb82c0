//! Show and Edit command handlers.

use anyhow::{Result, bail};

use super::resolve::resolve_id;
use super::{ensure_saved, open_store};
use crate::cli::config::Settings;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{EditArgs, ShowArgs};
use crate::domain::{Clock, NotePatch, SystemClock};
use crate::view::time::{format_date, format_relative};

pub fn handle_show(args: &ShowArgs, settings: &Settings) -> Result<()> {
    let (store, _status) = open_store(settings)?;
    let id = resolve_id(&store, &args.note)?;
    let Some(note) = store.get(&id) else {
        bail!("note not found: '{}'", args.note);
    };
    let now = SystemClock.now_millis();

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.display_title());
            println!();
            println!(
                "ID: {}  Created: {}  Updated: {}",
                note.id(),
                format_date(note.created_at()),
                format_relative(note.updated_at(), now)
            );
            println!();

            if note.content().is_empty() {
                println!("No content");
            } else {
                println!("{}", note.content());
            }
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from_note(note, now));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

pub fn handle_edit(args: &EditArgs, settings: &Settings) -> Result<()> {
    let patch = NotePatch {
        title: args.title.clone(),
        content: args.content.clone(),
    };
    if patch.is_empty() {
        bail!("nothing to change: pass --title and/or --content");
    }

    let (mut store, status) = open_store(settings)?;
    let id = resolve_id(&store, &args.note)?;

    store.update(&id, &patch);
    ensure_saved(&status)?;

    if let Some(note) = store.get(&id) {
        println!("Updated: {}", note);
    }
    Ok(())
}
