//! List command handler.

use anyhow::Result;

use super::open_store;
use crate::cli::ListArgs;
use crate::cli::config::Settings;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::{Clock, SystemClock};
use crate::view::time::format_relative;
use crate::view::truncate_str;

pub fn handle_list(args: &ListArgs, settings: &Settings) -> Result<()> {
    let (store, _status) = open_store(settings)?;
    let now = SystemClock.now_millis();

    // Collection order: newest-created first
    let notes = store.query(args.query.as_deref().unwrap_or(""));

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                println!("{:<10}  {:<40}  {:>10}", "ID", "Title", "Updated");
                println!(
                    "{:<10}  {:<40}  {:>10}",
                    "----------",
                    "----------------------------------------",
                    "----------"
                );

                for note in &notes {
                    let title = truncate_str(note.display_title(), 40);
                    let updated = format_relative(note.updated_at(), now);
                    println!("{:<10}  {:<40}  {:>10}", note.id().prefix(), title, updated);
                }

                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes
                .iter()
                .map(|n| NoteListing::from_note(n, now))
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
