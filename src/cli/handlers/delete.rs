//! Delete command handler.

use anyhow::{Result, bail};
use std::io;

use super::resolve::resolve_id;
use super::{ensure_saved, open_store};
use crate::cli::DeleteArgs;
use crate::cli::config::Settings;
use crate::cli::prompt::PromptConfirm;
use crate::store::{AlwaysConfirm, DeleteOutcome};

pub fn handle_delete(args: &DeleteArgs, settings: &Settings) -> Result<()> {
    let (mut store, status) = open_store(settings)?;
    let id = resolve_id(&store, &args.note)?;
    let label = store.get(&id).map(ToString::to_string).unwrap_or_default();

    let outcome = if args.yes {
        store.delete(&id, &mut AlwaysConfirm)
    } else {
        // Prompt on stderr so stdout stays clean for scripts
        let mut input = io::stdin().lock();
        let mut prompt_out = io::stderr();
        let mut confirm = PromptConfirm::new(&mut input, &mut prompt_out);
        store.delete(&id, &mut confirm)
    };

    match outcome {
        DeleteOutcome::Deleted => {
            ensure_saved(&status)?;
            println!("Deleted: {}", label);
        }
        DeleteOutcome::Cancelled => println!("Cancelled."),
        DeleteOutcome::NotFound => bail!("note not found: '{}'", args.note),
    }
    Ok(())
}
