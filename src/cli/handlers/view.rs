//! View command handler: one rendered frame.

use anyhow::Result;

use super::resolve::resolve_id;
use super::{open_store, render_width};
use crate::cli::ViewArgs;
use crate::cli::config::Settings;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::{Clock, SystemClock};
use crate::store::AlwaysConfirm;
use crate::view::{Session, ViewEvent, render};

pub fn handle_view(args: &ViewArgs, settings: &Settings) -> Result<()> {
    let width = render_width(args.width, settings)?;
    let (store, _status) = open_store(settings)?;

    let selected = match &args.select {
        Some(identifier) => Some(resolve_id(&store, identifier)?),
        None => None,
    };

    // Neither event touches the collection, so nothing is written.
    let mut session = Session::new(store);
    if let Some(search) = &args.search {
        session.dispatch(ViewEvent::Search(search.clone()), &mut AlwaysConfirm);
    }
    if let Some(id) = selected {
        session.dispatch(ViewEvent::Select(id), &mut AlwaysConfirm);
    }

    let screen = session.screen(SystemClock.now_millis(), width);
    match args.format {
        OutputFormat::Human => println!("{}", render(&screen, width)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&Output::new(screen))?),
    }

    Ok(())
}
