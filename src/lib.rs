//! jot - quick notes kept in a single durable slot

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;
pub mod view;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_delete, handle_edit, handle_list, handle_new, handle_shell,
        handle_show, handle_view,
    },
    logging::init_tracing,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let settings = config.settings(cli.dir.as_ref(), cli.slot.as_deref(), None)?;
    tracing::debug!(dir = %settings.dir.display(), slot = %settings.slot, "resolved settings");

    match &cli.command {
        Command::New(args) => handle_new(args, &settings),
        Command::List(args) => handle_list(args, &settings),
        Command::Show(args) => handle_show(args, &settings),
        Command::Edit(args) => handle_edit(args, &settings),
        Command::Delete(args) => handle_delete(args, &settings),
        Command::View(args) => handle_view(args, &settings),
        Command::Shell(args) => handle_shell(args, &settings),
        Command::Completions(args) => handle_completions(args),
    }
}
