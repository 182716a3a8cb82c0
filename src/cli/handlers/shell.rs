//! Interactive shell: line commands in, a freshly rendered screen out.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use super::resolve::resolve_message;
use super::{ensure_saved, open_store, render_width};
use crate::cli::ShellArgs;
use crate::cli::config::Settings;
use crate::cli::prompt::PromptConfirm;
use crate::domain::{Clock, NoteId, SystemClock};
use crate::store::DeleteOutcome;
use crate::view::{EventOutcome, Session, ViewEvent, render};

const PROMPT: &str = "jot> ";

const HELP: &str = "\
commands:
  new              create a note and open it
  open <id>        open a note (unique id prefix is enough)
  back             return to the list (narrow screens)
  title <text>     set the open note's title
  content <text>   set the open note's content (\\n for a newline)
  search <text>    filter the list; 'search' alone clears it
  rm [id]          delete a note (the open one by default)
  help             show this help
  quit             leave the shell";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    New,
    Open(String),
    Back,
    Title(String),
    Content(String),
    Search(String),
    Delete(Option<String>),
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses one input line.
    ///
    /// Text arguments are taken verbatim after the first space, so
    /// `title  two spaces` sets the title to ` two spaces`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            return Ok(Self::Empty);
        }

        let line = line.trim_start();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let arg = rest.trim();

        match word.to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "open" | "select" if arg.is_empty() => Err("usage: open <id>".to_string()),
            "open" | "select" => Ok(Self::Open(arg.to_string())),
            "back" => Ok(Self::Back),
            "title" => Ok(Self::Title(rest.to_string())),
            "content" => Ok(Self::Content(rest.replace("\\n", "\n"))),
            "search" => Ok(Self::Search(rest.to_string())),
            "rm" | "delete" if arg.is_empty() => Ok(Self::Delete(None)),
            "rm" | "delete" => Ok(Self::Delete(Some(arg.to_string()))),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("unknown command: {other} (try 'help')")),
        }
    }
}

pub fn handle_shell(args: &ShellArgs, settings: &Settings) -> Result<()> {
    let width = render_width(args.width, settings)?;
    let (store, status) = open_store(settings)?;
    let mut session = Session::new(store);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    run_shell(&mut session, &mut input, &mut output, width, &SystemClock)?;

    ensure_saved(&status)
}

/// Runs the read-dispatch-render loop until `quit` or end of input.
///
/// The screen is drawn once at start and again after every command that
/// reaches the session.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    width: usize,
    clock: &dyn Clock,
) -> io::Result<()> {
    writeln!(output, "{}", render(&session.screen(clock.now_millis(), width), width))?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
        };

        let event = match command {
            ShellCommand::Empty => continue,
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            ShellCommand::New => ViewEvent::NewNote,
            ShellCommand::Back => ViewEvent::Back,
            ShellCommand::Title(text) => ViewEvent::EditTitle(text),
            ShellCommand::Content(text) => ViewEvent::EditContent(text),
            ShellCommand::Search(text) => ViewEvent::Search(text),
            ShellCommand::Open(identifier) => match resolve_message(session.store(), &identifier) {
                Ok(id) => ViewEvent::Select(id),
                Err(message) => {
                    writeln!(output, "{message}")?;
                    continue;
                }
            },
            ShellCommand::Delete(identifier) => match delete_target(session, identifier) {
                Ok(id) => ViewEvent::Delete(id),
                Err(message) => {
                    writeln!(output, "{message}")?;
                    continue;
                }
            },
        };

        let outcome = {
            let mut confirm = PromptConfirm::new(&mut *input, &mut *output);
            session.dispatch(event, &mut confirm)
        };
        tracing::debug!(?outcome, "dispatched shell command");

        match outcome {
            EventOutcome::Ignored => writeln!(output, "no note is open")?,
            EventOutcome::Delete(DeleteOutcome::Cancelled) => writeln!(output, "Cancelled.")?,
            _ => {}
        }
        writeln!(output, "{}", render(&session.screen(clock.now_millis(), width), width))?;
    }

    Ok(())
}

fn delete_target(session: &Session, identifier: Option<String>) -> Result<NoteId, String> {
    match identifier {
        Some(identifier) => resolve_message(session.store(), &identifier),
        None => session
            .store()
            .selected_id()
            .cloned()
            .ok_or_else(|| "no note is open; use rm <id>".to_string()),
    }
}
