use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use crate::config::{Config, DATA_DIR_ENV};
use crate::controller::{SaveOutcome, Screen, ViewController};
use crate::logging::{LogConfig, LogOutput, init_logging};
use crate::models::{JournalCollection, JournalEntry};
use crate::store::{
    DataDirLock, FileBackend, JournalStore, KeyValueBackend, MemoryBackend, STORAGE_KEY,
};
use crate::tui::{format_full_timestamp, run_interactive};
use crate::utils::{format_path_with_tilde, sanitize_for_display};

#[derive(Parser)]
#[command(name = "prompt-journal")]
#[command(version)]
#[command(about = "A tiny prompted journal for the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding the journal file
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep journals in memory only; nothing is written to disk, not even logs
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show statistics about the journal
    Stats,
    /// List entries, newest first
    List,
    /// Print one entry in full
    Show {
        /// Entry id as printed by `list`
        id: String,
    },
    /// Save a new entry answering the default prompt
    Add {
        /// Entry text (quote it to keep spaces and newlines)
        text: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.data_dir, cli.ephemeral, cli.verbose)?;

    let output = log_output(cli.command.as_ref(), &config);
    init_logging(&LogConfig::from_verbosity(config.verbosity).with_output(output))?;

    if config.ephemeral {
        info!("ephemeral session, journals stay in memory");
        return execute(cli.command, MemoryBackend::new(), "(in memory)", &mut io::stdout().lock());
    }

    // Held until the command finishes
    let _lock = if writes_journal(cli.command.as_ref()) {
        let lock = DataDirLock::acquire(&config.data_dir).with_context(|| {
            format!(
                "Another prompt-journal session is using {}",
                format_path_with_tilde(&config.data_dir)
            )
        })?;
        Some(lock)
    } else {
        None
    };

    let backend = FileBackend::new(&config.data_dir);
    let location = format_path_with_tilde(&backend.path_for(STORAGE_KEY));
    info!(data_dir = %config.data_dir.display(), "using file storage");
    execute(cli.command, backend, &location, &mut io::stdout().lock())
}

/// The TUI owns the terminal, so its logs go to a file. An ephemeral TUI
/// keeps none.
fn log_output(command: Option<&Commands>, config: &Config) -> LogOutput {
    match command {
        Some(_) => LogOutput::Stderr,
        None if config.ephemeral => LogOutput::Discard,
        None => LogOutput::File(config.log_file()),
    }
}

/// Commands that save the journal and so need the data directory to themselves
fn writes_journal(command: Option<&Commands>) -> bool {
    matches!(command, None | Some(Commands::Add { .. }))
}

/// Run one command against `backend`, writing output to `out`.
/// `location` is only used for display.
pub fn execute<B, W>(
    command: Option<Commands>,
    backend: B,
    location: &str,
    out: &mut W,
) -> Result<()>
where
    B: KeyValueBackend,
    W: Write,
{
    let store = JournalStore::new(backend);

    match command {
        None => run_interactive(ViewController::new(store)),
        Some(Commands::Stats) => show_stats(&load(&store)?, location, out),
        Some(Commands::List) => list_entries(&load(&store)?, out),
        Some(Commands::Show { id }) => show_entry(&load(&store)?, &id, out),
        Some(Commands::Add { text }) => add_entry(&mut ViewController::new(store), &text, out),
    }
}

fn load<B: KeyValueBackend>(store: &JournalStore<B>) -> Result<JournalCollection> {
    store.load().context("Failed to read saved journals")
}

fn show_stats<W: Write>(journals: &JournalCollection, location: &str, out: &mut W) -> Result<()> {
    writeln!(out, "Journal Statistics")?;
    writeln!(out, "==================")?;
    writeln!(out, "Total entries: {}", journals.len())?;

    if let Some(oldest) = journals.oldest() {
        writeln!(out, "Oldest entry: {}", format_full_timestamp(&oldest.timestamp()))?;
    }
    if let Some(newest) = journals.newest() {
        writeln!(out, "Newest entry: {}", format_full_timestamp(&newest.timestamp()))?;
    }

    writeln!(out)?;
    writeln!(out, "Storage: {}", location)?;
    Ok(())
}

fn list_entries<W: Write>(journals: &JournalCollection, out: &mut W) -> Result<()> {
    if journals.is_empty() {
        writeln!(out, "No journals yet. Start writing!")?;
        return Ok(());
    }

    for entry in journals {
        writeln!(
            out,
            "{}  {}  {}",
            entry.id(),
            format_full_timestamp(&entry.timestamp()),
            sanitize_for_display(entry.headline())
        )?;
    }
    Ok(())
}

fn show_entry<W: Write>(journals: &JournalCollection, id: &str, out: &mut W) -> Result<()> {
    let Some(entry) = journals.find(id) else {
        bail!("No entry with id {}", id);
    };
    print_entry(entry, out)
}

fn print_entry<W: Write>(entry: &JournalEntry, out: &mut W) -> Result<()> {
    writeln!(out, "{}", sanitize_for_display(entry.prompt()))?;
    writeln!(out, "{}", format_full_timestamp(&entry.timestamp()))?;
    writeln!(out)?;
    writeln!(out, "{}", sanitize_for_display(entry.text()))?;
    Ok(())
}

fn add_entry<B, W>(controller: &mut ViewController<B>, text: &str, out: &mut W) -> Result<()>
where
    B: KeyValueBackend,
    W: Write,
{
    controller.start();
    // Saving over unreadable data would replace it with just this entry
    if let Some(error) = controller.load_error() {
        bail!("Refusing to add: {}", error.summary());
    }

    if controller.screen() == &Screen::List {
        controller.new_entry();
    }
    if !controller.set_draft(text) {
        bail!("Entry text is too large");
    }

    match controller.save_entry() {
        SaveOutcome::Ignored => bail!("Entry text is empty"),
        SaveOutcome::Saved { id } => {
            writeln!(out, "Saved entry {}", id)?;
            Ok(())
        }
        SaveOutcome::NotPersisted { error, .. } => Err(error).context("Entry was not saved"),
    }
}
