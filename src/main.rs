//! vocabtape - terminal vocabulary trainer

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use vocabtape::config::Config;
use vocabtape::storage::FileStore;
use vocabtape::{App, ApplyOutcome, Store};

/// Terminal vocabulary trainer with tape-covered columns
#[derive(Parser)]
#[command(name = "vocabtape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install a JSON deck from a file as the current deck
    Load {
        /// JSON file holding an array of vocabulary objects
        file: PathBuf,
    },
    /// Print row, known and unknown counts for the saved session
    Stats,
    /// Remove the saved deck, answers and tapes (settings are kept)
    Reset {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Config {
        /// Print the config file path instead
        #[arg(long, conflicts_with = "init")]
        path: bool,
        /// Write the default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn init_logging() {
    let log_path = vocabtape::paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
        let file_appender = tracing_appender::rolling::never(dir, "vocabtape.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Load { file }) => cmd_load(&file),
        Some(Commands::Stats) => cmd_stats(),
        Some(Commands::Reset { force }) => cmd_reset(force),
        Some(Commands::Config { path, init }) => cmd_config(path, init),
        None => {
            let config = Config::load().unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load config, using defaults");
                eprintln!("Warning: {e:#}");
                Config::default()
            });
            let store = open_store();
            vocabtape::tui::run(App::new(config, store))
        }
    }
}

fn open_store() -> Store {
    Store::load(Box::new(FileStore::open_default()))
}

/// Saved state without column repairs written back.
fn read_store() -> Store {
    Store::snapshot(Box::new(FileStore::open_default()))
}

fn cmd_load(file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut store = open_store();
    match store.apply_json(&text)? {
        ApplyOutcome::Loaded(count) => {
            println!("Loaded {count} rows from {}", file.display());
            Ok(())
        }
        ApplyOutcome::Secret => bail!("{} does not contain a deck", file.display()),
        ApplyOutcome::Rejected(e) => {
            Err(anyhow::Error::new(e).context(format!("Invalid deck in {}", file.display())))
        }
    }
}

fn cmd_stats() -> Result<()> {
    let store = read_store();
    let counts = store.counts();
    let settings = store.settings();
    println!("Rows:     {}", counts.total);
    println!("Known:    {}", counts.known);
    println!("Unknown:  {}", counts.unknown);
    println!("Columns:  {} / {}", settings.left_key, settings.right_key);
    println!("Covered:  {}", store.session().cover());
    Ok(())
}

fn cmd_reset(force: bool) -> Result<()> {
    let mut store = read_store();

    if !store.has_stored_session() {
        println!("No saved deck to reset.");
        return Ok(());
    }

    if store.session().is_empty() {
        println!("This removes the unreadable saved session.");
    } else {
        println!(
            "This removes the saved deck ({} rows), answers and tapes.",
            store.session().len()
        );
    }

    if !force {
        print!("Continue? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.reset_all()?;
    println!("Reset complete.");
    Ok(())
}

fn cmd_config(path_only: bool, init: bool) -> Result<()> {
    let path = Config::default_path();
    if path_only {
        println!("{}", path.display());
        return Ok(());
    }
    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            Config::default().save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }
    println!("{}", Config::load()?.to_pretty_json()?);
    Ok(())
}
