//! Folio command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Dispatch portfolio queries and maintenance jobs to `folio_core`.
//! - Map errors to a stderr line and a non-zero exit code; a closed stdout
//!   exits cleanly.

mod commands;

use clap::{Parser, Subcommand};
use commands::{CliError, CliResult};
use folio_core::config::{ENV_DATA_SOURCE, ENV_DB_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
use folio_core::{init_logging, Config, DataSource, LogTarget};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "folio: portfolio showcase tools", long_about = None)]
struct Cli {
    /// SQLite database file used by the live source and maintenance jobs.
    #[arg(long, global = true, env = "FOLIO_DB_PATH")]
    db: Option<PathBuf>,

    /// Project source for read commands.
    #[arg(long, global = true, env = "FOLIO_DATA_SOURCE")]
    source: Option<DataSource>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true, env = "FOLIO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr when unset.
    #[arg(long, global = true, env = "FOLIO_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List visible projects after search and tag filtering.
    List {
        /// Case-insensitive substring matched against title and description.
        #[arg(long, default_value = "")]
        search: String,
        /// Exact tag to filter by.
        #[arg(long)]
        tag: Option<String>,
        /// Card layout: grid|list. Unknown values fall back to grid.
        #[arg(long, default_value = "grid")]
        layout: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the distinct tags available as filters.
    Tags,
    /// Show one project in detail.
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Replace stored projects with the sample catalog.
    Seed,
    /// Insert and delete a throwaway row to keep the database warm.
    KeepAlive,
}

impl Cli {
    /// Returns the flag value for a config key; clap already folded the
    /// matching environment variable into these fields.
    fn flag_value(&self, key: &str) -> Option<String> {
        match key {
            ENV_DB_PATH => self.db.as_ref().map(|path| path.display().to_string()),
            ENV_DATA_SOURCE => self.source.map(|source| source.as_str().to_string()),
            ENV_LOG_LEVEL => self.log_level.clone(),
            ENV_LOG_DIR => self.log_dir.clone(),
            _ => None,
        }
    }

    /// Resolves config with flags taking precedence over `env`, so only the
    /// effective value of each key is validated.
    fn resolve_config(&self, env: impl Fn(&str) -> Option<String>) -> Result<Config, String> {
        Config::from_lookup(|key| self.flag_value(key).or_else(|| env(key)))
            .map_err(|err| err.to_string())
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> CliResult<()> {
    let config = cli.resolve_config(|key| std::env::var(key).ok())?;
    let target = config
        .log_dir
        .clone()
        .map_or(LogTarget::Stderr, LogTarget::Directory);
    init_logging(config.log_level, target)?;

    let result = match &cli.command {
        Command::List {
            search,
            tag,
            layout,
            json,
        } => commands::list(out, &config, search, tag.as_deref(), layout, *json),
        Command::Tags => commands::tags(out, &config),
        Command::Show { id, json } => commands::show(out, &config, *id, *json),
        Command::Seed => commands::seed(out, &config),
        Command::KeepAlive => commands::keep_alive(out, &config),
    };
    result?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(()) | Err(CliError::OutputClosed) => ExitCode::SUCCESS,
        Err(CliError::Failed(message)) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
