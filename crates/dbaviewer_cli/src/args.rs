//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dbaviewer",
    version,
    about = "Browse and export the DBA curriculum standards dataset."
)]
pub struct CliArgs {
    /// Dataset JSON file (overrides DBAVIEWER_DATA_PATH).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long = "log-dir", value_name = "DIR", global = true)]
    pub log_dir: Option<String>,

    /// trace|debug|info|warn|error (defaults by build mode).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Search debounce window in milliseconds (overrides DBAVIEWER_DEBOUNCE_MS).
    #[arg(long = "debounce-ms", value_name = "MS", global = true)]
    pub debounce_ms: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive shell (default).
    Browse,
    /// Print one filtered page and exit.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        grade: Option<String>,
        #[arg(long = "activities-only")]
        activities_only: bool,
        /// cards|list
        #[arg(long, default_value = "cards")]
        view: String,
    },
    /// Render the dataset as a SQL script.
    ExportSql {
        /// Output file; stdout when omitted.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Materialize the dataset into a SQLite database.
    ExportSqlite {
        #[arg(value_name = "DB")]
        db: PathBuf,
    },
}
