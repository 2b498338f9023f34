//! `henhouse` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and `HENHOUSE_*` environment variables.
//! - Start logging when a log directory is configured.
//! - Open the record store and dispatch one subcommand.

use anyhow::Context;
use clap::Parser;
use henhouse_core::db::open_db;
use henhouse_core::{default_log_level, init_logging};
use std::path::{Path, PathBuf};

mod commands;
mod output;

use commands::Command;
use output::OutputFormat;

/// Track eggs laid per chicken and roll them up by day.
#[derive(Parser, Debug)]
#[command(name = "henhouse", version, about, long_about = None)]
struct Args {
    /// SQLite database file
    #[arg(
        long,
        global = true,
        env = "HENHOUSE_DB",
        default_value = "henhouse.sqlite3"
    )]
    db: PathBuf,

    /// Log level (trace, debug, info, warn, error); only used with --log-dir
    #[arg(long, global = true, env = "HENHOUSE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "HENHOUSE_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// What logging setup the arguments ask for.
#[derive(Debug, PartialEq, Eq)]
enum LogSettings<'a> {
    Off,
    /// A level was given without a directory to log into.
    OffIgnoringLevel(&'a str),
    On { level: &'a str, dir: &'a Path },
}

impl Args {
    fn log_settings(&self) -> LogSettings<'_> {
        match (&self.log_dir, self.log_level.as_deref()) {
            (Some(dir), level) => LogSettings::On {
                level: level.unwrap_or(default_log_level()),
                dir: dir.as_path(),
            },
            (None, Some(level)) => LogSettings::OffIgnoringLevel(level),
            (None, None) => LogSettings::Off,
        }
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.log_settings() {
        LogSettings::On { level, dir } => {
            init_logging(level, absolute_dir(dir)?).context("failed to start logging")?;
        }
        LogSettings::OffIgnoringLevel(level) => eprintln!(
            "warning: log level `{level}` ignored; set --log-dir or HENHOUSE_LOG_DIR to enable logging"
        ),
        LogSettings::Off => {}
    }

    let format = args.output_format();
    let conn = open_db(&args.db)
        .with_context(|| format!("failed to open database `{}`", args.db.display()))?;

    commands::run(args.command, &conn, format)
}

fn absolute_dir(dir: &Path) -> anyhow::Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(dir))
}
