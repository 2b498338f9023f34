//! Subcommand definitions and dispatch.

use crate::output::{
    print_chicken, print_chickens, print_egg_record, print_egg_records, print_removed,
    print_summaries, print_summary, print_value, OutputFormat,
};
use anyhow::Context;
use clap::Subcommand;
use henhouse_core::{
    core_version, ping, CalendarDate, ChickenId, ChickenPatch, ChickenService, EggRecordId,
    EggRecordPatch, EggRecordQuery, EggRecordService, SqliteChickenRepository,
    SqliteEggRecordRepository, SummaryEngine,
};
use log::info;
use rusqlite::Connection;
use serde_json::json;

/// Largest day count accepted by `summary recent`.
const RECENT_DAYS_MAX: i64 = 30;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the core library is linked and responding
    Ping,
    /// Manage the flock
    #[command(subcommand)]
    Chicken(ChickenCommand),
    /// Manage egg records
    #[command(subcommand)]
    Egg(EggCommand),
    /// Daily egg rollups
    #[command(subcommand)]
    Summary(SummaryCommand),
}

#[derive(Subcommand, Debug)]
pub enum ChickenCommand {
    /// Register a chicken
    Add { name: String, breed: String },
    /// List all chickens
    List,
    /// Change a chicken's name or breed
    Update {
        id: ChickenId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        breed: Option<String>,
    },
    /// Remove a chicken and all of its egg records
    Remove { id: ChickenId },
}

#[derive(Subcommand, Debug)]
pub enum EggCommand {
    /// Record eggs laid by one chicken on one day (YYYY-MM-DD)
    Add {
        chicken_id: ChickenId,
        date: CalendarDate,
        quantity: u32,
    },
    /// List egg records, optionally by date range or chicken
    List {
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<CalendarDate>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<CalendarDate>,
        /// Only records for this chicken
        #[arg(long, conflicts_with_all = ["from", "to"])]
        chicken: Option<ChickenId>,
    },
    /// Change fields of an egg record
    Update {
        id: EggRecordId,
        #[arg(long)]
        chicken: Option<ChickenId>,
        #[arg(long)]
        date: Option<CalendarDate>,
        #[arg(long)]
        quantity: Option<u32>,
    },
    /// Remove an egg record
    Remove { id: EggRecordId },
}

#[derive(Subcommand, Debug)]
pub enum SummaryCommand {
    /// Totals for one day (YYYY-MM-DD)
    Day { date: CalendarDate },
    /// Days with records in the trailing window ending today (UTC)
    Recent {
        /// Window size in days, including today
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=RECENT_DAYS_MAX))]
        days: Option<i64>,
    },
}

pub fn run(command: Command, conn: &Connection, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        Command::Ping => print_value(
            format,
            &json!({ "status": ping(), "version": core_version() }),
            format!("{} (henhouse_core {})", ping(), core_version()),
        ),
        Command::Chicken(command) => run_chicken(command, conn, format),
        Command::Egg(command) => run_egg(command, conn, format),
        Command::Summary(command) => run_summary(command, conn, format),
    }
}

fn run_chicken(
    command: ChickenCommand,
    conn: &Connection,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let service = ChickenService::new(SqliteChickenRepository::try_new(conn)?);

    match command {
        ChickenCommand::Add { name, breed } => {
            let chicken = service
                .register(name, breed)
                .context("failed to register chicken")?;
            print_chicken(format, &chicken)
        }
        ChickenCommand::List => print_chickens(format, &service.list()?),
        ChickenCommand::Update { id, name, breed } => {
            let chicken = service
                .update(id, &ChickenPatch { name, breed })
                .with_context(|| format!("failed to update chicken {id}"))?;
            print_chicken(format, &chicken)
        }
        ChickenCommand::Remove { id } => {
            let removed = service.remove(id)?;
            info!("event=cli_chicken_remove module=cli status=ok chicken_id={id} found={removed}");
            print_removed(format, "chicken", id, removed)
        }
    }
}

fn run_egg(command: EggCommand, conn: &Connection, format: OutputFormat) -> anyhow::Result<()> {
    let service = EggRecordService::new(SqliteEggRecordRepository::try_new(conn)?);

    match command {
        EggCommand::Add {
            chicken_id,
            date,
            quantity,
        } => {
            let record = service
                .record(chicken_id, date, quantity)
                .context("failed to record eggs")?;
            print_egg_record(format, &record)
        }
        EggCommand::List {
            chicken: Some(chicken_id),
            ..
        } => print_egg_records(format, &service.list_by_chicken(chicken_id)?),
        EggCommand::List {
            from,
            to,
            chicken: None,
        } => {
            let query = EggRecordQuery {
                start_date: from,
                end_date: to,
            };
            print_egg_records(format, &service.list(&query)?)
        }
        EggCommand::Update {
            id,
            chicken,
            date,
            quantity,
        } => {
            let patch = EggRecordPatch {
                chicken_id: chicken,
                date,
                quantity,
            };
            let record = service
                .update(id, &patch)
                .with_context(|| format!("failed to update egg record {id}"))?;
            print_egg_record(format, &record)
        }
        EggCommand::Remove { id } => {
            let removed = service.remove(id)?;
            print_removed(format, "egg record", id, removed)
        }
    }
}

fn run_summary(
    command: SummaryCommand,
    conn: &Connection,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let engine = SummaryEngine::new(SqliteEggRecordRepository::try_new(conn)?);

    match command {
        SummaryCommand::Day { date } => print_summary(format, &engine.daily_summary(date)?),
        SummaryCommand::Recent { days } => {
            print_summaries(format, &engine.recent_summaries(days)?)
        }
    }
}
