pub mod add;
pub mod advance;
pub mod calendar;
pub mod day;
pub mod init;
pub mod summary;

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Subcommand;
use washbook_store::AppointmentStore;

use crate::config;

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new appointment book
    Init(init::InitArgs),
    /// Book a new appointment
    Add(add::AddArgs),
    /// Move an appointment to its next status
    Advance(advance::AdvanceArgs),
    /// List one day's appointments with its cash summary
    Day(day::DayArgs),
    /// Show which dates have appointments
    Calendar(calendar::CalendarArgs),
    /// Show one day's cash summary
    Summary(summary::SummaryArgs),
}

impl Commands {
    pub fn run(self, root: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Commands::Init(args) => init::run(args, root),
            Commands::Add(args) => add::run(args, root),
            Commands::Advance(args) => advance::run(args, root),
            Commands::Day(args) => day::run(args, root),
            Commands::Calendar(args) => calendar::run(args, root),
            Commands::Summary(args) => summary::run(args, root),
        }
    }
}

/// Open the store the command should act on. The per-user fallback store is
/// created on first use; an explicit or discovered root must already exist.
pub fn open_store(explicit: Option<&Path>) -> anyhow::Result<AppointmentStore> {
    let cwd = std::env::current_dir()?;
    let store = match explicit.map(Path::to_path_buf).or_else(|| config::find_store_root(&cwd)) {
        Some(root) => {
            tracing::debug!(root = %root.display(), "opening appointment book");
            AppointmentStore::open(&root)
                .with_context(|| format!("run `washbook init {}` first", root.display()))?
        }
        None => {
            let root = config::default_store_root()?;
            tracing::debug!(root = %root.display(), "using per-user appointment book");
            AppointmentStore::init(&root)?
        }
    };

    if let Some(err) = store.load_error() {
        eprintln!("aviso: {err}; mostrando a agenda vazia");
    }
    Ok(store)
}

/// `--date` value, or today in local time.
pub fn date_or_today(date: Option<&str>) -> anyhow::Result<NaiveDate> {
    match date {
        Some(s) => Ok(washbook_core::parse_date(s)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
