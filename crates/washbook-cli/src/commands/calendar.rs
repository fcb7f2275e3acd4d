use clap::Args;
use std::path::Path;

use chrono::Datelike;
use washbook_query::{dates_with_appointments, filter_by_date};

use crate::output;

#[derive(Args)]
pub struct CalendarArgs {
    /// Selected day, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    selected: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: CalendarArgs, root: Option<&Path>) -> anyhow::Result<()> {
    let selected = super::date_or_today(args.selected.as_deref())?;
    let store = super::open_store(root)?;
    let marks = dates_with_appointments(store.appointments(), selected);

    if args.json {
        let value: serde_json::Map<String, serde_json::Value> = marks
            .iter()
            .map(|(date, marker)| serde_json::to_value(marker).map(|v| (date.to_string(), v)))
            .collect::<Result<_, _>>()?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if marks.is_empty() {
        println!("Nenhum agendamento marcado.");
        return Ok(());
    }

    let mut current_month = None;
    for (date, marker) in &marks {
        let month = (date.year(), date.month());
        if current_month != Some(month) {
            println!("{}", output::header(&output::month_title(*date)));
            current_month = Some(month);
        }
        let count = filter_by_date(store.appointments(), *date).len();
        let flag = if marker.selected { " <" } else { "" };
        let noun = if count == 1 { "agendamento" } else { "agendamentos" };
        println!("  {}  {count} {noun}{flag}", output::display_date(*date));
    }
    Ok(())
}
