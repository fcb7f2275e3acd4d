use clap::Args;
use std::path::Path;

use washbook_query::{filter_by_date, summarize_by_status};

use crate::output;

#[derive(Args)]
pub struct DayArgs {
    /// Day to show, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: DayArgs, root: Option<&Path>) -> anyhow::Result<()> {
    let date = super::date_or_today(args.date.as_deref())?;
    let store = super::open_store(root)?;
    let records = filter_by_date(store.appointments(), date);
    let summary = summarize_by_status(records.iter().copied());

    if args.json {
        let value = serde_json::json!({
            "date": date.to_string(),
            "appointments": records,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let title = match &store.config().name {
        Some(name) => format!("{name} - {}", output::display_date(date)),
        None => output::display_date(date),
    };
    println!("{}", output::header(&title));

    if records.is_empty() {
        println!("Nenhum agendamento para esta data.");
    }
    for appt in &records {
        println!();
        println!("[{}] {}", appt.status.label(), appt.client_name);
        println!("{}", output::kv("ID", &appt.id.to_string()));
        println!("{}", output::kv("Veículo", &appt.vehicle_model));
        println!("{}", output::kv("Placa", &appt.plate));
        if let Some(contact) = &appt.contact {
            println!("{}", output::kv("Contato", contact));
        }
        println!("{}", output::kv("Serviço", &appt.service_description));
        println!("{}", output::kv("Valor", &appt.price.format_brl()));
    }

    println!();
    super::summary::print_summary(&summary);
    Ok(())
}
