use clap::Args;
use std::path::Path;

use washbook_query::{filter_by_date, summarize_by_status, DailySummary};

use crate::output;

#[derive(Args)]
pub struct SummaryArgs {
    /// Day to summarize, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: SummaryArgs, root: Option<&Path>) -> anyhow::Result<()> {
    let date = super::date_or_today(args.date.as_deref())?;
    let store = super::open_store(root)?;
    let summary = summarize_by_status(filter_by_date(store.appointments(), date));

    if args.json {
        let value = serde_json::json!({
            "date": date.to_string(),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", output::header(&output::display_date(date)));
        print_summary(&summary);
    }
    Ok(())
}

pub fn print_summary(summary: &DailySummary) {
    for line in summary_lines(summary) {
        println!("{line}");
    }
}

fn summary_lines(summary: &DailySummary) -> [String; 3] {
    [
        output::kv("A receber", &summary.to_receive.format_brl()),
        output::kv("Recebido", &summary.received.format_brl()),
        output::kv("Negado", &summary.denied.format_brl()),
    ]
}
