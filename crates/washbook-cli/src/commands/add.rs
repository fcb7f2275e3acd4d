use clap::Args;
use std::path::Path;

use washbook_core::{Money, NewAppointment};

use crate::output;

#[derive(Args)]
pub struct AddArgs {
    /// Client name
    #[arg(short, long)]
    client: String,
    /// Vehicle model
    #[arg(short, long)]
    vehicle: String,
    /// License plate
    #[arg(short, long)]
    plate: String,
    /// Phone or e-mail
    #[arg(long)]
    contact: Option<String>,
    /// Service to perform
    #[arg(short, long)]
    service: String,
    /// Price in centavos; separators are ignored ("5000" and "50,00" are R$ 50,00)
    #[arg(long, allow_hyphen_values = true)]
    price: String,
    /// Entry date, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<String>,
}

pub fn run(args: AddArgs, root: Option<&Path>) -> anyhow::Result<()> {
    let price = Money::from_input(&args.price)?;
    let entry_date = super::date_or_today(args.date.as_deref())?;

    let mut store = super::open_store(root)?;
    let appointment = store.create(NewAppointment {
        client_name: args.client,
        vehicle_model: args.vehicle,
        plate: args.plate,
        contact: args.contact,
        service_description: args.service,
        price,
        entry_date,
    })?;

    println!("Agendamento criado: {}", appointment.id);
    println!("{}", output::kv("Cliente", &appointment.client_name));
    println!("{}", output::kv("Data", &output::display_date(appointment.entry_date)));
    println!("{}", output::kv("Valor", &appointment.price.format_brl()));
    println!("{}", output::kv("Status", appointment.status.label()));
    Ok(())
}
