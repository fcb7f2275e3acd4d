use clap::Args;
use std::path::Path;

use washbook_core::AppointmentId;

#[derive(Args)]
pub struct AdvanceArgs {
    /// Appointment ID (ULID)
    id: String,
}

pub fn run(args: AdvanceArgs, root: Option<&Path>) -> anyhow::Result<()> {
    let id = AppointmentId::from_string(&args.id)?;
    let mut store = super::open_store(root)?;
    let updated = store.advance_status(&id)?;
    println!("{} {} -> {}", updated.id, updated.client_name, updated.status.label());
    Ok(())
}
