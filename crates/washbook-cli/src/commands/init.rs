use clap::Args;
use std::path::{Path, PathBuf};

use washbook_store::{AppointmentStore, StoreConfig};

#[derive(Args)]
pub struct InitArgs {
    /// Path to initialize (defaults to current directory, or --root)
    path: Option<PathBuf>,
    /// Business name shown above listings
    #[arg(short, long)]
    name: Option<String>,
}

pub fn run(args: InitArgs, root: Option<&Path>) -> anyhow::Result<()> {
    let path = match args.path.or_else(|| root.map(Path::to_path_buf)) {
        Some(p) if p.is_absolute() => p,
        Some(p) => std::env::current_dir()?.join(p),
        None => std::env::current_dir()?,
    };

    let config = StoreConfig {
        name: args.name,
        ..StoreConfig::default()
    };
    AppointmentStore::init_with_config(&path, config)?;
    println!("Agenda criada em {}", path.display());
    Ok(())
}
