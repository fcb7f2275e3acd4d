use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod output;

use commands::Commands;

#[derive(Parser)]
#[command(name = "washbook", version, about = "Car-wash appointment book")]
struct Cli {
    /// Store directory (defaults to the nearest .washbook, then the user data dir)
    #[arg(long, global = true)]
    root: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli.command.run(cli.root.as_deref()) {
        eprintln!("{}", error::format_error(&err));
        std::process::exit(1);
    }
}
