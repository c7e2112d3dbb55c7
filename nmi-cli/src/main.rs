use anyhow::Result;
use clap::Parser;
use nmi_core::InspectorConfig;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose)?;

    let config = InspectorConfig::from_env();

    match args.command {
        Command::List(list) => commands::list::run(list, &config).await,
        Command::Search(search) => commands::search::run(search, &config).await,
        Command::Show(show) => commands::show::run(show, &config).await,
        Command::Open(open) => commands::open::run(open, &config).await,
        Command::Watch(watch) => commands::watch::run(watch, &config).await,
        Command::Config(config_args) => commands::config::run(config_args, &config).await,
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
