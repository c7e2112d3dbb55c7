use crate::commands;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "nmi",
    about = "inspect what is actually installed in node_modules",
    version,
    color = clap::ColorChoice::Auto
)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List installed packages grouped by name
    List(commands::list::ListArgs),
    /// Search every installed instance
    Search(commands::search::SearchArgs),
    /// Show every install location of one package
    Show(commands::show::ShowArgs),
    /// Open a package's registry page
    Open(commands::open::OpenArgs),
    /// Re-list whenever an installed manifest changes
    Watch(commands::watch::WatchArgs),
    /// Show the resolved configuration
    Config(commands::config::ConfigArgs),
}
