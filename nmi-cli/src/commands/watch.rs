use super::{build_inventory, print_groups};
use anyhow::Result;
use clap::Args;
use nmi_core::watch::ManifestWatcher;
use nmi_core::{Filters, InspectorConfig, console};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Only packages installed in more than one location
    #[arg(short = 'd', long = "duplicates")]
    pub duplicates: bool,

    /// Project roots to watch
    pub roots: Vec<PathBuf>,
}

pub async fn run(args: WatchArgs, config: &InspectorConfig) -> Result<()> {
    console::header("watch", env!("CARGO_PKG_VERSION"));

    let filters = Filters::new(args.duplicates, &config.exclude)?;
    let mut inventory = build_inventory(config, &args.roots, filters)?;
    let mut watcher = ManifestWatcher::start(
        inventory.roots(),
        Duration::from_millis(config.debounce_ms),
    )?;

    print_groups(&inventory.list_groups(), false);

    // Each burst is fully rescanned before the next one is awaited.
    while let Some(changed) = watcher.next_change().await {
        debug!(count = changed.len(), "manifests changed");
        inventory.refresh();

        println!();
        console::info(&console::dim(&format!(
            "{} manifest(s) changed, rescanning",
            changed.len()
        )));
        print_groups(&inventory.list_groups(), false);
    }

    Ok(())
}
