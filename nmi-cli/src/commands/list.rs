use super::{build_inventory, print_groups};
use anyhow::Result;
use clap::Args;
use nmi_core::{Filters, InspectorConfig, console};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only packages installed in more than one location
    #[arg(short = 'd', long = "duplicates")]
    pub duplicates: bool,

    /// Glob of package names to hide (repeatable, `*` matches anything)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Show every install location under multi-instance packages
    #[arg(short = 'e', long = "expand")]
    pub expand: bool,

    /// Print the groups as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Project roots to scan
    pub roots: Vec<PathBuf>,
}

pub async fn run(args: ListArgs, config: &InspectorConfig) -> Result<()> {
    let mut exclude = config.exclude.clone();
    exclude.extend(args.exclude);

    let filters = Filters::new(args.duplicates, &exclude)?;
    let mut inventory = build_inventory(config, &args.roots, filters)?;
    let groups = inventory.list_groups();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    console::header("list", env!("CARGO_PKG_VERSION"));

    if groups.is_empty() {
        if inventory.filters.has_active_filters() {
            console::info("No packages match the active filters");
        } else {
            console::info("No installed packages found");
        }
        return Ok(());
    }

    print_groups(&groups, args.expand);
    Ok(())
}
