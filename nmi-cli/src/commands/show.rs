use super::build_inventory;
use anyhow::{Result, bail};
use clap::Args;
use nmi_core::view::{describe_group, describe_instance};
use nmi_core::{Filters, InspectorConfig, console};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Exact package name, e.g. `react` or `@types/node`
    pub name: String,

    /// Project roots to scan
    pub roots: Vec<PathBuf>,
}

pub async fn run(args: ShowArgs, config: &InspectorConfig) -> Result<()> {
    let mut inventory = build_inventory(config, &args.roots, Filters::default())?;
    inventory.rescan();

    let Some(group) = inventory.find_group(&args.name) else {
        bail!("{} is not installed under the scanned roots", args.name);
    };

    console::header("show", env!("CARGO_PKG_VERSION"));

    let node = describe_group(&group);
    console::info(&format!(
        "{} {}",
        console::bold(&console::tint(node.color, &node.label)),
        console::dim(&node.description)
    ));

    for instance in &group.instances {
        let node = describe_instance(instance);
        println!();
        for line in node.tooltip.lines() {
            console::info(&format!("  {}", line));
        }
    }

    Ok(())
}
