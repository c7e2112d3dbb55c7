use super::build_inventory;
use anyhow::Result;
use clap::Args;
use nmi_core::{Filters, InspectorConfig, SearchRecord, console};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Case-insensitive text matched against name, location, version and path
    pub query: Option<String>,

    /// Print matching records as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Project roots to scan
    pub roots: Vec<PathBuf>,
}

pub async fn run(args: SearchArgs, config: &InspectorConfig) -> Result<()> {
    let filters = Filters::new(false, &config.exclude)?;
    let mut inventory = build_inventory(config, &args.roots, filters)?;

    let records: Vec<SearchRecord> = inventory
        .list_all_instances_flat()
        .into_iter()
        .filter(|record| matches_query(record, args.query.as_deref()))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    console::header("search", env!("CARGO_PKG_VERSION"));

    if records.is_empty() {
        console::info("No matching packages");
        return Ok(());
    }

    for record in &records {
        let kind = record.instance.dependency_kind.info();
        console::info(&format!(
            "{} {} {}",
            console::tint(kind.color, &record.label),
            console::dim(&format!("v{}", record.version)),
            console::dim(&record.package_path.display().to_string())
        ));
    }

    Ok(())
}

fn matches_query(record: &SearchRecord, query: Option<&str>) -> bool {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return true;
    };

    let needle = query.to_lowercase();
    let path = record.package_path.to_string_lossy();
    [record.label.as_str(), record.version.as_str(), path.as_ref()]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}
