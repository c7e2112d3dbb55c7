use anyhow::Result;
use clap::Args;
use nmi_core::{InspectorConfig, console};

#[derive(Args, Debug)]
pub struct ConfigArgs {}

pub async fn run(_args: ConfigArgs, config: &InspectorConfig) -> Result<()> {
    console::header("config", env!("CARGO_PKG_VERSION"));

    console::info("registry");
    console::info(&format!(
        "  name: {}",
        config.registry_name.as_deref().unwrap_or("none")
    ));
    console::info(&format!(
        "  url: {}",
        config.registry_url.as_deref().unwrap_or("none")
    ));
    println!();

    console::info("scan");
    console::info(&format!("  manifest depth: {}", config.scan.manifest_depth));
    console::info(&format!("  scan depth: {}", config.scan.scan_depth));
    console::info(&format!(
        "  pruned dirs: {}",
        format_list(&config.scan.pruned_dirs)
    ));
    console::info(&format!("  compute sizes: {}", config.scan.compute_sizes));
    console::info(&format!("  exclude: {}", format_list(&config.exclude)));
    println!();

    console::info("watch");
    console::info(&format!("  debounce: {}ms", config.debounce_ms));
    println!();

    console::info("sources");
    if config.rc_files.is_empty() {
        console::info("  rc files: none");
    } else {
        for path in &config.rc_files {
            console::info(&format!("  {}", path.display()));
        }
    }

    Ok(())
}

fn format_list(values: &[String]) -> String {
    if values.is_empty() {
        return "none".to_string();
    }

    values.join(", ")
}
