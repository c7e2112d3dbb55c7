pub mod config;
pub mod list;
pub mod open;
pub mod search;
pub mod show;
pub mod watch;

use anyhow::{Context, Result};
use nmi_core::view::{TreeNode, describe_group, describe_instance};
use nmi_core::{Filters, InspectorConfig, Inventory, PackageGroup, console};
use std::env;
use std::path::PathBuf;

/// Canonical roots to scan; the working directory when none are given.
pub fn resolve_roots(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if roots.is_empty() {
        return Ok(vec![env::current_dir()?]);
    }

    roots
        .iter()
        .map(|root| {
            root.canonicalize()
                .with_context(|| format!("cannot scan {}", root.display()))
        })
        .collect()
}

pub fn build_inventory(
    config: &InspectorConfig,
    roots: &[PathBuf],
    filters: Filters,
) -> Result<Inventory> {
    let roots = resolve_roots(roots)?;
    Ok(Inventory::new(roots, config.scan.clone()).with_filters(filters))
}

fn render(node: &TreeNode, indent: &str) -> String {
    format!(
        "{}{} {}",
        indent,
        console::tint(node.color, &node.label),
        console::dim(&node.description)
    )
}

pub fn print_group(group: &PackageGroup, expand: bool) {
    let node = describe_group(group);
    console::info(&render(&node, ""));

    if expand && node.collapsible {
        for instance in &group.instances {
            console::info(&render(&describe_instance(instance), "  "));
        }
    }
}

pub fn print_groups(groups: &[PackageGroup], expand: bool) {
    let conflicts = groups.iter().filter(|g| g.has_version_conflict()).count();

    for group in groups {
        print_group(group, expand);
    }

    println!();
    console::info(&format!(
        "{} packages, {} with conflicting versions",
        groups.len(),
        conflicts
    ));
}
