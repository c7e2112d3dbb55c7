use crate::format::format_bytes;
use crate::types::{DependencyKind, LocationKind, ModuleKind, PackageGroup, PackageInstance};
use crate::version::version_description;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub label: String,
    pub description: String,
    pub icon: &'static str,
    pub color: Option<&'static str>,
    pub tooltip: String,
    pub collapsible: bool,
    pub context: &'static str,
}

pub fn describe_group(group: &PackageGroup) -> TreeNode {
    let expandable = group.is_expandable();
    let conflict = group.has_version_conflict();
    let versions = group.versions();

    let (icon, color) = match group.instances.first() {
        _ if conflict => ("versions", Some("charts.yellow")),
        Some(first) if first.dependency_kind == DependencyKind::Direct => {
            ("package", Some("charts.green"))
        }
        Some(first) if first.dependency_kind == DependencyKind::Dev => {
            ("package", Some("charts.blue"))
        }
        _ => ("package", None),
    };

    TreeNode {
        label: group.name.clone(),
        description: version_description(&versions, group.instances.len(), conflict),
        icon,
        color,
        tooltip: group_tooltip(group),
        collapsible: expandable,
        context: if expandable { "packageGroup" } else { "nodeModule" },
    }
}

pub fn describe_instance(instance: &PackageInstance) -> TreeNode {
    let dependency = instance.dependency_kind.info();
    let nested = instance.location_kind == LocationKind::Nested;

    let (icon, color) = if nested {
        ("indent", LocationKind::Nested.info().color)
    } else {
        (dependency.icon, dependency.color)
    };

    TreeNode {
        label: instance.resolved_at.clone(),
        description: format!("[{}]", instance.version),
        icon,
        color,
        tooltip: instance_tooltip(instance),
        collapsible: false,
        context: "nodeModule",
    }
}

fn group_tooltip(group: &PackageGroup) -> String {
    let mut lines = vec![group.name.clone(), String::new()];

    for instance in &group.instances {
        lines.push(format!("v{} @ {}", instance.version, instance.resolved_at));
        lines.push(format!(
            "  {} | {}",
            instance.dependency_kind.info().label,
            instance.location_kind.info().label
        ));
        if let Some(required_by) = &instance.required_by {
            lines.push(format!("  Required by: {}", required_by));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn instance_tooltip(instance: &PackageInstance) -> String {
    let dependency = instance.dependency_kind.info();
    let location = instance.location_kind.info();
    let mut lines = vec![
        format!("{} v{}", instance.resolved_at, instance.version),
        format!("{}: {}", dependency.label, dependency.description),
        format!("{}: {}", location.label, location.description),
    ];

    if let Some(required_by) = &instance.required_by {
        lines.push(format!("Required by: {}", required_by));
    }
    if instance.module_kind != ModuleKind::Unknown {
        lines.push(format!("Module: {}", instance.module_kind.label()));
    }
    if let Some(size) = instance.size {
        lines.push(format!("Size: {}", format_bytes(size)));
    }
    lines.push(format!("Path: {}", instance.package_path.display()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn instance(version: &str, kind: DependencyKind, location: LocationKind) -> PackageInstance {
        PackageInstance {
            version: version.to_string(),
            package_path: PathBuf::from("/p/node_modules/x"),
            resolved_at: "node_modules/x".to_string(),
            dependency_kind: kind,
            location_kind: location,
            required_by: (location == LocationKind::Nested).then(|| "parent".to_string()),
            size: Some(1536),
            module_kind: ModuleKind::Esm,
        }
    }

    fn group(instances: Vec<PackageInstance>) -> PackageGroup {
        PackageGroup {
            name: "x".to_string(),
            instances,
        }
    }

    #[test]
    fn single_instance_group_is_a_leaf() {
        let node = describe_group(&group(vec![instance(
            "1.0.0",
            DependencyKind::Direct,
            LocationKind::Hoisted,
        )]));

        assert!(!node.collapsible);
        assert_eq!(node.context, "nodeModule");
        assert_eq!(node.description, "[1.0.0]");
        assert_eq!((node.icon, node.color), ("package", Some("charts.green")));
    }

    #[test]
    fn conflicting_group_is_flagged() {
        let node = describe_group(&group(vec![
            instance("1.0.0", DependencyKind::Dev, LocationKind::Hoisted),
            instance("2.0.0", DependencyKind::Transitive, LocationKind::Nested),
        ]));

        assert!(node.collapsible);
        assert_eq!(node.description, "⚠ [1.0.0 ↔ 2.0.0]");
        assert_eq!((node.icon, node.color), ("versions", Some("charts.yellow")));
        assert!(node.tooltip.contains("Required by: parent"));
    }

    #[test]
    fn repeated_version_shows_location_count() {
        let node = describe_group(&group(vec![
            instance("1.0.0", DependencyKind::Dev, LocationKind::Hoisted),
            instance("1.0.0", DependencyKind::Dev, LocationKind::Workspace),
        ]));

        assert_eq!(node.description, "[1.0.0] (2 locations)");
        assert_eq!(node.color, Some("charts.blue"));
    }

    #[test]
    fn nested_instance_uses_warning_icon() {
        let node = describe_instance(&instance(
            "2.0.0",
            DependencyKind::Transitive,
            LocationKind::Nested,
        ));

        assert_eq!(node.label, "node_modules/x");
        assert_eq!(node.description, "[2.0.0]");
        assert_eq!((node.icon, node.color), ("indent", Some("charts.yellow")));
        assert!(node.tooltip.contains("Module: ESM"));
        assert!(node.tooltip.contains("Size: 1.5 KB"));
    }

    #[test]
    fn hoisted_instance_uses_dependency_icon() {
        let node = describe_instance(&instance(
            "1.0.0",
            DependencyKind::Peer,
            LocationKind::Hoisted,
        ));
        assert_eq!((node.icon, node.color), ("link", Some("charts.purple")));
        assert!(!node.tooltip.contains("Required by"));
    }
}
