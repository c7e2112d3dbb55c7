use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Direct,
    Dev,
    Peer,
    Transitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Hoisted,
    Nested,
    Workspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Esm,
    Cjs,
    Dual,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub icon: &'static str,
    pub color: Option<&'static str>,
    pub label: &'static str,
    pub description: &'static str,
}

impl DependencyKind {
    pub const ALL: [DependencyKind; 4] = [
        DependencyKind::Direct,
        DependencyKind::Dev,
        DependencyKind::Peer,
        DependencyKind::Transitive,
    ];

    pub fn info(self) -> &'static KindInfo {
        match self {
            DependencyKind::Direct => &KindInfo {
                icon: "arrow-right",
                color: Some("charts.green"),
                label: "Direct",
                description: "Listed in dependencies",
            },
            DependencyKind::Dev => &KindInfo {
                icon: "tools",
                color: Some("charts.blue"),
                label: "Dev",
                description: "Listed in devDependencies",
            },
            DependencyKind::Peer => &KindInfo {
                icon: "link",
                color: Some("charts.purple"),
                label: "Peer",
                description: "Listed in peerDependencies",
            },
            DependencyKind::Transitive => &KindInfo {
                icon: "git-merge",
                color: Some("charts.gray"),
                label: "Transitive",
                description: "Installed as a dependency of another package",
            },
        }
    }
}

impl LocationKind {
    pub const ALL: [LocationKind; 3] = [
        LocationKind::Hoisted,
        LocationKind::Nested,
        LocationKind::Workspace,
    ];

    pub fn info(self) -> &'static KindInfo {
        match self {
            LocationKind::Hoisted => &KindInfo {
                icon: "arrow-up",
                color: None,
                label: "Hoisted",
                description: "Hoisted to top-level node_modules",
            },
            LocationKind::Nested => &KindInfo {
                icon: "indent",
                color: Some("charts.yellow"),
                label: "Nested",
                description: "Nested inside another package (version conflict)",
            },
            LocationKind::Workspace => &KindInfo {
                icon: "folder-library",
                color: Some("charts.orange"),
                label: "Workspace",
                description: "In a workspace/monorepo sub-package",
            },
        }
    }
}

impl ModuleKind {
    pub fn label(self) -> &'static str {
        match self {
            ModuleKind::Esm => "ESM",
            ModuleKind::Cjs => "CommonJS",
            ModuleKind::Dual => "Dual (ESM + CommonJS)",
            ModuleKind::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredDependencies {
    pub direct: BTreeSet<String>,
    pub dev: BTreeSet<String>,
    pub peer: BTreeSet<String>,
}

impl DeclaredDependencies {
    pub fn extend(&mut self, other: &DeclaredDependencies) {
        self.direct.extend(other.direct.iter().cloned());
        self.dev.extend(other.dev.iter().cloned());
        self.peer.extend(other.peer.iter().cloned());
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.dev.is_empty() && self.peer.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInstance {
    pub version: String,
    pub package_path: PathBuf,
    pub resolved_at: String,
    pub dependency_kind: DependencyKind,
    pub location_kind: LocationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub module_kind: ModuleKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageGroup {
    pub name: String,
    pub instances: Vec<PackageInstance>,
}

impl PackageGroup {
    pub fn versions(&self) -> Vec<&str> {
        self.instances.iter().map(|i| i.version.as_str()).collect()
    }

    pub fn unique_versions(&self) -> Vec<&str> {
        crate::version::unique_versions(&self.versions())
    }

    pub fn has_version_conflict(&self) -> bool {
        crate::version::has_version_conflict(&self.versions())
    }

    pub fn is_expandable(&self) -> bool {
        self.instances.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub label: String,
    pub version: String,
    pub package_path: PathBuf,
    pub package_name: String,
    pub instance: PackageInstance,
}
