use crate::manifest::{self, Manifest};
use crate::types::DeclaredDependencies;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_MANIFEST_DEPTH: usize = 5;
pub const DEFAULT_SCAN_DEPTH: usize = 15;
pub const DEFAULT_PRUNED_DIRS: [&str; 3] = [".git", "dist", "build"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub manifest_depth: usize,
    pub scan_depth: usize,
    pub pruned_dirs: Vec<String>,
    pub compute_sizes: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            manifest_depth: DEFAULT_MANIFEST_DEPTH,
            scan_depth: DEFAULT_SCAN_DEPTH,
            pruned_dirs: DEFAULT_PRUNED_DIRS.iter().map(|s| s.to_string()).collect(),
            compute_sizes: false,
        }
    }
}

impl ScanOptions {
    pub fn is_pruned(&self, name: &str) -> bool {
        self.pruned_dirs.iter().any(|pruned| pruned == name)
    }
}

#[derive(Debug)]
pub struct ScanContext {
    pub options: ScanOptions,
    pub declared: DeclaredDependencies,
    manifests: HashMap<PathBuf, Option<Arc<Manifest>>>,
}

impl ScanContext {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            declared: DeclaredDependencies::default(),
            manifests: HashMap::new(),
        }
    }

    /// Cached manifest read. Absent and unusable files both come back as
    /// `None` and are remembered as such.
    pub fn manifest(&mut self, path: &Path) -> Option<Arc<Manifest>> {
        if let Some(cached) = self.manifests.get(path) {
            return cached.clone();
        }

        let manifest = match manifest::read_manifest(path) {
            Ok(found) => found.map(Arc::new),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "ignoring unusable manifest");
                None
            }
        };

        self.manifests.insert(path.to_path_buf(), manifest.clone());
        manifest
    }

    pub fn cached_manifests(&self) -> usize {
        self.manifests.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn caches_reads_including_misses() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("package.json");
        let missing = dir.path().join("missing").join("package.json");
        fs::write(&good, r#"{ "name": "app", "version": "1.0.0" }"#).unwrap();

        let mut ctx = ScanContext::new(ScanOptions::default());
        assert!(ctx.manifest(&good).is_some());
        assert!(ctx.manifest(&missing).is_none());
        assert_eq!(ctx.cached_manifests(), 2);

        fs::remove_file(&good).unwrap();
        let cached = ctx.manifest(&good).unwrap();
        assert_eq!(cached.name.as_deref(), Some("app"));
    }

    #[test]
    fn malformed_manifest_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "{ nope").unwrap();

        let mut ctx = ScanContext::new(ScanOptions::default());
        assert!(ctx.manifest(&path).is_none());
    }

    #[test]
    fn default_options_prune_vcs_and_build_output() {
        let options = ScanOptions::default();
        assert!(options.is_pruned(".git"));
        assert!(options.is_pruned("dist"));
        assert!(options.is_pruned("build"));
        assert!(!options.is_pruned("src"));
        assert_eq!(options.manifest_depth, 5);
        assert_eq!(options.scan_depth, 15);
    }
}
