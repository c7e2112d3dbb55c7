use crate::classify::{classify_dependency_kind, classify_location_kind, detect_module_kind};
use crate::context::ScanContext;
use crate::fs::{child_dirs, directory_size};
use crate::manifest::MANIFEST_FILE;
use crate::path::{INSTALL_ROOT, format_provenance, is_hidden, is_scope_dir, relative_path};
use crate::types::{DependencyKind, LocationKind, PackageInstance};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, trace};

pub type InstanceMap = BTreeMap<String, Vec<PackageInstance>>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Position {
    Project,
    InstallRoot,
    Scope(String),
    Package,
}

pub fn scan_instances(ctx: &mut ScanContext, root: &Path, out: &mut InstanceMap) {
    let mut walker = Walker { ctx, root, out };
    walker.walk(root, 0, &Position::Project, None);
}

struct Walker<'a> {
    ctx: &'a mut ScanContext,
    root: &'a Path,
    out: &'a mut InstanceMap,
}

impl Walker<'_> {
    fn walk(&mut self, dir: &Path, depth: usize, position: &Position, owner: Option<&str>) {
        if depth > self.ctx.options.scan_depth {
            debug!(dir = %dir.display(), "scan depth reached");
            return;
        }

        let children = match child_dirs(dir) {
            Ok(children) => children,
            Err(err) => {
                debug!(error = %err, "skipping unreadable directory");
                return;
            }
        };

        for child in children {
            if child.name == INSTALL_ROOT {
                self.harvest(&child.path, owner);
                self.walk(&child.path, depth + 1, &Position::InstallRoot, owner);
                continue;
            }

            match position {
                Position::Project => {
                    if self.ctx.options.is_pruned(&child.name) {
                        continue;
                    }
                    self.walk(&child.path, depth + 1, &Position::Project, None);
                }
                Position::InstallRoot => {
                    if is_scope_dir(&child.name) {
                        let scope = Position::Scope(child.name.clone());
                        self.walk(&child.path, depth + 1, &scope, owner);
                    } else if !is_hidden(&child.name) {
                        self.walk(&child.path, depth + 1, &Position::Package, Some(&child.name));
                    }
                }
                Position::Scope(scope) => {
                    if !is_hidden(&child.name) {
                        let name = format!("{}/{}", scope, child.name);
                        self.walk(&child.path, depth + 1, &Position::Package, Some(&name));
                    }
                }
                Position::Package => {
                    if !is_hidden(&child.name) {
                        self.walk(&child.path, depth + 1, &Position::Package, owner);
                    }
                }
            }
        }
    }

    fn harvest(&mut self, install_root: &Path, owner: Option<&str>) {
        let children = match child_dirs(install_root) {
            Ok(children) => children,
            Err(err) => {
                debug!(error = %err, "skipping unreadable install root");
                return;
            }
        };

        for child in children {
            if is_scope_dir(&child.name) {
                let scoped = match child_dirs(&child.path) {
                    Ok(scoped) => scoped,
                    Err(err) => {
                        debug!(error = %err, "skipping unreadable scope");
                        continue;
                    }
                };

                for package in scoped {
                    let name = format!("{}/{}", child.name, package.name);
                    self.record(name, &package.path, install_root, owner);
                }
            } else if !is_hidden(&child.name) {
                self.record(child.name, &child.path, install_root, owner);
            }
        }
    }

    fn record(
        &mut self,
        name: String,
        package_dir: &Path,
        install_root: &Path,
        owner: Option<&str>,
    ) {
        let Some(manifest) = self.ctx.manifest(&package_dir.join(MANIFEST_FILE)) else {
            return;
        };

        let Some(version) = manifest.version.clone().filter(|v| !v.is_empty()) else {
            debug!(
                package = %name,
                path = %package_dir.display(),
                "dropping package without version"
            );
            return;
        };

        let relative = relative_path(self.root, package_dir);
        let location_kind = classify_location_kind(&relative);
        let nested = location_kind == LocationKind::Nested;

        // A nested copy only ever satisfies the package that owns its
        // install root, never a project manifest.
        let dependency_kind = if nested {
            DependencyKind::Transitive
        } else {
            classify_dependency_kind(&name, &self.ctx.declared)
        };

        let required_by = if nested {
            owner
                .map(str::to_string)
                .or_else(|| enclosing_dir_name(install_root))
        } else {
            None
        };

        let size = self
            .ctx
            .options
            .compute_sizes
            .then(|| directory_size(package_dir));

        let instance = PackageInstance {
            version,
            package_path: package_dir.to_path_buf(),
            resolved_at: format_provenance(&relative),
            dependency_kind,
            location_kind,
            required_by,
            size,
            module_kind: detect_module_kind(&manifest),
        };

        trace!(
            package = %name,
            version = %instance.version,
            at = %instance.resolved_at,
            "found instance"
        );
        self.out.entry(name).or_default().push(instance);
    }
}

fn enclosing_dir_name(install_root: &Path) -> Option<String> {
    install_root
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
}
