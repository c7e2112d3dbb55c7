use crate::context::ScanContext;
use crate::fs::child_dirs;
use crate::manifest::MANIFEST_FILE;
use crate::path::INSTALL_ROOT;
use std::path::Path;
use tracing::debug;

pub fn collect_declared(ctx: &mut ScanContext, root: &Path) {
    visit(ctx, root, 0);
}

fn visit(ctx: &mut ScanContext, dir: &Path, depth: usize) {
    if depth > ctx.options.manifest_depth {
        return;
    }

    if let Some(manifest) = ctx.manifest(&dir.join(MANIFEST_FILE)) {
        let declared = &mut ctx.declared;
        declared.direct.extend(manifest.dependencies.keys().cloned());
        declared.dev.extend(manifest.dev_dependencies.keys().cloned());
        declared.peer.extend(manifest.peer_dependencies.keys().cloned());
    }

    let children = match child_dirs(dir) {
        Ok(children) => children,
        Err(err) => {
            debug!(error = %err, "skipping unreadable directory");
            return;
        }
    };

    for child in children {
        if child.name == INSTALL_ROOT || ctx.options.is_pruned(&child.name) {
            continue;
        }

        visit(ctx, &child.path, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ScanOptions;
    use std::fs;

    fn write(root: &Path, relative: &str, json: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, json).unwrap();
    }

    #[test]
    fn merges_every_workspace_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "package.json",
            r#"{ "dependencies": { "react": "^18" }, "devDependencies": { "vitest": "^1" } }"#,
        );
        write(
            root,
            "packages/ui/package.json",
            r#"{ "dependencies": { "clsx": "^2" }, "peerDependencies": { "react": "*" } }"#,
        );

        let mut ctx = ScanContext::new(ScanOptions::default());
        collect_declared(&mut ctx, root);

        assert!(ctx.declared.direct.contains("react"));
        assert!(ctx.declared.direct.contains("clsx"));
        assert!(ctx.declared.dev.contains("vitest"));
        assert!(ctx.declared.peer.contains("react"));
    }

    #[test]
    fn skips_install_roots_and_pruned_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "node_modules/a/package.json", r#"{ "dependencies": { "x": "1" } }"#);
        write(root, "dist/package.json", r#"{ "dependencies": { "y": "1" } }"#);
        write(root, "build/package.json", r#"{ "dependencies": { "z": "1" } }"#);
        write(root, ".git/package.json", r#"{ "dependencies": { "w": "1" } }"#);

        let mut ctx = ScanContext::new(ScanOptions::default());
        collect_declared(&mut ctx, root);

        assert!(ctx.declared.is_empty());
    }

    #[test]
    fn stops_below_manifest_depth() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "1/2/3/4/5/package.json", r#"{ "dependencies": { "at-five": "1" } }"#);
        write(root, "1/2/3/4/5/6/package.json", r#"{ "dependencies": { "at-six": "1" } }"#);

        let mut ctx = ScanContext::new(ScanOptions::default());
        collect_declared(&mut ctx, root);

        assert!(ctx.declared.direct.contains("at-five"));
        assert!(!ctx.declared.direct.contains("at-six"));
    }

    #[test]
    fn keeps_other_sections_when_one_is_off_shape() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "package.json",
            r#"{ "dependencies": { "keep": "1" }, "devDependencies": [], "peerDependencies": null }"#,
        );

        let mut ctx = ScanContext::new(ScanOptions::default());
        collect_declared(&mut ctx, root);

        assert!(ctx.declared.direct.contains("keep"));
        assert!(ctx.declared.dev.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directories_are_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "apps/web/package.json", r#"{ "dependencies": { "react": "18" } }"#);
        write(root, "apps/locked/sub/package.json", r#"{ "dependencies": { "secret": "1" } }"#);

        let locked = root.join("apps/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut ctx = ScanContext::new(ScanOptions::default());
        collect_declared(&mut ctx, root);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(ctx.declared.direct.contains("react"));
        assert!(!ctx.declared.direct.contains("secret"));
    }

    #[test]
    fn tolerates_malformed_manifests() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "package.json", "{ broken");
        write(root, "app/package.json", r#"{ "devDependencies": { "eslint": "9" } }"#);

        let mut ctx = ScanContext::new(ScanOptions::default());
        collect_declared(&mut ctx, root);

        assert!(ctx.declared.dev.contains("eslint"));
    }
}
