use crate::manifest::Manifest;
use crate::path::INSTALL_ROOT;
use crate::types::{DeclaredDependencies, DependencyKind, LocationKind, ModuleKind};

const ESM_TAG: &str = "module";
const CJS_TAG: &str = "commonjs";

/// Direct > Dev > Peer > Transitive.
pub fn classify_dependency_kind(name: &str, declared: &DeclaredDependencies) -> DependencyKind {
    if declared.direct.contains(name) {
        DependencyKind::Direct
    } else if declared.dev.contains(name) {
        DependencyKind::Dev
    } else if declared.peer.contains(name) {
        DependencyKind::Peer
    } else {
        DependencyKind::Transitive
    }
}

pub fn classify_location_kind(relative: &str) -> LocationKind {
    let install_roots = relative
        .split('/')
        .filter(|segment| *segment == INSTALL_ROOT)
        .count();

    if install_roots > 1 {
        LocationKind::Nested
    } else if install_roots == 1 && relative.split('/').next() == Some(INSTALL_ROOT) {
        LocationKind::Hoisted
    } else {
        LocationKind::Workspace
    }
}

/// Infers the module format a package ships. Conditional exports win over
/// every other hint, then a `module` + `main` pair, then the `type` tag.
pub fn detect_module_kind(manifest: &Manifest) -> ModuleKind {
    if let Some(exports) = &manifest.exports {
        let import = exports.has_condition("import");
        let require = exports.has_condition("require");

        match (import, require) {
            (true, true) => return ModuleKind::Dual,
            (true, false) => return ModuleKind::Esm,
            (false, true) => return ModuleKind::Cjs,
            (false, false) => {}
        }
    }

    if manifest.module.is_some() && manifest.main.is_some() {
        return ModuleKind::Dual;
    }

    match manifest.module_type.as_deref() {
        Some(ESM_TAG) => ModuleKind::Esm,
        Some(CJS_TAG) => ModuleKind::Cjs,
        _ if manifest.main.is_some() => ModuleKind::Cjs,
        _ => ModuleKind::Unknown,
    }
}
