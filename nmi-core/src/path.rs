use std::path::{Component, Path};

pub const INSTALL_ROOT: &str = "node_modules";
pub const SCOPE_MARKER: char = '@';

const BOUNDARY: &str = "/node_modules/";
const CHAIN_SEPARATOR: &str = " → ";

pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Turns a root-relative install path into the chain of ancestors it
/// resolves through, e.g. `packages/app/node_modules/foo/node_modules/bar`
/// becomes `packages/app → foo`. The package itself is never part of the
/// chain.
pub fn format_provenance(relative: &str) -> String {
    let parts: Vec<&str> = relative.split(BOUNDARY).collect();
    if parts.len() == 1 {
        return relative.to_string();
    }

    let mut segments = Vec::with_capacity(parts.len() - 1);
    segments.push(if parts[0].is_empty() { "root" } else { parts[0] });
    segments.extend_from_slice(&parts[1..parts.len() - 1]);

    segments.join(CHAIN_SEPARATOR)
}

pub fn extract_package_name(path: &str) -> String {
    let last = path.rsplit(BOUNDARY).next().unwrap_or(path);
    let mut segments = last.split('/');
    let first = segments.next().unwrap_or_default();

    if first.starts_with(SCOPE_MARKER)
        && let Some(name) = segments.next()
    {
        return format!("{}/{}", first, name);
    }

    first.to_string()
}

pub fn split_scope(name: &str) -> (Option<&str>, &str) {
    if name.starts_with(SCOPE_MARKER)
        && let Some((scope, rest)) = name.split_once('/')
    {
        return (Some(scope), rest);
    }

    (None, name)
}

pub fn is_scope_dir(name: &str) -> bool {
    name.starts_with(SCOPE_MARKER)
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
