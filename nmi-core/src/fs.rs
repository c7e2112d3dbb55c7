use crate::{InspectError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ChildDir {
    pub name: String,
    pub path: PathBuf,
}

pub fn child_dirs(dir: &Path) -> Result<Vec<ChildDir>> {
    let entries = fs::read_dir(dir).map_err(|source| InspectError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut children: Vec<ChildDir> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_dir()))
        .map(|entry| ChildDir {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        })
        .collect();

    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}

pub fn directory_size(path: &Path) -> u64 {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return 0;
    };

    if metadata.is_file() {
        return metadata.len();
    }

    if !metadata.is_dir() {
        return 0;
    }

    let Ok(entries) = fs::read_dir(path) else {
        return 0;
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| directory_size(&entry.path()))
        .sum()
}
