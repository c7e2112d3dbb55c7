use std::collections::HashSet;

pub fn unique_versions<'a>(versions: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    versions
        .iter()
        .copied()
        .filter(|version| seen.insert(*version))
        .collect()
}

pub fn has_version_conflict(versions: &[&str]) -> bool {
    unique_versions(versions).len() > 1
}

pub fn version_description(versions: &[&str], instance_count: usize, conflict: bool) -> String {
    let unique = unique_versions(versions);

    if conflict {
        return format!("⚠ [{}]", unique.join(" ↔ "));
    }

    let mut description = format!("[{}]", unique.join(", "));
    if instance_count > 1 {
        description.push_str(&format!(" ({} locations)", instance_count));
    }
    description
}
