use crate::types::PackageGroup;
use crate::{InspectError, Result};
use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|err| InspectError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })
}

/// Case-insensitive glob match of a package name; `*` spans `/`, so
/// `@types/*` covers the whole scope.
pub fn matches_glob_pattern(name: &str, pattern: &str) -> Result<bool> {
    Ok(compile(pattern)?.matches_with(name, MATCH_OPTIONS))
}

pub fn is_package_excluded(name: &str, patterns: &[String]) -> Result<bool> {
    Ok(Filters::new(false, patterns)?.is_excluded(name))
}

#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub duplicates_only: bool,
    exclude: Vec<String>,
    compiled: Vec<Pattern>,
}

impl Filters {
    pub fn new(duplicates_only: bool, exclude: &[String]) -> Result<Self> {
        let mut filters = Filters {
            duplicates_only,
            ..Filters::default()
        };
        filters.set_exclude(exclude)?;
        Ok(filters)
    }

    pub fn set_exclude(&mut self, patterns: &[String]) -> Result<()> {
        let compiled = patterns
            .iter()
            .map(|pattern| compile(pattern))
            .collect::<Result<Vec<_>>>()?;

        self.exclude = patterns.to_vec();
        self.compiled = compiled;
        Ok(())
    }

    pub fn toggle_duplicates_only(&mut self) -> bool {
        self.duplicates_only = !self.duplicates_only;
        self.duplicates_only
    }

    pub fn clear(&mut self) {
        *self = Filters::default();
    }

    pub fn has_active_filters(&self) -> bool {
        self.duplicates_only || !self.exclude.is_empty()
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.compiled
            .iter()
            .any(|pattern| pattern.matches_with(name, MATCH_OPTIONS))
    }

    pub fn keeps(&self, group: &PackageGroup) -> bool {
        if self.is_excluded(&group.name) {
            return false;
        }

        !self.duplicates_only || group.is_expandable()
    }
}
