use crate::context::ScanOptions;
use crate::registry::PrimaryRegistry;
use crate::{InspectError, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::warn;

pub const RC_FILE: &str = ".nmirc";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorConfig {
    pub registry_name: Option<String>,
    pub registry_url: Option<String>,
    pub exclude: Vec<String>,
    pub scan: ScanOptions,
    pub debounce_ms: u64,
    pub rc_files: Vec<PathBuf>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            registry_name: None,
            registry_url: None,
            exclude: Vec::new(),
            scan: ScanOptions::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            rc_files: Vec::new(),
        }
    }
}

impl InspectorConfig {
    pub fn from_env() -> Self {
        let mut config = InspectorConfig::default();

        // 1) Global rc file in the user's home directory.
        if let Some(base) = BaseDirs::new() {
            config.load_rc_file(&base.home_dir().join(RC_FILE));
        }

        // 2) Project-level rc file in the current working directory.
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        config.load_rc_file(&cwd.join(RC_FILE));

        // 3) Env overrides everything.
        config.apply_env(|key| env::var(key).ok());

        config
    }

    pub fn primary_registry(&self) -> Option<PrimaryRegistry> {
        match (&self.registry_name, &self.registry_url) {
            (Some(name), Some(url_pattern)) => Some(PrimaryRegistry {
                name: name.clone(),
                url_pattern: url_pattern.clone(),
            }),
            _ => None,
        }
    }

    fn load_rc_file(&mut self, path: &Path) {
        if !path.is_file() {
            return;
        }

        if let Err(err) = self.apply_rc_file(path) {
            warn!(error = %err, "ignoring rc file");
        }
    }

    pub fn apply_rc_file(&mut self, path: &Path) -> Result<()> {
        let data = fs::read_to_string(path).map_err(|source| InspectError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        self.apply_rc(&data)
            .map_err(|reason| InspectError::Config {
                path: path.to_path_buf(),
                reason,
            })?;

        self.rc_files.push(path.to_path_buf());
        Ok(())
    }

    pub fn apply_rc(&mut self, data: &str) -> std::result::Result<(), String> {
        for (index, line) in data.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("line {}: expected `key = value`", index + 1));
            };

            self.set(key.trim(), value.trim())
                .map_err(|reason| format!("line {}: {}", index + 1, reason))?;
        }

        Ok(())
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let overrides = [
            ("NMI_REGISTRY_NAME", "registry-name"),
            ("NMI_REGISTRY_URL", "registry-url"),
            ("NMI_EXCLUDE", "exclude"),
            ("NMI_COMPUTE_SIZES", "compute-sizes"),
            ("NMI_SCAN_DEPTH", "scan-depth"),
            ("NMI_MANIFEST_DEPTH", "manifest-depth"),
            ("NMI_DEBOUNCE_MS", "debounce-ms"),
        ];

        for (var, key) in overrides {
            let Some(value) = lookup(var) else {
                continue;
            };

            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Err(reason) = self.set(key, trimmed) {
                warn!(variable = var, %reason, "ignoring environment override");
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "registry-name" => self.registry_name = non_empty(value),
            "registry-url" => self.registry_url = non_empty(value),
            "exclude" => {
                self.exclude = value
                    .split(',')
                    .map(str::trim)
                    .filter(|pattern| !pattern.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "compute-sizes" => self.scan.compute_sizes = parse_bool(value)?,
            "scan-depth" => self.scan.scan_depth = parse_number(value)? as usize,
            "manifest-depth" => self.scan.manifest_depth = parse_number(value)? as usize,
            "debounce-ms" => self.debounce_ms = parse_number(value)?,
            other => return Err(format!("unknown key `{}`", other)),
        }

        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("expected a boolean, got `{}`", value)),
    }
}

fn parse_number(value: &str) -> std::result::Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| format!("expected a number, got `{}`", value))
}
