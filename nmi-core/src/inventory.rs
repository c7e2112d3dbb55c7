use crate::collector::collect_declared;
use crate::context::{ScanContext, ScanOptions};
use crate::filter::Filters;
use crate::scanner::{InstanceMap, scan_instances};
use crate::types::{DeclaredDependencies, PackageGroup, SearchRecord};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

type Observer = Box<dyn Fn() + Send + Sync>;

pub struct Inventory {
    roots: Vec<PathBuf>,
    options: ScanOptions,
    pub filters: Filters,
    packages: InstanceMap,
    declared: DeclaredDependencies,
    stale: bool,
    observers: Vec<Observer>,
}

impl Inventory {
    pub fn new(roots: Vec<PathBuf>, options: ScanOptions) -> Self {
        Self {
            roots,
            options,
            filters: Filters::default(),
            packages: InstanceMap::new(),
            declared: DeclaredDependencies::default(),
            stale: true,
            observers: Vec::new(),
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    pub fn declared(&self) -> &DeclaredDependencies {
        &self.declared
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn subscribe(&mut self, observer: impl Fn() + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Drops all state and tells observers to re-list. The rescan itself
    /// happens on the next listing call.
    pub fn refresh(&mut self) {
        self.packages.clear();
        self.declared = DeclaredDependencies::default();
        self.stale = true;

        for observer in &self.observers {
            observer();
        }
    }

    pub fn rescan(&mut self) {
        let started = Instant::now();
        self.packages.clear();
        self.declared = DeclaredDependencies::default();

        for root in &self.roots {
            let mut ctx = ScanContext::new(self.options.clone());
            collect_declared(&mut ctx, root);
            scan_instances(&mut ctx, root, &mut self.packages);
            self.declared.extend(&ctx.declared);
        }

        self.stale = false;

        info!(
            roots = self.roots.len(),
            packages = self.packages.len(),
            instances = self.packages.values().map(Vec::len).sum::<usize>(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scan complete"
        );
    }

    pub fn list_groups(&mut self) -> Vec<PackageGroup> {
        self.rescan();
        self.groups()
    }

    pub fn list_all_instances_flat(&mut self) -> Vec<SearchRecord> {
        self.rescan();

        let mut records: Vec<SearchRecord> = self
            .groups()
            .into_iter()
            .flat_map(|group| {
                let name = group.name;
                group.instances.into_iter().map(move |instance| SearchRecord {
                    label: format!("{} @ {}", name, instance.resolved_at),
                    version: instance.version.clone(),
                    package_path: instance.package_path.clone(),
                    package_name: name.clone(),
                    instance,
                })
            })
            .collect();

        records.sort_by(|a, b| a.label.cmp(&b.label));
        records
    }

    pub fn find_group(&self, name: &str) -> Option<PackageGroup> {
        self.packages
            .get(name)
            .filter(|instances| !instances.is_empty())
            .map(|instances| PackageGroup {
                name: name.to_string(),
                instances: instances.clone(),
            })
    }

    pub fn group_for_path(&self, path: &Path) -> Option<PackageGroup> {
        self.packages
            .iter()
            .find(|(_, instances)| instances.iter().any(|i| i.package_path == path))
            .map(|(name, instances)| PackageGroup {
                name: name.clone(),
                instances: instances.clone(),
            })
    }

    fn groups(&self) -> Vec<PackageGroup> {
        let mut names: Vec<&String> = self.packages.keys().collect();
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));

        names
            .into_iter()
            .map(|name| PackageGroup {
                name: name.clone(),
                instances: self.packages[name].clone(),
            })
            .filter(|group| self.filters.keeps(group))
            .collect()
    }
}
