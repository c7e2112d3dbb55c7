pub mod classify;
pub mod collector;
pub mod config;
pub mod console;
pub mod context;
pub mod error;
pub mod filter;
pub mod format;
pub mod fs;
pub mod inventory;
pub mod manifest;
pub mod path;
pub mod registry;
pub mod scanner;
pub mod types;
pub mod version;
pub mod view;
pub mod watch;

pub use config::InspectorConfig;
pub use context::ScanOptions;
pub use error::InspectError;
pub use filter::Filters;
pub use inventory::Inventory;
pub use types::{
    DependencyKind, LocationKind, ModuleKind, PackageGroup, PackageInstance, SearchRecord,
};

pub type Result<T> = std::result::Result<T, InspectError>;
