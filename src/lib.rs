// MetaGrust - universal database catalog core in Rust
// In-memory mirror of remote catalogs with lazy, monitor-driven resolution

// Clippy configuration - allow non-critical warnings for pet project
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::wildcard_enum_match_arm)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::module_name_repetitions)]

// Core catalog model structures
pub mod core;

// Cancellation monitor and the UI-owned task executor
pub mod runtime;

// Catalog text parsers (type names, qualified object names)
pub mod parser;

// Property descriptors with capability-gated visibility
pub mod props;

// Interactive object configurators (edit/confirm before commit)
pub mod configure;

// Catalog loading from row cursors
pub mod loader;

// Snapshot cache (binary snapshot + checksum, JSON export)
pub mod storage;

// Re-export commonly used types for convenience
pub use crate::core::{
    Catalog, CatalogRow, ConstraintColumn, ConstraintKind, DataSourceInfo, DataType, Engine,
    MetadataError, Schema, ServerVersion, Table, TableColumn, TableConstraint, Value,
};
pub use crate::configure::{
    CommandContext, ConsoleEditDialog, ConstraintConfigurator, EditDialog, ObjectConfigurator,
    SchemaConfigurator,
};
pub use crate::runtime::{ProgressMonitor, UiExecutor};
pub use crate::storage::CatalogCache;
