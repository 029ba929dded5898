//! Shared resolution engine for umbrella tools.
//!
//! This crate provides the pieces both output modes are built on:
//! - Scanning source files for `include('...')` directives, skipping comments
//! - Discovering the source root all include literals resolve against
//! - Collecting dependencies depth-first with de-duplication
//! - Deriving and registering dotted namespaces
//! - Expanding the `Sayings` locale cascade
//! - Walking source trees deterministically

mod collector;
mod constants;
mod error;
mod literal;
mod locale;
mod namespace;
mod root;
mod scanner;
mod walk;

// Re-export public API
pub use collector::{
    Collection, CollectorConfig, DependencyKind, ResolvedDependency, collect_dependencies,
};
pub use constants::{
    INCLUDE_TOKEN, MARKER_FILE, MULTI_LANG, SAYINGS_DIR, SCRIPT_EXTENSION, STYLE_EXTENSION,
};
pub use error::{Result, UmbrellaError};
pub use literal::script_string;
pub use locale::{cascade_levels, expand_sayings, level_resources};
pub use namespace::{NamespaceRegistry, declaration, namespace_for};
pub use root::{SourceRoot, find_source_root, make_absolute_and_clean, to_slash};
pub use scanner::{IncludeScanner, ScanState, includes_for, open_scanner, scan_includes};
pub use walk::{has_script_extension, source_files};
