//! Graph mode: a declarative description of the include graph.
//!
//! Instead of resolving includes, every source file under the configured
//! libraries is recorded with the include literals it contains, verbatim, so
//! a runtime loader can resolve and fetch them on demand.

mod config;
mod render;
mod runner;
mod types;
mod walker;

// Re-export public API
pub use config::{Config, GraphFormat};
pub use runner::{run_graph, write_graph};
pub use types::{DependencyGraphRecord, GraphResult};
