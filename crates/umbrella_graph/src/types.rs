use serde::Serialize;

/// One file of the walked tree and the include literals found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyGraphRecord {
    /// Path relative to the source root, `/`-separated
    pub path: String,
    /// Literals in scan order, verbatim, with locale resources inlined after a marker
    pub includes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GraphResult {
    pub records: Vec<DependencyGraphRecord>,
    pub libraries_walked: usize,
    pub files_scanned: usize,
}
