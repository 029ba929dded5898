/// Rendered artifacts of one bundle run, held in memory until written.
#[derive(Debug, Clone)]
pub struct BundleResult {
    pub script: Vec<u8>,
    /// Present only when a style output was requested
    pub style: Option<Vec<u8>>,
    pub files_bundled: usize,
    pub files_scanned: usize,
    pub namespaces: usize,
}
