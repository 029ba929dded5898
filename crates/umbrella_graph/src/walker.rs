use log::{debug, error, trace};
use std::path::{Path, PathBuf};
use umbrella_core::{MARKER_FILE, MULTI_LANG, SAYINGS_DIR, includes_for, source_files, to_slash};

use crate::types::DependencyGraphRecord;

/// Walks one library directory and records the includes of every source file.
pub(crate) struct LibraryWalker<'a> {
    root: &'a Path,
    library: &'a Path,
    lang: &'a str,
    /// Locale resources of the library, listed on first use
    sayings: Option<Vec<String>>,
    files_scanned: usize,
}

impl<'a> LibraryWalker<'a> {
    pub(crate) fn new(root: &'a Path, library: &'a Path, lang: &'a str) -> Self {
        Self { root, library, lang, sayings: None, files_scanned: 0 }
    }

    pub(crate) fn records(&mut self) -> Vec<DependencyGraphRecord> {
        debug!("Walking library: {}", self.library.display());
        let mut records = Vec::new();
        for file in source_files(self.library, None) {
            match includes_for(&file) {
                Ok(literals) => {
                    self.files_scanned += 1;
                    let record = self.record_for(&file, literals);
                    trace!("{} has {} includes", record.path, record.includes.len());
                    records.push(record);
                }
                Err(e) => error!("{}", e),
            }
        }
        debug!("Recorded {} files under {}", records.len(), self.library.display());
        records
    }

    pub(crate) fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    fn record_for(&mut self, file: &Path, literals: Vec<String>) -> DependencyGraphRecord {
        let mut includes = Vec::with_capacity(literals.len());
        for literal in literals {
            let is_marker = literal.ends_with(MARKER_FILE);
            includes.push(literal);
            if is_marker {
                trace!("Marker included by {}, inlining sayings", file.display());
                includes.extend(self.sayings().iter().cloned());
            }
        }
        DependencyGraphRecord { path: self.relative(file), includes }
    }

    fn sayings(&mut self) -> &[String] {
        let (root, library, lang) = (self.root, self.library, self.lang);
        self.sayings.get_or_insert_with(|| {
            let dir = sayings_dir(library, lang);
            let resources: Vec<String> =
                source_files(&dir, None).iter().map(|p| relative_to(root, p)).collect();
            debug!("Found {} sayings under {}", resources.len(), dir.display());
            resources
        })
    }

    fn relative(&self, path: &Path) -> String {
        relative_to(self.root, path)
    }
}

/// `<library>/Sayings`, narrowed to the language subdirectory unless every
/// language is requested.
pub(crate) fn sayings_dir(library: &Path, lang: &str) -> PathBuf {
    let dir = library.join(SAYINGS_DIR);
    if lang == MULTI_LANG { dir } else { dir.join(lang) }
}

fn relative_to(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => to_slash(rel),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
