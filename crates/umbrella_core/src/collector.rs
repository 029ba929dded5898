use log::{debug, error, info, trace};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    constants::MARKER_FILE,
    error::{Result, UmbrellaError},
    locale::expand_sayings,
    namespace::NamespaceRegistry,
    root::{SourceRoot, find_source_root, make_absolute_and_clean},
    scanner::includes_for,
};

pub struct CollectorConfig {
    pub entry: PathBuf,
    pub lang: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    /// Named by an include directive
    Include,
    /// Pulled in by the sayings cascade
    Sayings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub path: PathBuf,
    /// Position in discovery order
    pub index: usize,
    pub kind: DependencyKind,
}

/// Result of one dependency collection run.
#[derive(Debug)]
pub struct Collection {
    pub root: SourceRoot,
    pub entry: PathBuf,
    /// Dependencies of the entry in depth-first, first-discovery order. The
    /// entry itself is not part of the list.
    pub dependencies: Vec<ResolvedDependency>,
    pub namespaces: NamespaceRegistry,
    pub files_scanned: usize,
}

impl Collection {
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.dependencies.iter().map(|dep| dep.path.as_path())
    }
}

/// Resolves every file reachable from the entry through include directives.
///
/// The first include literal of the entry is used to discover the source
/// root; failing that, no dependency can be resolved and the run stops.
pub fn collect_dependencies(cfg: &CollectorConfig) -> Result<Collection> {
    debug!("Collecting dependencies of {}", cfg.entry.display());
    let entry = make_absolute_and_clean(&cfg.entry)
        .map_err(|source| UmbrellaError::Read { path: cfg.entry.clone(), source })?;

    let literals = includes_for(&entry)?;
    let probe =
        literals.first().ok_or_else(|| UmbrellaError::NoIncludes { entry: entry.clone() })?;
    let root = find_source_root(&entry, probe)?;
    info!("Using source root: {}", root.path().display());

    let mut collector = Collector::new(root, &entry, &cfg.lang);
    collector.follow(&entry, literals);

    let collection = collector.finish(entry);
    info!(
        "Collected {} dependencies and {} namespaces from {} scanned files",
        collection.dependencies.len(),
        collection.namespaces.len(),
        collection.files_scanned
    );
    Ok(collection)
}

/// State owned by a single collection run.
struct Collector<'a> {
    root: SourceRoot,
    entry_dir: PathBuf,
    lang: &'a str,
    seen: HashSet<PathBuf>,
    dependencies: Vec<ResolvedDependency>,
    namespaces: NamespaceRegistry,
    files_scanned: usize,
}

impl<'a> Collector<'a> {
    fn new(root: SourceRoot, entry: &Path, lang: &'a str) -> Self {
        let mut namespaces = NamespaceRegistry::new();
        if let Some(rel) = root.relative(entry) {
            namespaces.register(rel);
        }
        let entry_dir = entry.parent().map(Path::to_path_buf).unwrap_or_else(|| root.path().into());

        Self {
            root,
            entry_dir,
            lang,
            // Seeded so a cycle back to the entry never lists it as a dependency
            seen: HashSet::from([entry.to_path_buf()]),
            dependencies: Vec::new(),
            namespaces,
            files_scanned: 1,
        }
    }

    fn visit(&mut self, file: &Path) {
        match includes_for(file) {
            Ok(literals) => {
                self.files_scanned += 1;
                self.follow(file, literals);
            }
            Err(e) => error!("{}", e),
        }
    }

    fn follow(&mut self, file: &Path, literals: Vec<String>) {
        trace!("Following {} includes of {}", literals.len(), file.display());
        for literal in literals {
            let path = self.root.resolve(&literal);
            if !self.record(&path, DependencyKind::Include) {
                trace!("Already collected: {}", path.display());
                continue;
            }

            self.visit(&path);

            if self.is_marker(&path) {
                let trigger_dir =
                    file.parent().map(Path::to_path_buf).unwrap_or_else(|| self.entry_dir.clone());
                self.expand_locale(&trigger_dir);
            }
        }
    }

    /// Appends a newly discovered path and registers its namespaces.
    /// Returns false if the path was already collected.
    fn record(&mut self, path: &Path, kind: DependencyKind) -> bool {
        if !self.seen.insert(path.to_path_buf()) {
            return false;
        }

        match self.root.relative(path) {
            Some(_) if !path.is_file() => {
                trace!("{} does not exist, no namespace", path.display())
            }
            Some(rel) => {
                self.namespaces.register(rel);
            }
            None => trace!("{} is outside the source root, no namespace", path.display()),
        }

        trace!("Collected dependency #{}: {}", self.dependencies.len(), path.display());
        self.dependencies.push(ResolvedDependency {
            path: path.to_path_buf(),
            index: self.dependencies.len(),
            kind,
        });
        true
    }

    fn is_marker(&self, path: &Path) -> bool {
        self.root.relative(path).is_some_and(|rel| rel == Path::new(MARKER_FILE))
    }

    fn expand_locale(&mut self, trigger_dir: &Path) {
        debug!("Marker included, expanding sayings for '{}'", self.lang);
        for resource in expand_sayings(&self.entry_dir, trigger_dir, self.lang) {
            if !self.record(&resource, DependencyKind::Sayings) {
                trace!("Saying already collected: {}", resource.display());
            }
        }
    }

    fn finish(self, entry: PathBuf) -> Collection {
        Collection {
            root: self.root,
            entry,
            dependencies: self.dependencies,
            namespaces: self.namespaces,
            files_scanned: self.files_scanned,
        }
    }
}
