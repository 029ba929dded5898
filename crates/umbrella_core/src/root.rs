use log::{debug, trace};
use path_clean::PathClean;
use std::{
    io,
    path::{Component, Path, PathBuf},
};

use crate::error::{Result, UmbrellaError};

/// The single directory every include literal of a run is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRoot {
    dir: PathBuf,
}

impl SourceRoot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Joins an include literal onto the root. Root-relative literals
    /// (leading separator) resolve the same way as plain relative ones.
    pub fn resolve(&self, literal: &str) -> PathBuf {
        self.dir.join(literal.trim_start_matches(['/', '\\'])).clean()
    }

    /// The part of `path` below the root, if it lives under it.
    pub fn relative<'a>(&self, path: &'a Path) -> Option<&'a Path> {
        path.strip_prefix(&self.dir).ok()
    }
}

/// Finds the nearest ancestor of `entry` that contains the `probe` literal.
///
/// The probe is the first include literal of the entry file. Ancestors are
/// tested from the entry's parent directory upward to the filesystem root.
pub fn find_source_root(entry: &Path, probe: &str) -> Result<SourceRoot> {
    debug!("Searching for source root of {} with probe '{}'", entry.display(), probe);
    let probe_rel = probe.trim_start_matches(['/', '\\']);
    let mut current = entry.parent();

    while let Some(dir) = current {
        let candidate = dir.join(probe_rel);
        trace!("Checking for probe at: {}", candidate.display());
        if candidate.exists() {
            debug!("Found source root at: {}", dir.display());
            return Ok(SourceRoot::new(dir));
        }
        current = dir.parent();
    }

    debug!("No ancestor of {} contains '{}'", entry.display(), probe);
    Err(UmbrellaError::RootNotFound { entry: entry.to_path_buf(), probe: probe.to_string() })
}

pub fn make_absolute_and_clean(path: &Path) -> io::Result<PathBuf> {
    Ok(std::path::absolute(path)?.clean())
}

/// Renders a relative path with `/` separators on every platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(_) | Component::ParentDir => Some(c.as_os_str().to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
