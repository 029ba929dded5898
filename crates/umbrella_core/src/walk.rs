use ignore::{DirEntry, WalkBuilder};
use log::{debug, error, trace};
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::constants::SCRIPT_EXTENSION;

/// Collects every script source under `dir`, in file-name order.
///
/// Hidden entries are skipped, directories are only descended when their name
/// has no extension (or the script extension), and only files carrying the
/// script extension are returned. Symlinks are followed; loops are reported
/// by the walker and skipped.
pub fn source_files(dir: &Path, max_depth: Option<usize>) -> Vec<PathBuf> {
    debug!("Walking source files under: {}", dir.display());
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .hidden(true)
        .follow_links(true)
        .max_depth(max_depth)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|dent| dent.depth() == 0 || !is_dir(dent) || is_walkable_dir(dent.file_name()))
        .build();

    let mut files = Vec::new();
    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                error!("Error opening under {}: {}", dir.display(), e);
                continue;
            }
        };
        if !dent.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if has_script_extension(dent.path()) {
            trace!("Found source file: {}", dent.path().display());
            files.push(dent.into_path());
        }
    }

    debug!("Collected {} source files under {}", files.len(), dir.display());
    files
}

pub fn has_script_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SCRIPT_EXTENSION)
}

fn is_dir(dent: &DirEntry) -> bool {
    dent.file_type().is_some_and(|ft| ft.is_dir())
}

fn is_walkable_dir(name: &OsStr) -> bool {
    match Path::new(name).extension() {
        None => true,
        Some(ext) => ext == SCRIPT_EXTENSION,
    }
}
