//! Expansion of the `Sayings` locale cascade.
//!
//! Locale resources live in `Sayings` directories that may appear at any
//! level of the tree. Resources from shallower (more general) levels are
//! ordered before deeper (more specific) ones so the runtime lets specific
//! sayings override general ones.

use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::{
    constants::{MULTI_LANG, SAYINGS_DIR},
    walk::source_files,
};

/// Directories searched for a `Sayings` subdirectory, most general first.
///
/// These are the ancestors of `entry_dir` from the outermost down to
/// `entry_dir` itself, followed by the directories leading down to
/// `trigger_dir` when it lies beneath `entry_dir`.
///
/// The walk is not bounded by the source root: a `Sayings` directory in any
/// ancestor, up to the filesystem root, joins the cascade. Locale resources
/// commonly sit above the directory the include probe settles on.
pub fn cascade_levels(entry_dir: &Path, trigger_dir: &Path) -> Vec<PathBuf> {
    let mut levels: Vec<PathBuf> = entry_dir.ancestors().map(Path::to_path_buf).collect();
    levels.reverse();

    if let Ok(rest) = trigger_dir.strip_prefix(entry_dir) {
        let mut current = entry_dir.to_path_buf();
        for component in rest.components() {
            current.push(component);
            levels.push(current.clone());
        }
    }
    levels
}

/// Locale resources contributed by one level of the cascade.
///
/// With a concrete language, the language-neutral files directly inside
/// `Sayings/` come first, then everything under `Sayings/<lang>/`. With the
/// multi-language wildcard the whole `Sayings/` tree is returned.
pub fn level_resources(level: &Path, lang: &str) -> Vec<PathBuf> {
    let sayings = level.join(SAYINGS_DIR);
    if !sayings.is_dir() {
        return Vec::new();
    }
    trace!("Found sayings directory: {}", sayings.display());

    if lang == MULTI_LANG {
        return source_files(&sayings, None);
    }

    let mut files = source_files(&sayings, Some(1));
    let lang_dir = sayings.join(lang);
    if lang_dir.is_dir() {
        files.extend(source_files(&lang_dir, None));
    }
    files
}

/// Every locale resource of the cascade from `entry_dir` to `trigger_dir`.
pub fn expand_sayings(entry_dir: &Path, trigger_dir: &Path, lang: &str) -> Vec<PathBuf> {
    let levels = cascade_levels(entry_dir, trigger_dir);
    trace!("Expanding sayings over {} levels", levels.len());

    let resources: Vec<PathBuf> =
        levels.iter().flat_map(|level| level_resources(level, lang)).collect();
    debug!("Expanded {} sayings for language '{}'", resources.len(), lang);
    resources
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_cascade_levels_general_first() {
        let levels = cascade_levels(Path::new("/p/src/app"), Path::new("/p/src/app"));
        assert_eq!(
            levels,
            vec![
                PathBuf::from("/"),
                PathBuf::from("/p"),
                PathBuf::from("/p/src"),
                PathBuf::from("/p/src/app"),
            ]
        );
    }

    #[test]
    fn test_cascade_levels_extend_to_trigger_dir() {
        let levels = cascade_levels(Path::new("/p"), Path::new("/p/a/b"));
        assert_eq!(
            levels,
            vec![
                PathBuf::from("/"),
                PathBuf::from("/p"),
                PathBuf::from("/p/a"),
                PathBuf::from("/p/a/b"),
            ]
        );
    }

    #[test]
    fn test_cascade_levels_ignore_unrelated_trigger_dir() {
        let levels = cascade_levels(Path::new("/p/app"), Path::new("/p/lib"));
        assert_eq!(levels.last(), Some(&PathBuf::from("/p/app")));
        assert_eq!(levels.len(), 3);
    }

    #[test]
    fn test_expand_sayings_reaches_outer_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "Sayings/outer.js", "");
        create_test_file(root, "work/project/src/Sayings/en/hello.js", "");
        create_test_file(root, "work/project/src/app/main.js", "");

        let entry_dir = root.join("work/project/src/app");
        let files = expand_sayings(&entry_dir, &entry_dir, "en");
        assert_eq!(
            relative_names(root, &files),
            vec!["Sayings/outer.js", "work/project/src/Sayings/en/hello.js"]
        );
    }

    #[test]
    fn test_level_resources_neutral_then_language() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "Sayings/greet.js", "");
        create_test_file(root, "Sayings/en/greet.js", "");
        create_test_file(root, "Sayings/en/forms/labels.js", "");
        create_test_file(root, "Sayings/fr/greet.js", "");

        let files = level_resources(root, "en");
        assert_eq!(
            relative_names(root, &files),
            vec!["Sayings/greet.js", "Sayings/en/forms/labels.js", "Sayings/en/greet.js"]
        );
    }

    #[test]
    fn test_level_resources_multi_takes_everything() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "Sayings/Base.js", "");
        create_test_file(root, "Sayings/en/greet.js", "");
        create_test_file(root, "Sayings/fr/greet.js", "");

        let files = level_resources(root, MULTI_LANG);
        assert_eq!(
            relative_names(root, &files),
            vec!["Sayings/Base.js", "Sayings/en/greet.js", "Sayings/fr/greet.js"]
        );
    }

    #[test]
    fn test_level_resources_without_sayings() {
        let temp_dir = TempDir::new().unwrap();
        assert!(level_resources(temp_dir.path(), "en").is_empty());
    }

    #[test]
    fn test_expand_sayings_cascade_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "src/app/Sayings/en/hello.js", "");
        create_test_file(root, "src/Sayings/en/hello.js", "");
        create_test_file(root, "src/Sayings/greet.js", "");
        create_test_file(root, "src/app/main.js", "");

        let entry_dir = root.join("src/app");
        let files = expand_sayings(&entry_dir, &entry_dir, "en");
        assert_eq!(
            relative_names(root, &files),
            vec!["src/Sayings/greet.js", "src/Sayings/en/hello.js", "src/app/Sayings/en/hello.js"]
        );
    }
}
