use anyhow::{Context, Result, ensure};
use log::{debug, info};
use std::io::Write;

use crate::{
    config::{Config, GraphFormat},
    render::{render_json, render_script},
    types::GraphResult,
    walker::LibraryWalker,
};

/// Walks every configured library and records the includes of each file.
///
/// Libraries are walked independently and in command-line order; a missing
/// library is logged and contributes no records.
pub fn run_graph(cfg: &Config) -> Result<GraphResult> {
    let root = cfg.source_root();
    info!("Building dependency graph of {}", root.display());
    ensure!(root.is_dir(), "Source root {} is not a directory", root.display());

    let libraries = cfg.library_dirs();
    debug!("Walking {} libraries", libraries.len());

    let mut records = Vec::new();
    let mut files_scanned = 0;
    for library in &libraries {
        let mut walker = LibraryWalker::new(&root, library, &cfg.lang);
        records.extend(walker.records());
        files_scanned += walker.files_scanned();
    }

    info!("Recorded {} files from {} libraries", records.len(), libraries.len());
    Ok(GraphResult { records, libraries_walked: libraries.len(), files_scanned })
}

/// Renders the graph in the configured format and writes it to `out`.
pub fn write_graph<W: Write>(cfg: &Config, result: &GraphResult, out: &mut W) -> Result<()> {
    let rendered = match cfg.format {
        GraphFormat::Script => render_script(cfg, &result.records),
        GraphFormat::Json => {
            render_json(&result.records).context("Failed to serialize dependency graph")?
        }
    };
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::{
        fs,
        path::{Path, PathBuf},
    };
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn config(root: &Path, libraries: &[&str]) -> Config {
        Config {
            src_path: PathBuf::from(format!("{}/", root.display())),
            res_path: "/res/".to_string(),
            lang: "en".to_string(),
            libraries: libraries.iter().map(PathBuf::from).collect(),
            format: GraphFormat::Script,
        }
    }

    fn fixture() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "Widgets/Button.js", "include('Widgets/Base.js');");
        create_test_file(root, "Widgets/Base.js", "");
        create_test_file(root, "Utils/format.js", "/* include('nope.js') */");
        create_test_file(root, "Store/main.js", "include('Widgets/Button.js');");
        create_test_file(root, ".cache/stale.js", "include('stale.js');");
        temp_dir
    }

    fn paths(result: &GraphResult) -> Vec<&str> {
        result.records.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn test_whole_root_is_walked_without_libraries() {
        let temp_dir = fixture();
        let result = run_graph(&config(temp_dir.path(), &[])).unwrap();
        assert_eq!(
            paths(&result),
            vec!["Store/main.js", "Utils/format.js", "Widgets/Base.js", "Widgets/Button.js"]
        );
        assert_eq!(result.libraries_walked, 1);
        assert_eq!(result.files_scanned, 4);
    }

    #[test]
    fn test_only_listed_libraries_are_walked_in_order() {
        let temp_dir = fixture();
        let result = run_graph(&config(temp_dir.path(), &["Widgets", "Missing", "Store"])).unwrap();
        assert_eq!(paths(&result), vec!["Widgets/Base.js", "Widgets/Button.js", "Store/main.js"]);
        assert_eq!(result.libraries_walked, 3);
    }

    #[test]
    fn test_missing_source_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(run_graph(&config(&temp_dir.path().join("nope"), &[])).is_err());
    }

    #[test]
    fn test_write_graph_script() {
        let temp_dir = fixture();
        let cfg = config(temp_dir.path(), &["Widgets"]);
        let result = run_graph(&cfg).unwrap();

        let mut out = Vec::new();
        write_graph(&cfg, &result, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            &lines[lines.len() - 2..],
            &["addDep('Widgets/Base.js', []);", "addDep('Widgets/Button.js', ['Widgets/Base.js']);"]
        );
    }

    #[test]
    fn test_write_graph_json() {
        let temp_dir = fixture();
        let mut cfg = config(temp_dir.path(), &["Store"]);
        cfg.format = GraphFormat::Json;
        let result = run_graph(&cfg).unwrap();

        let mut out = Vec::new();
        write_graph(&cfg, &result, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "path": "Store/main.js", "includes": ["Widgets/Button.js"] }])
        );
    }

    #[test]
    fn test_graph_is_deterministic() {
        let temp_dir = fixture();
        let cfg = config(temp_dir.path(), &[]);
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_graph(&cfg, &run_graph(&cfg).unwrap(), &mut first).unwrap();
        write_graph(&cfg, &run_graph(&cfg).unwrap(), &mut second).unwrap();
        assert_eq!(first, second);
    }
}
