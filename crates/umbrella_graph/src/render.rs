use umbrella_core::script_string;

use crate::{config::Config, types::DependencyGraphRecord};

const BANNER: &str = "// THIS FILE IS AUTO-GENERATED BY UMBRELLA. DO NOT EDIT.";

/// Renders the graph as loader statements: a banner, the globals, then one
/// `addDep` call per record.
pub(crate) fn render_script(cfg: &Config, records: &[DependencyGraphRecord]) -> String {
    let mut lines = vec![
        BANNER.to_string(),
        format!("SRC_PATH = {};", script_string(&cfg.source_root().to_string_lossy())),
        format!("RES_PATH = {};", script_string(&cfg.res_path)),
    ];
    if !cfg.is_multi_lang() {
        lines.push(format!("lang = {};", script_string(&cfg.lang)));
    }

    for record in records {
        let includes: Vec<String> =
            record.includes.iter().map(String::as_str).map(script_string).collect();
        lines.push(format!("addDep({}, [{}]);", script_string(&record.path), includes.join(", ")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub(crate) fn render_json(records: &[DependencyGraphRecord]) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}
