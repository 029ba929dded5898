use anyhow::{Context, Result};
use log::{debug, info};
use std::{fs, io::Write, iter};
use umbrella_core::{CollectorConfig, collect_dependencies};

use crate::{config::Config, types::BundleResult, writer::BundleWriter};

/// Resolves the entry's dependencies and renders the bundles in memory.
///
/// Dependency bodies come in discovery order, followed by the entry itself.
pub fn run_bundle(cfg: &Config) -> Result<BundleResult> {
    info!("Bundling {} for language '{}'", cfg.entry.display(), cfg.lang);

    let collector_cfg = CollectorConfig { entry: cfg.entry.clone(), lang: cfg.lang.clone() };
    let collection = collect_dependencies(&collector_cfg)
        .with_context(|| format!("Failed to resolve dependencies of {}", cfg.entry.display()))?;

    let mut writer = BundleWriter::new(cfg.out_style.is_some());
    writer.write_header(cfg.lang_global(), &cfg.res_path, &collection.namespaces);
    debug!("Wrote header with {} namespace declarations", collection.namespaces.len());

    for path in collection.paths().chain(iter::once(collection.entry.as_path())) {
        writer.append_file(path);
    }

    let files_bundled = writer.files_bundled();
    let (script, style) = writer.finish();
    info!("Bundled {} files", files_bundled);

    Ok(BundleResult {
        script,
        style,
        files_bundled,
        files_scanned: collection.files_scanned,
        namespaces: collection.namespaces.len(),
    })
}

/// Writes the rendered bundles to their configured outputs. The script
/// bundle goes to `stdout` when no script output path is set.
pub fn write_bundle<W: Write>(cfg: &Config, result: &BundleResult, stdout: &mut W) -> Result<()> {
    match &cfg.out_script {
        Some(path) => {
            fs::write(path, &result.script)
                .with_context(|| format!("Failed to write script bundle to {}", path.display()))?;
            debug!("Wrote script bundle to {}", path.display());
        }
        None => stdout.write_all(&result.script)?,
    }

    if let (Some(path), Some(style)) = (&cfg.out_style, &result.style) {
        fs::write(path, style)
            .with_context(|| format!("Failed to write style bundle to {}", path.display()))?;
        debug!("Wrote style bundle to {}", path.display());
    }
    Ok(())
}
