use std::{io, path::PathBuf};

/// Failures surfaced by the resolution engine.
///
/// Only `RootNotFound` and `NoIncludes` stop a run; read failures of
/// individual dependencies are logged by the collector and skipped.
#[derive(Debug, thiserror::Error)]
pub enum UmbrellaError {
    #[error("Could not find a source root for {entry}: no ancestor directory contains '{probe}'")]
    RootNotFound { entry: PathBuf, probe: String },

    #[error("{entry} has no include directive to locate the source root from")]
    NoIncludes { entry: PathBuf },

    #[error("Error opening {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, UmbrellaError>;
