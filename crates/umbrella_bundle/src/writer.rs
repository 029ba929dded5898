use log::{error, trace};
use std::{fs, path::Path};
use umbrella_core::{NamespaceRegistry, SCRIPT_EXTENSION, STYLE_EXTENSION, script_string};

use crate::prelude::PRELUDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stream {
    Script,
    Style,
}

impl Stream {
    fn for_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?;
        if ext == SCRIPT_EXTENSION {
            Some(Stream::Script)
        } else if ext == STYLE_EXTENSION {
            Some(Stream::Style)
        } else {
            None
        }
    }
}

/// Accumulates the script and style bundles in memory.
///
/// The style stream is optional; style files appended while it is absent
/// are dropped.
pub(crate) struct BundleWriter {
    script: Vec<u8>,
    style: Option<Vec<u8>>,
    files_bundled: usize,
}

impl BundleWriter {
    pub(crate) fn new(with_style: bool) -> Self {
        Self { script: Vec::new(), style: with_style.then(Vec::new), files_bundled: 0 }
    }

    /// Prelude, globals, then one declaration per namespace in sorted order.
    pub(crate) fn write_header(
        &mut self,
        lang: Option<&str>,
        res_path: &str,
        namespaces: &NamespaceRegistry,
    ) {
        self.script.extend_from_slice(PRELUDE.as_bytes());
        if let Some(lang) = lang {
            self.push_line(&format!("var lang = {};", script_string(lang)));
        }
        self.push_line(&format!("var RES_PATH = {};", script_string(res_path)));
        for declaration in namespaces.declarations() {
            self.push_line(&declaration);
        }
    }

    /// Appends a file's bytes verbatim to the stream its extension selects.
    /// Returns the stream written to, or `None` if the file was skipped.
    pub(crate) fn append_file(&mut self, path: &Path) -> Option<Stream> {
        let Some(stream) = Stream::for_path(path) else {
            trace!("Dropping {}: unrecognized extension", path.display());
            return None;
        };
        let buf = match stream {
            Stream::Script => &mut self.script,
            Stream::Style => match self.style.as_mut() {
                Some(style) => style,
                None => {
                    trace!("Dropping {}: no style output", path.display());
                    return None;
                }
            },
        };

        match fs::read(path) {
            Ok(bytes) => {
                trace!("Bundling {} ({} bytes)", path.display(), bytes.len());
                buf.extend_from_slice(&bytes);
                self.files_bundled += 1;
                Some(stream)
            }
            Err(e) => {
                error!("Error opening {}: {}", path.display(), e);
                None
            }
        }
    }

    pub(crate) fn files_bundled(&self) -> usize {
        self.files_bundled
    }

    pub(crate) fn finish(self) -> (Vec<u8>, Option<Vec<u8>>) {
        (self.script, self.style)
    }

    fn push_line(&mut self, line: &str) {
        self.script.extend_from_slice(line.as_bytes());
        self.script.push(b'\n');
    }
}
