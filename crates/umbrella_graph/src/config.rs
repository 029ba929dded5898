use clap::{Parser, ValueEnum};
use std::path::{MAIN_SEPARATOR, PathBuf};
use umbrella_core::MULTI_LANG;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GraphFormat {
    /// `addDep(...)` statements for the runtime loader
    #[default]
    Script,
    /// A JSON array of records
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "graph")]
#[command(about = "Describe the include graph of a source tree for a runtime loader")]
#[command(arg_required_else_help = true)]
pub struct Config {
    /// Source root every recorded path is relative to
    pub src_path: PathBuf,

    /// Base path the runtime loads resources from
    pub res_path: String,

    /// Language code of the sayings to list, or "multi" for all of them
    pub lang: String,

    /// Library directories under the source root to walk (defaults to the whole root)
    pub libraries: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = GraphFormat::Script)]
    pub format: GraphFormat,
}

impl Config {
    pub fn is_multi_lang(&self) -> bool {
        self.lang == MULTI_LANG
    }

    /// The source root with a single trailing separator removed.
    pub fn source_root(&self) -> PathBuf {
        let raw = self.src_path.to_string_lossy();
        match raw.strip_suffix(['/', '\\', MAIN_SEPARATOR]) {
            Some(stripped) if !stripped.is_empty() => PathBuf::from(stripped),
            _ => self.src_path.clone(),
        }
    }

    /// Directories to walk, in the order given on the command line.
    pub fn library_dirs(&self) -> Vec<PathBuf> {
        let root = self.source_root();
        if self.libraries.is_empty() {
            return vec![root];
        }
        self.libraries.iter().map(|lib| root.join(lib)).collect()
    }
}
