use clap::Parser;
use std::path::PathBuf;
use umbrella_core::MULTI_LANG;

#[derive(Debug, Clone, Parser)]
#[command(name = "bundle")]
#[command(about = "Concatenate an entry file and everything it includes into one bundle")]
#[command(arg_required_else_help = true)]
pub struct Config {
    /// Entry script whose includes are bundled
    pub entry: PathBuf,

    /// Language code of the sayings to bundle, or "multi" for all of them
    pub lang: String,

    /// Base path the runtime loads resources from
    pub res_path: String,

    /// Write the script bundle here instead of stdout
    #[arg(long)]
    pub out_script: Option<PathBuf>,

    /// Write the style bundle here; style files are dropped without it
    #[arg(long)]
    pub out_style: Option<PathBuf>,
}

impl Config {
    pub fn is_multi_lang(&self) -> bool {
        self.lang == MULTI_LANG
    }

    /// Language assigned in the bundle globals, if any.
    pub fn lang_global(&self) -> Option<&str> {
        if self.is_multi_lang() { None } else { Some(&self.lang) }
    }
}
