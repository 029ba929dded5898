//! Bundle mode: one concatenated script (and optional stylesheet) per entry.
//!
//! The bundle starts with a fixed prelude, the `lang`/`RES_PATH` globals and
//! one declaration per namespace, followed by the body of every dependency in
//! discovery order and finally the entry itself.
//!
//! # Examples
//!
//! ```no_run
//! use std::io::{BufWriter, Write};
//! use umbrella_bundle::{Config, run_bundle, write_bundle};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     entry: "src/store/main.js".into(),
//!     lang: "en".to_string(),
//!     res_path: "/res/".to_string(),
//!     out_script: None,
//!     out_style: Some("out/store.css".into()),
//! };
//!
//! let result = run_bundle(&cfg)?;
//! let mut stdout = BufWriter::new(std::io::stdout());
//! write_bundle(&cfg, &result, &mut stdout)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod bundler;
mod config;
mod prelude;
mod types;
mod writer;

// Re-export public API
pub use bundler::{run_bundle, write_bundle};
pub use config::Config;
pub use types::BundleResult;
