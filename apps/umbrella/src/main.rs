use anyhow::Result;
use clap::{Parser, Subcommand, error::ErrorKind};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "umbrella")]
#[command(about = "Resolve include directives into bundles or loader dependency graphs", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Concatenate an entry file and everything it includes into one bundle
    Bundle(umbrella_bundle::Config),
    /// Describe the include graph of a source tree for a runtime loader
    Graph(umbrella_graph::Config),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            // Usage was asked for, or nothing was given to work on
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::DisplayVersion => {
                e.print()?;
                return Ok(());
            }
            _ => e.exit(),
        },
    };
    debug!("Parsed CLI arguments: {:?}", cli.command);

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let start = Instant::now();

    match cli.command {
        Commands::Bundle(cfg) => {
            info!("Running bundle for {}", cfg.entry.display());
            let result = umbrella_bundle::run_bundle(&cfg)?;
            umbrella_bundle::write_bundle(&cfg, &result, &mut stdout)?;
            stdout.flush()?;

            eprintln!(
                "{} Bundled {} files ({} namespaces) in {}ms.",
                "●".bright_blue(),
                result.files_bundled.to_string().cyan(),
                result.namespaces.to_string().cyan(),
                start.elapsed().as_millis().to_string().cyan()
            );
        }
        Commands::Graph(cfg) => {
            info!("Running graph for {}", cfg.src_path.display());
            let result = umbrella_graph::run_graph(&cfg)?;
            umbrella_graph::write_graph(&cfg, &result, &mut stdout)?;
            stdout.flush()?;

            eprintln!(
                "{} Recorded {} files from {} libraries in {}ms.",
                "●".bright_blue(),
                result.records.len().to_string().cyan(),
                result.libraries_walked.to_string().cyan(),
                start.elapsed().as_millis().to_string().cyan()
            );
        }
    }

    Ok(())
}
