//! tvrename CLI
//!
//! A command-line tool for renaming a season of TV episodes into a
//! consistent `Show Name S01E02 - Episode Title.ext` scheme.

use clap::Parser;
use tvrename::cli::{
    args::{Cli, Commands},
    commands::{guess, rename},
};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run the appropriate command
    match cli.command {
        Commands::Rename {
            directory,
            show,
            season,
            yes,
            dry_run,
            json,
        } => {
            let options = rename::RenameOptions {
                directory,
                show,
                season,
                yes,
                dry_run,
                json,
            };
            let summary = rename::rename(&options)?;

            if let Some(result) = summary.renamed {
                if !result.is_success() {
                    anyhow::bail!("{} of the renames failed", result.error_count);
                }
            }
        }

        Commands::Guess { directory } => {
            guess::guess(&directory)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("tvrename=debug")
    } else {
        EnvFilter::new("tvrename=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}
