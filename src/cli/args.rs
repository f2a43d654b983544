//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tvrename - Rename a season of TV episodes to `Show S01E02 - Title.ext`
#[derive(Parser, Debug)]
#[command(name = "tvrename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Guess the show and season, preview and rename the files
    Rename {
        /// Directory containing one season of a show
        #[arg(value_name = "DIRECTORY", default_value = ".")]
        directory: PathBuf,

        /// Use this show name instead of guessing it
        #[arg(long, value_name = "NAME")]
        show: Option<String>,

        /// Use this season instead of guessing it
        #[arg(long, value_name = "N")]
        season: Option<u32>,

        /// Accept every guess and rename without asking
        #[arg(short, long)]
        yes: bool,

        /// Dry run - only show what would be renamed
        #[arg(long)]
        dry_run: bool,

        /// Print the preview as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what every file votes for show name and season
    Guess {
        /// Directory containing one season of a show
        #[arg(value_name = "DIRECTORY", default_value = ".")]
        directory: PathBuf,
    },
}
