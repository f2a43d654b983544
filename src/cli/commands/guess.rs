//! Guess command implementation.
//!
//! Prints how the files of a directory vote for show name and season,
//! without renaming anything.

use crate::core::guesser::{season_vote, show_name_vote, tally, DEFAULT_SEASON};
use crate::core::scanner::scan_directory;
use crate::Result;
use colored::Colorize;
use std::fmt::Display;
use std::path::Path;

/// Execute the guess command.
pub fn guess(directory: &Path) -> Result<()> {
    println!("{}", "[GUESS] Guessing show and season...".bold().cyan());
    println!();

    let scan = scan_directory(directory)?;
    println!("[INFO] Loaded {} files", scan.files.len());
    if scan.skipped_non_utf8 > 0 {
        println!(
            "{}",
            format!(
                "[WARNING] Skipped {} files whose names are not valid UTF-8",
                scan.skipped_non_utf8
            )
            .yellow()
        );
    }
    println!();

    let shows = tally(&scan.files, show_name_vote);
    let seasons = tally(&scan.files, season_vote);

    print_votes("Show name", shows.entries());
    print_votes("Season", seasons.entries());

    match shows.winner() {
        Some(show) => println!("  {} {}", "Show:".bold(), show),
        None => println!("  {} {}", "Show:".bold(), "unknown".red()),
    }
    match seasons.winner() {
        Some(season) => println!("  {} {}", "Season:".bold(), season),
        None => println!(
            "  {} {} ({})",
            "Season:".bold(),
            DEFAULT_SEASON,
            "assumed".yellow()
        ),
    }

    Ok(())
}

fn print_votes<T: Display>(label: &str, entries: &[(T, usize)]) {
    println!("{}", format!("[{}]", label).bold());
    if entries.is_empty() {
        println!("  (no votes)");
    }
    for (value, count) in entries {
        println!("  {:>4}  {}", count, value);
    }
    println!();
}
