//! Rename command implementation.
//!
//! Scans a season directory, settles the show name and season for the
//! whole batch, previews the new names and renames the files once the user
//! agrees.

use crate::cli::prompt::Prompt;
use crate::core::factory::{Assembly, EpisodeFactory};
use crate::core::guesser::{guess_season_or_default, guess_show_name};
use crate::core::renamer::{RenameResult, Renamer};
use crate::core::scanner::scan_directory;
use crate::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Options of the rename command.
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Directory holding the episodes.
    pub directory: PathBuf,
    /// Show name given on the command line.
    pub show: Option<String>,
    /// Season given on the command line.
    pub season: Option<u32>,
    /// Skip every question.
    pub yes: bool,
    /// Preview only.
    pub dry_run: bool,
    /// Print the preview as JSON.
    pub json: bool,
}

/// What a rename run decided and did.
#[derive(Debug)]
pub struct RenameSummary {
    /// Show name used for every file.
    pub show_name: String,
    /// Season used for every file.
    pub season: u32,
    /// No file mentioned a season, so the default was offered.
    pub season_assumed: bool,
    /// Records and skipped files.
    pub assembly: Assembly,
    /// Rename outcome, `None` when nothing was renamed.
    pub renamed: Option<RenameResult>,
}

/// Where a run writes. In JSON mode `out` only gets the preview document
/// and every status line goes to `err`.
struct Output<O, E> {
    out: O,
    err: E,
    json: bool,
}

impl<O: Write, E: Write> Output<O, E> {
    fn status(&mut self) -> &mut dyn Write {
        if self.json {
            &mut self.err
        } else {
            &mut self.out
        }
    }
}

/// Execute the rename command on the terminal.
pub fn rename(options: &RenameOptions) -> Result<RenameSummary> {
    let mut prompt = Prompt::stdio();
    rename_with_prompt(options, &mut prompt, io::stdout().lock(), io::stderr())
}

/// Execute the rename command, asking questions through `prompt`.
///
/// The report goes to `out`. With `json` set, `out` receives nothing but
/// the JSON preview and the rest of the report goes to `err`.
pub fn rename_with_prompt<R, W, O, E>(
    options: &RenameOptions,
    prompt: &mut Prompt<R, W>,
    out: O,
    err: E,
) -> Result<RenameSummary>
where
    R: BufRead,
    W: Write,
    O: Write,
    E: Write,
{
    let mut output = Output {
        out,
        err,
        json: options.json,
    };

    writeln!(
        output.status(),
        "{}",
        "[RENAME] Renaming episodes...".bold().cyan()
    )?;
    writeln!(output.status())?;

    writeln!(output.status(), "[INFO] Reading: {}", options.directory.display())?;
    let scan = scan_directory(&options.directory)?;
    writeln!(output.status(), "[INFO] Loaded {} files", scan.files.len())?;
    if scan.skipped_non_utf8 > 0 {
        writeln!(
            output.status(),
            "{}",
            format!(
                "[WARNING] Skipped {} files whose names are not valid UTF-8",
                scan.skipped_non_utf8
            )
            .yellow()
        )?;
    }
    writeln!(output.status())?;

    // Show name is mandatory: no guess, no run.
    let show_name = match &options.show {
        Some(show) => show.clone(),
        None => {
            let guessed = guess_show_name(&scan.files)?;
            if options.yes {
                guessed
            } else {
                prompt.text("Show name", &guessed)?
            }
        }
    };

    let mut season_assumed = false;
    let season = match options.season {
        Some(season) => season,
        None => {
            let guessed = guess_season_or_default(&scan.files);
            if guessed.assumed {
                season_assumed = true;
                writeln!(
                    output.status(),
                    "{}",
                    format!(
                        "[WARNING] No file mentions a season, assuming season {}",
                        guessed.season
                    )
                    .yellow()
                )?;
            }
            if options.yes {
                guessed.season
            } else {
                prompt.number("Season", guessed.season)?
            }
        }
    };

    writeln!(output.status(), "  {} {}", "Show:".bold(), show_name)?;
    writeln!(output.status(), "  {} {}", "Season:".bold(), season)?;
    writeln!(output.status())?;

    let assembly = EpisodeFactory::new(show_name.as_str(), season).assemble(&scan.files);
    write_preview(&mut output, &assembly)?;

    let mut summary = RenameSummary {
        show_name,
        season,
        season_assumed,
        assembly,
        renamed: None,
    };

    if summary.assembly.records.is_empty() {
        writeln!(output.status(), "{}", "[WARNING] Nothing to rename".yellow())?;
        return Ok(summary);
    }

    if options.dry_run {
        writeln!(output.status(), "{}", "[DRY-RUN] No changes were made".green())?;
        return Ok(summary);
    }

    if !options.yes && !prompt.confirm("Do you want to rename these?")? {
        writeln!(output.status(), "{}", "Okay, I did nothing.".yellow())?;
        return Ok(summary);
    }

    let renamer = Renamer::new(&options.directory).with_progress(!options.json);
    let result = renamer.rename_all(&summary.assembly.records);

    writeln!(output.status())?;
    result.write_summary(output.status())?;
    writeln!(output.status())?;

    if result.is_success() {
        writeln!(output.status(), "{}", "[OK] All done!".green())?;
    } else {
        writeln!(
            output.status(),
            "{}",
            "[WARNING] Rename completed with errors".yellow()
        )?;
    }

    summary.renamed = Some(result);
    Ok(summary)
}

/// Write the planned renames and the files left out.
fn write_preview<O: Write, E: Write>(
    output: &mut Output<O, E>,
    assembly: &Assembly,
) -> Result<()> {
    if output.json {
        serde_json::to_writer_pretty(&mut output.out, &assembly.records)?;
        writeln!(output.out)?;
    } else {
        writeln!(output.out, "{}", "[Preview]".bold())?;
        for record in &assembly.records {
            writeln!(output.out, "  {}", record)?;
        }
        writeln!(output.out)?;
    }

    if !assembly.skipped.is_empty() {
        let status = output.status();
        writeln!(
            status,
            "{}",
            "[SKIPPED] These files will not be renamed:".bold().yellow()
        )?;
        for skipped in &assembly.skipped {
            writeln!(status, "  - {}: {}", skipped.source, skipped.error)?;
        }
        writeln!(status)?;
    }

    Ok(())
}
