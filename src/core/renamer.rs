//! Renamer module.
//!
//! Applies the renames of an assembled batch inside its base directory.
//! A failing rename is recorded and the remaining files are still tried.

use crate::models::episode::EpisodeRecord;
use crate::utils::fs::rename_no_clobber;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Outcome of renaming a batch.
#[derive(Debug, Default)]
pub struct RenameResult {
    /// Files renamed.
    pub success_count: usize,
    /// Files that already had their target name.
    pub skip_count: usize,
    /// Files that failed to rename.
    pub error_count: usize,
    /// One line per failure, naming the file and the reason.
    pub errors: Vec<String>,
}

impl RenameResult {
    /// Check if every rename succeeded.
    pub fn is_success(&self) -> bool {
        self.error_count == 0
    }

    /// Write summary.
    pub fn write_summary<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", "Rename Summary".bold().green())?;
        writeln!(out, "  {} {}", "Renamed:".bold(), self.success_count)?;
        writeln!(out, "  {} {}", "Unchanged:".bold(), self.skip_count)?;
        writeln!(out, "  {} {}", "Failed:".bold(), self.error_count)?;

        if !self.errors.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", "Errors:".bold().red())?;
            for error in &self.errors {
                writeln!(out, "  - {}", error)?;
            }
        }

        Ok(())
    }
}

/// Renames episode files inside one directory.
pub struct Renamer {
    base_dir: PathBuf,
    show_progress: bool,
}

impl Renamer {
    /// Create a renamer for files in `base_dir`.
    pub fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            show_progress: true,
        }
    }

    /// Enable or disable the progress bar.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Source and target paths of a record.
    pub fn paths(&self, record: &EpisodeRecord) -> (PathBuf, PathBuf) {
        (
            self.base_dir.join(&record.source),
            self.base_dir.join(record.file_name()),
        )
    }

    /// Rename every record, continuing past failures.
    pub fn rename_all(&self, records: &[EpisodeRecord]) -> RenameResult {
        let mut result = RenameResult::default();

        let pb = if self.show_progress {
            ProgressBar::new(records.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        for record in records {
            pb.set_message(record.identifier());
            pb.inc(1);

            if record.is_unchanged() {
                tracing::debug!("Already named: {}", record.source);
                result.skip_count += 1;
                continue;
            }

            let (from, to) = self.paths(record);
            match rename_no_clobber(&from, &to) {
                Ok(()) => {
                    tracing::info!("Renamed: {}", record);
                    result.success_count += 1;
                }
                Err(e) => {
                    tracing::error!("Rename failed: {} - {}", record.source, e);
                    result.error_count += 1;
                    result.errors.push(format!("{}: {}", record.source, e));
                }
            }
        }

        pb.finish_and_clear();
        result
    }
}
