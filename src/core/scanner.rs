//! Directory scanner module.
//!
//! Lists the files of a season directory. Only regular files directly
//! inside the directory are considered; subdirectories are not entered.

use crate::utils::fs::ensure_directory;
use crate::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Result of scanning a directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// File names (without directory), sorted.
    pub files: Vec<String>,
    /// Subdirectories that were skipped.
    pub skipped_dirs: usize,
    /// Entries whose name is not valid UTF-8.
    pub skipped_non_utf8: usize,
}

/// Scan a directory for candidate episode files.
///
/// File names are sorted so the guessers see a stable order on every run.
///
/// # Arguments
/// * `path` - The directory path to scan
pub fn scan_directory(path: &Path) -> Result<ScanResult> {
    ensure_directory(path)?;

    let mut result = ScanResult::default();

    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_dir() {
            result.skipped_dirs += 1;
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => result.files.push(name.to_string()),
            None => {
                tracing::warn!("Skipping non UTF-8 filename: {:?}", entry.file_name());
                result.skipped_non_utf8 += 1;
            }
        }
    }

    result.files.sort();

    tracing::info!(
        "Scanned {}: {} files, {} directories skipped",
        path.display(),
        result.files.len(),
        result.skipped_dirs
    );

    Ok(result)
}

// Integration tests for scan_directory() live in tests/scanner_tests.rs
