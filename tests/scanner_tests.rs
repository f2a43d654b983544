//! Integration tests for the scanner module.
//!
//! Tests cover:
//! - Directory listing order
//! - Subdirectory handling
//! - Error handling for missing paths and plain files

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tvrename::core::scanner::scan_directory;
use tvrename::Error;

#[test]
fn test_scan_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let result = scan_directory(temp_dir.path()).unwrap();

    assert!(result.files.is_empty());
    assert_eq!(result.skipped_dirs, 0);
}

#[test]
fn test_scan_sorted_files() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(temp_dir.path().join("Show.S01E02.mkv"), "fake").unwrap();
    fs::write(temp_dir.path().join("Show.S01E10.mkv"), "fake").unwrap();
    fs::write(temp_dir.path().join("Show.S01E01.mkv"), "fake").unwrap();

    let result = scan_directory(temp_dir.path()).unwrap();

    assert_eq!(
        result.files,
        vec!["Show.S01E01.mkv", "Show.S01E02.mkv", "Show.S01E10.mkv"]
    );
}

#[test]
fn test_scan_keeps_non_video_files() {
    let temp_dir = TempDir::new().unwrap();

    // Every file is a candidate; the parsers decide what is an episode.
    fs::write(temp_dir.path().join("Show.S01E01.srt"), "fake").unwrap();
    fs::write(temp_dir.path().join("notes"), "fake").unwrap();

    let result = scan_directory(temp_dir.path()).unwrap();

    assert_eq!(result.files, vec!["Show.S01E01.srt", "notes"]);
}

#[test]
fn test_scan_skips_subdirectories() {
    let temp_dir = TempDir::new().unwrap();

    let nested = temp_dir.path().join("Extras");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("Show.S01E99.mkv"), "fake").unwrap();
    fs::write(temp_dir.path().join("Show.S01E01.mkv"), "fake").unwrap();

    let result = scan_directory(temp_dir.path()).unwrap();

    assert_eq!(result.files, vec!["Show.S01E01.mkv"]);
    assert_eq!(result.skipped_dirs, 1);
}

#[test]
fn test_scan_nonexistent_path() {
    let result = scan_directory(Path::new("/nonexistent/path"));
    assert!(matches!(result, Err(Error::PathNotFound(_))));
}

#[test]
fn test_scan_file_path() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("Show.S01E01.mkv");
    fs::write(&file, "fake").unwrap();

    let result = scan_directory(&file);
    assert!(matches!(result, Err(Error::NotADirectory(_))));
}

#[cfg(target_os = "linux")]
#[test]
fn test_scan_counts_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let bad_name = OsStr::from_bytes(b"Show.S01E02\xff.mkv");
    fs::write(temp_dir.path().join(bad_name), "fake").unwrap();
    fs::write(temp_dir.path().join("Show.S01E01.mkv"), "fake").unwrap();

    let result = scan_directory(temp_dir.path()).unwrap();

    assert_eq!(result.files, vec!["Show.S01E01.mkv"]);
    assert_eq!(result.skipped_non_utf8, 1);
}
