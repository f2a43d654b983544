//! Filename parser module.
//!
//! Extracts episode information from release-style filenames:
//! - Extension (`.mkv`)
//! - Episode number (`3of10`, `S01E05`, `1x05`, `Episode 5`)
//! - Season number (`Season 2`, `S02E05`, `2x05`)
//! - Show name (everything before the first episode marker)
//! - Episode title (everything between the episode marker and the extension)
//!
//! Each pattern family is tried in a fixed order and the first match wins.

use crate::core::cleaner::clean_text;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.([a-z0-9]+)$").unwrap());

// Everything before the first season/episode marker. Digits are ASCII only in
// every pattern, since captures go through `str::parse`.
static SHOW_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)(?:collection|series|episode|ep|s[0-9]+e[0-9]+|[0-9]+of[0-9]+|[0-9]+x[0-9]+)").unwrap()
});

// Everything between the episode marker and the extension. The marker keeps
// all of its digits, so the title never starts with one of them.
static EPISODE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:s[0-9]+e[0-9]+|[0-9]+of[0-9]+|[0-9]+x[0-9]+)([^0-9].*)\.[a-z0-9]+$").unwrap()
});

/// Episode number patterns, highest priority first.
static EPISODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // 3of10
        Regex::new(r"(?i)([0-9]+)of[0-9]+").unwrap(),
        // S01E05
        Regex::new(r"(?i)s[0-9]{2,}e([0-9]{2,})").unwrap(),
        // 1x05
        Regex::new(r"(?i)[0-9]+x([0-9]+)").unwrap(),
        // Episode 5, Ep.5, Part 5
        Regex::new(r"(?i)(?:episode|ep|part)\W+([0-9]+)").unwrap(),
    ]
});

/// Season number patterns, highest priority first.
static SEASON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Season 2, Series 2, Collection 2
        Regex::new(r"(?i)(?:season|series|collection)\W*([0-9]+)").unwrap(),
        // S02E05
        Regex::new(r"(?i)s([0-9]{2,})e[0-9]{2,}").unwrap(),
        // 2x05
        Regex::new(r"(?i)([0-9]+)x[0-9]+").unwrap(),
    ]
});

/// Everything a single filename says about its episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    /// Episode number, always positive.
    pub episode: u32,
    /// Cleaned episode title, possibly empty.
    pub title: String,
    /// Extension without the dot, original case.
    pub extension: String,
}

/// Return the first capture group of the first pattern that matches.
fn first_capture<'a>(patterns: &[Regex], filename: &'a str) -> Option<&'a str> {
    patterns
        .iter()
        .find_map(|re| re.captures(filename))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse the file extension.
pub fn parse_extension(filename: &str) -> Result<String> {
    EXTENSION
        .captures(filename)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| Error::ExtensionParse(filename.to_string()))
}

/// Parse the episode number.
///
/// A match that is zero or does not fit a `u32` is treated like no match.
pub fn parse_episode_number(filename: &str) -> Result<u32> {
    first_capture(&EPISODE_PATTERNS, filename)
        .and_then(|digits| digits.parse::<u32>().ok())
        .filter(|&episode| episode > 0)
        .ok_or_else(|| Error::EpisodeParse(filename.to_string()))
}

/// Parse the season number, if the filename mentions one.
pub fn parse_season_number(filename: &str) -> Option<u32> {
    first_capture(&SEASON_PATTERNS, filename).and_then(|digits| digits.parse().ok())
}

/// Parse the show name from the text before the first episode marker.
pub fn parse_show_name(filename: &str) -> Result<String> {
    SHOW_NAME
        .captures(filename)
        .map(|caps| clean_text(&caps[1]))
        .ok_or_else(|| Error::ShowNameParse(filename.to_string()))
}

/// Parse the episode title. Returns an empty string when there is none.
pub fn parse_episode_title(filename: &str) -> String {
    EPISODE_TITLE
        .captures(filename)
        .map(|caps| clean_text(&caps[1]))
        .unwrap_or_default()
}

/// Parse all per-file episode information.
pub fn parse_filename(filename: &str) -> Result<ParsedFilename> {
    let episode = parse_episode_number(filename)?;
    let extension = parse_extension(filename)?;
    let title = parse_episode_title(filename);

    tracing::debug!(
        "Parsed {}: episode={} title={:?} extension={}",
        filename,
        episode,
        title,
        extension
    );

    Ok(ParsedFilename {
        episode,
        title,
        extension,
    })
}
