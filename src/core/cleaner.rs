//! Text normalizer.
//!
//! Turns a raw slice of a filename (everything before or after the episode
//! marker) into a presentable title:
//! - bracketed tags like `[1080p]` or `[EZTV]` are removed
//! - release noise (codecs, resolutions, group names) is dropped
//! - every remaining word is capitalized

use regex::Regex;
use std::sync::LazyLock;

/// Tokens that never belong in a title.
pub const EXCLUDE_RULES: &[&str] = &[
    "aac", "ac3", "hdtv", "org", "net", "com", "webrip", // sources and domains
    "480p", "576p", "720p", "1080p", // resolutions
    "x264", "x265", "h264", "h265", "xvid", // codecs
    "mvgroup", "yify", "yts", "eztv", // release groups
    "mp4", "mp3", "mkv", "dvdrip", "bdrip", "hd",
];

/// Characters trimmed from both ends before splitting.
const TRIM_CHARS: &[char] = &['.', ',', '-', '_', ' '];

/// Word separators.
const SEPARATORS: &[char] = &[' ', '.', '_'];

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]+\]").unwrap());

/// Check if a lowercased token is release noise.
pub fn is_excluded(token: &str) -> bool {
    EXCLUDE_RULES.contains(&token)
}

/// Normalize a raw filename fragment into a display title.
///
/// Separators are consumed one at a time, so `"a..b"` keeps an empty word
/// between `a` and `b`. The result may be empty when every word is noise.
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = BRACKETED.replace_all(&lowered, "");
    let mut working = stripped.trim_matches(TRIM_CHARS).to_string();

    // Sentinel so the last word is terminated like the others.
    working.push('.');

    let mut parts = Vec::new();
    let mut start = 0;

    for (pos, c) in working.char_indices() {
        if !SEPARATORS.contains(&c) {
            continue;
        }

        let part = &working[start..pos];
        start = pos + c.len_utf8();

        if !is_excluded(part) {
            parts.push(capitalize(part));
        }
    }

    parts.join(" ")
}

/// Uppercase the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_dotted_name() {
        assert_eq!(clean_text("the.big.bang.theory."), "The Big Bang Theory");
        assert_eq!(clean_text("Game_of_Thrones"), "Game Of Thrones");
    }

    #[test]
    fn test_clean_text_removes_noise() {
        assert_eq!(clean_text(".The.Pilot.720p.HDTV.x264"), "The Pilot");
        assert_eq!(clean_text(" - The One Where.mkv"), "The One Where");
    }

    #[test]
    fn test_clean_text_removes_brackets() {
        let cleaned = clean_text("Show [1080p] Name");
        assert!(!cleaned.contains("1080"));
        assert!(!cleaned.contains('['));
        assert!(cleaned.starts_with("Show"));
        assert!(cleaned.ends_with("Name"));

        assert_eq!(clean_text("[HorribleSubs] Naruto "), "Naruto");
        assert_eq!(clean_text("Naruto [Group] [720p]"), "Naruto");
    }

    #[test]
    fn test_clean_text_keeps_empty_words() {
        // Consecutive separators leave an empty word behind.
        assert_eq!(clean_text("a..b"), "A  B");
        assert_eq!(clean_text("Show [1080p] Name"), "Show  Name");
    }

    #[test]
    fn test_clean_text_all_noise() {
        assert_eq!(clean_text("HDTV.x264"), "");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" .-_ "), "");
    }

    #[test]
    fn test_clean_text_idempotent() {
        let inputs = [
            "the.office.us.",
            "Show [1080p] Name",
            "_doctor__who_",
            "Marvel's Agents of S.H.I.E.L.D",
            "a..b",
        ];

        for input in inputs {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("friends"), "Friends");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_is_excluded() {
        assert!(is_excluded("x264"));
        assert!(is_excluded("hd"));
        assert!(!is_excluded("HD"));
        assert!(!is_excluded("hdr"));
    }
}
