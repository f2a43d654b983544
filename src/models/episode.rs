//! Episode record model.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// One file of the batch and the name it should get.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeRecord {
    /// Original filename, without directory.
    pub source: String,
    /// Show name, shared by the whole batch.
    pub show_name: String,
    /// Season number, shared by the whole batch.
    pub season: u32,
    /// Episode number.
    pub episode: u32,
    /// Episode title (may be empty).
    pub title: String,
    /// File extension without the dot.
    pub extension: String,
}

impl EpisodeRecord {
    /// Season and episode tag, e.g. `S03E05`.
    pub fn identifier(&self) -> String {
        format!("S{:02}E{:02}", self.season, self.episode)
    }

    /// The new filename.
    ///
    /// `Show S01E02 - Title.ext`, or `Show S01E02.ext` when the title is empty.
    pub fn file_name(&self) -> String {
        if self.title.is_empty() {
            format!("{} {}.{}", self.show_name, self.identifier(), self.extension)
        } else {
            format!(
                "{} {} - {}.{}",
                self.show_name,
                self.identifier(),
                self.title,
                self.extension
            )
        }
    }

    /// Whether renaming would leave the file where it is.
    pub fn is_unchanged(&self) -> bool {
        self.source == self.file_name()
    }
}

impl fmt::Display for EpisodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.source, self.file_name())
    }
}

// Records are identified by their place in the season.
impl PartialEq for EpisodeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.season == other.season && self.episode == other.episode
    }
}

impl Eq for EpisodeRecord {}

impl PartialOrd for EpisodeRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EpisodeRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.season, self.episode).cmp(&(other.season, other.episode))
    }
}
