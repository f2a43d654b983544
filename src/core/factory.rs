//! Episode record assembly.
//!
//! Builds one [`EpisodeRecord`] per filename once the show name and season
//! are settled. A file that cannot be parsed is set aside with its reason;
//! the rest of the batch is still assembled.

use crate::core::parser::parse_filename;
use crate::models::episode::EpisodeRecord;
use crate::{Error, Result};

/// A file that did not make it into the batch.
#[derive(Debug)]
pub struct SkippedFile {
    /// Original filename.
    pub source: String,
    /// Why it was skipped.
    pub error: Error,
}

/// Result of assembling a batch.
#[derive(Debug, Default)]
pub struct Assembly {
    /// Records, sorted by season and episode.
    pub records: Vec<EpisodeRecord>,
    /// Files that could not be turned into a record, in input order.
    pub skipped: Vec<SkippedFile>,
}

/// Creates episode records for one show and season.
pub struct EpisodeFactory {
    show_name: String,
    season: u32,
}

impl EpisodeFactory {
    /// Create a factory for the given show and season.
    pub fn new<S: Into<String>>(show_name: S, season: u32) -> Self {
        Self {
            show_name: show_name.into(),
            season,
        }
    }

    /// Create the record for a single file.
    pub fn create(&self, filename: &str) -> Result<EpisodeRecord> {
        let parsed = parse_filename(filename)?;

        Ok(EpisodeRecord {
            source: filename.to_string(),
            show_name: self.show_name.clone(),
            season: self.season,
            episode: parsed.episode,
            title: parsed.title,
            extension: parsed.extension,
        })
    }

    /// Create records for a batch of files.
    ///
    /// A file whose episode was already claimed by an earlier file is
    /// skipped as a duplicate.
    pub fn assemble(&self, files: &[String]) -> Assembly {
        let mut assembly = Assembly::default();

        for file in files {
            let created = self.create(file).and_then(|record| {
                if assembly.records.contains(&record) {
                    Err(Error::DuplicateEpisode(record.identifier()))
                } else {
                    Ok(record)
                }
            });

            match created {
                Ok(record) => assembly.records.push(record),
                Err(error) => {
                    tracing::warn!("Skipping {}: {}", file, error);
                    assembly.skipped.push(SkippedFile {
                        source: file.clone(),
                        error,
                    });
                }
            }
        }

        assembly.records.sort();

        tracing::info!(
            "Assembled {} episodes, skipped {} files",
            assembly.records.len(),
            assembly.skipped.len()
        );

        assembly
    }
}
