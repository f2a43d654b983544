//! Show/season guesser.
//!
//! Runs a parser over every filename of a batch and keeps the answer most
//! files agree on. The vote is order sensitive: among tied answers, the one
//! seen first wins.

use crate::core::parser::{parse_season_number, parse_show_name};
use crate::{Error, Result};

/// Season used when no file mentions one.
pub const DEFAULT_SEASON: u32 = 1;

/// Occurrence counts per answer, in first-seen order.
#[derive(Debug, Clone)]
pub struct GuessTally<T> {
    entries: Vec<(T, usize)>,
}

impl<T: PartialEq> GuessTally<T> {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Count one more occurrence of `value`.
    pub fn add(&mut self, value: T) {
        match self.entries.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((value, 1)),
        }
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[(T, usize)] {
        &self.entries
    }

    /// The answer with the highest count.
    ///
    /// A later entry only takes over with a strictly greater count, so ties
    /// go to the answer seen first.
    pub fn winner(self) -> Option<T> {
        let mut largest = 0;
        let mut found = None;

        for (value, count) in self.entries {
            if count > largest {
                largest = count;
                found = Some(value);
            }
        }

        found
    }
}

impl<T: PartialEq> Default for GuessTally<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tally what `parser` says about each filename, in the given order.
///
/// `None` answers are not counted.
pub fn tally<T, F>(files: &[String], parser: F) -> GuessTally<T>
where
    T: PartialEq,
    F: Fn(&str) -> Option<T>,
{
    let mut guesses = GuessTally::new();

    for file in files {
        if let Some(value) = parser(file) {
            guesses.add(value);
        }
    }

    guesses
}

/// Pick the most frequent answer across the batch.
pub fn guess<T, F>(files: &[String], parser: F) -> Option<T>
where
    T: PartialEq,
    F: Fn(&str) -> Option<T>,
{
    tally(files, parser).winner()
}

/// What a single file votes for as show name.
///
/// Files without a recognizable marker, or whose name cleans down to
/// nothing, do not vote.
pub fn show_name_vote(file: &str) -> Option<String> {
    match parse_show_name(file) {
        Ok(name) if !name.is_empty() => Some(name),
        Ok(_) => {
            tracing::debug!("Show name of {} is empty after cleaning", file);
            None
        }
        Err(e) => {
            tracing::debug!("{}", e);
            None
        }
    }
}

/// What a single file votes for as season.
///
/// Season `0` does not vote, so a batch of specials falls back to the
/// default like a batch without season markers.
pub fn season_vote(file: &str) -> Option<u32> {
    parse_season_number(file).filter(|&season| season > 0)
}

/// Guess the show name shared by the batch. Fails when no file votes.
pub fn guess_show_name(files: &[String]) -> Result<String> {
    guess(files, show_name_vote).ok_or(Error::NoConsensus("show name"))
}

/// Guess the season shared by the batch. Fails when no file votes.
pub fn guess_season(files: &[String]) -> Result<u32> {
    guess(files, season_vote).ok_or(Error::NoConsensus("season"))
}

/// A season guess for the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonGuess {
    pub season: u32,
    /// No file voted, `season` is [`DEFAULT_SEASON`].
    pub assumed: bool,
}

/// Guess the season, falling back to [`DEFAULT_SEASON`] with a warning.
pub fn guess_season_or_default(files: &[String]) -> SeasonGuess {
    match guess_season(files) {
        Ok(season) => SeasonGuess {
            season,
            assumed: false,
        },
        Err(e) => {
            tracing::warn!("{}, assuming season {}", e, DEFAULT_SEASON);
            SeasonGuess {
                season: DEFAULT_SEASON,
                assumed: true,
            }
        }
    }
}
