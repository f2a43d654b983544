//! tvrename library
//!
//! Guesses the show name, season and episode of every file in a season
//! directory and renames them to `Show Name S01E02 - Episode Title.ext`.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
