//! Data models.

pub mod episode;
