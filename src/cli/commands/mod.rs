//! CLI command implementations.

pub mod guess;
pub mod rename;
