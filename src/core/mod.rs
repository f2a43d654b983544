//! Core business logic modules.

pub mod cleaner;
pub mod factory;
pub mod guesser;
pub mod parser;
pub mod renamer;
pub mod scanner;
