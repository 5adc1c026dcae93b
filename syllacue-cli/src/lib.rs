//! Syllacue CLI library
//!
//! This library provides the command-line interface for syllabifying
//! ARPABET transcriptions and building NDL event files.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
