//! Input handling: speaker word lists and transcription files

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{parse_transcription_line, FileReader};
pub use glob_resolver::{resolve_patterns, speaker_name};
