//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use syllacue_core::Syllable;

pub mod events;
pub mod json;
pub mod text;

pub use events::{event_file_path, write_event_file, TsvEventWriter};
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One syllabified transcription as reported by the `syllabify` command
#[derive(Debug, Clone, Serialize)]
pub struct SyllabificationRecord {
    /// Label given in the input (usually the orthographic word)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Transcription as given
    pub transcription: String,
    /// Space-joined syllables with stress digits (`"AH0 BAW1T"`)
    pub syllabification: String,
    pub syllable_cue: String,
    pub segment_cue: String,
    pub syllables: Vec<Syllable>,
}

/// Trait for syllabification output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single record
    fn format_record(&mut self, record: &SyllabificationRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}
