//! Word list and transcription file reading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reader for line-oriented input files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read a speaker word list: one orthographic word per line, blank
    /// lines ignored.
    pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
        let words: Vec<String> = Self::read_text(path)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        log::debug!("Read {} words from {}", words.len(), path.display());
        Ok(words)
    }

    /// Read transcriptions, one per line. A line may carry a label before a
    /// tab (`word<TAB>W ER1 D`).
    pub fn read_transcriptions(path: &Path) -> Result<Vec<(Option<String>, String)>> {
        Ok(Self::read_text(path)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(parse_transcription_line)
            .collect())
    }
}

/// Split an optional `label<TAB>` prefix off a transcription line
pub fn parse_transcription_line(line: &str) -> (Option<String>, String) {
    match line.split_once('\t') {
        Some((label, transcription)) => (
            Some(label.trim().to_string()),
            transcription.trim().to_string(),
        ),
        None => (None, line.trim().to_string()),
    }
}
