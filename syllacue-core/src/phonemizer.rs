//! Grapheme-to-phoneme seam
//!
//! The pipeline only needs "orthographic word in, ARPABET string out".
//! [`LexiconPhonemizer`] answers from a pronunciation dictionary; a neural
//! model can be plugged in by implementing [`Phonemizer`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CoreError, Result};

/// Produces a raw phoneme transcription for an orthographic word
pub trait Phonemizer: Send + Sync {
    /// Raw transcription; may use `[`, `]` or `-` as separators
    fn phonemize(&self, word: &str) -> Result<String>;
}

/// Dictionary-backed phonemizer.
///
/// Accepts CMUdict lines (`WORD  W ER1 D`, `;;;` comments, alternate
/// pronunciations marked `WORD(2)`) and tab-separated lines
/// (`word<TAB>W ER1 D`). The first pronunciation of a word wins; lookups
/// are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct LexiconPhonemizer {
    entries: HashMap<String, String>,
}

impl LexiconPhonemizer {
    /// Parse dictionary content
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") || line.starts_with('#') {
                continue;
            }

            let split = line
                .split_once('\t')
                .or_else(|| line.split_once(char::is_whitespace));
            let Some((word, phonemes)) = split else {
                continue;
            };

            let phonemes = phonemes.trim();
            if phonemes.is_empty() {
                continue;
            }

            entries
                .entry(base_form(word.trim()).to_lowercase())
                .or_insert_with(|| phonemes.to_string());
        }

        Self { entries }
    }

    /// Load a dictionary file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let lexicon = Self::parse(&content);
        tracing::info!(
            path = %path.display(),
            entries = lexicon.len(),
            "loaded pronunciation lexicon"
        );
        Ok(lexicon)
    }

    /// Add or replace one entry
    pub fn insert(&mut self, word: &str, phonemes: &str) {
        self.entries
            .insert(word.to_lowercase(), phonemes.trim().to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip a CMUdict variant suffix: `READ(2)` -> `READ`
fn base_form(word: &str) -> &str {
    match word.strip_suffix(')').and_then(|w| w.rfind('(').map(|i| (w, i))) {
        Some((w, i))
            if i > 0
                && !w[i + 1..].is_empty()
                && w[i + 1..].chars().all(|c| c.is_ascii_digit()) =>
        {
            &w[..i]
        }
        _ => word,
    }
}

impl Phonemizer for LexiconPhonemizer {
    fn phonemize(&self, word: &str) -> Result<String> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .ok_or_else(|| CoreError::UnknownWord(word.to_string()))
    }
}

/// Split a raw phonemizer transcription into segments.
///
/// Brackets and hyphens are separators, as are runs of whitespace.
pub fn normalize_segments(raw: &str) -> Vec<String> {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let separators =
        SEPARATORS.get_or_init(|| Regex::new(r"[\[\]-]").expect("separator pattern is valid"));

    separators
        .replace_all(raw, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
