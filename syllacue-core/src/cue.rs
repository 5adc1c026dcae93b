//! Cue string formatting
//!
//! A cue string is the feature side of one NDL training event:
//!
//! ```text
//! cue           := context "_" syllable_cues "_" segment_cues
//! context       := "c." word ["_c." word]
//! syllable_cues := "y." unit ("_y." unit)*
//! segment_cues  := "s." symbol ("_s." symbol)*
//! ```
//!
//! Syllable units and segment symbols are lower-cased; context words are
//! emitted as given.

use crate::error::{CoreError, Result};
use crate::language::LanguageProfile;
use crate::stringify::stringify;
use crate::syllabifier::Syllabifier;

pub const CONTEXT_PREFIX: &str = "c.";
pub const SYLLABLE_PREFIX: &str = "y.";
pub const SEGMENT_PREFIX: &str = "s.";

/// Literal left behind by missing context values upstream
const MISSING_MARKER: &str = "NA_";

/// Context cue for the word at `index`.
///
/// Returns `None` for a one-word sequence, which has no neighbours.
pub fn context_cue<S: AsRef<str>>(words: &[S], index: usize) -> Result<Option<String>> {
    let len = words.len();
    if index >= len {
        return Err(CoreError::ContextOutOfRange { index, len });
    }
    if len == 1 {
        return Ok(None);
    }

    let word = |i: usize| words[i].as_ref();
    let cue = if index == 0 {
        format!("{CONTEXT_PREFIX}{}", word(1))
    } else if index == len - 1 {
        format!("{CONTEXT_PREFIX}{}", word(index - 1))
    } else {
        format!(
            "{CONTEXT_PREFIX}{}_{CONTEXT_PREFIX}{}",
            word(index - 1),
            word(index + 1)
        )
    };
    Ok(Some(cue))
}

/// `s.`-prefixed, lower-cased, underscore-joined segments
pub fn segment_cue<S: AsRef<str>>(segments: &[S]) -> String {
    prefixed(segments.iter().map(AsRef::as_ref), SEGMENT_PREFIX)
}

/// `y.`-prefixed, lower-cased, underscore-joined units of a stringified
/// syllabification
pub fn syllable_cue(syllabification: &str) -> String {
    prefixed(syllabification.split_whitespace(), SYLLABLE_PREFIX)
}

fn prefixed<'a>(units: impl Iterator<Item = &'a str>, prefix: &str) -> String {
    units
        .map(|unit| format!("{prefix}{}", unit.to_lowercase()))
        .collect::<Vec<_>>()
        .join("_")
}

/// Assemble the final cue and remove every `NA_` literal.
///
/// Empty groups are skipped so the result never holds `__`.
pub fn join_cue(context: Option<&str>, syllable_cue: &str, segment_cue: &str) -> String {
    let cue = [context.unwrap_or(""), syllable_cue, segment_cue]
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    strip_missing(cue)
}

/// Remove `NA_` literals from a cue string.
///
/// The whole `NA_` token goes, underscore included, so `c.NA_c.runs`
/// becomes `c.c.runs`. Older event files removed only `NA` and kept the
/// underscore (`c._c.runs`); cues built here differ from those byte for
/// byte.
pub fn strip_missing(cue: String) -> String {
    if cue.contains(MISSING_MARKER) {
        cue.replace(MISSING_MARKER, "")
    } else {
        cue
    }
}

/// Per-word cue fragments, independent of the word's position.
///
/// These are what the memoization cache stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCues {
    /// Raw segments as produced by the phonemizer (upper-case ARPABET)
    pub segments: Vec<String>,
    /// Stringified syllabification (`"AH0 BAW1T"`)
    pub syllabification: String,
    pub syllable_count: usize,
    pub segment_cue: String,
    pub syllable_cue: String,
}

impl WordCues {
    /// Syllabify `segments` with `profile` and derive both cue fragments
    pub fn build(profile: &LanguageProfile, segments: Vec<String>) -> Result<Self> {
        let syllables = Syllabifier::new(profile).syllabify(&segments)?;
        let syllabification = stringify(&syllables);

        Ok(Self {
            segment_cue: segment_cue(&segments),
            syllable_cue: syllable_cue(&syllabification),
            syllable_count: syllables.len(),
            syllabification,
            segments,
        })
    }

    /// Full cue for this word at `index` of `words`
    pub fn cue<S: AsRef<str>>(&self, words: &[S], index: usize) -> Result<String> {
        let context = context_cue(words, index)?;
        Ok(join_cue(
            context.as_deref(),
            &self.syllable_cue,
            &self.segment_cue,
        ))
    }
}
