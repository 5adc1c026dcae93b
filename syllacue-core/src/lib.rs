//! Maximal-onset syllabification and cue formatting for NDL event files
//!
//! The crate turns an ARPABET transcription into syllables, renders the
//! syllables back into text, and formats the underscore-joined cue strings
//! a naive discriminative learning (NDL) trainer consumes.
//!
//! # Architecture
//!
//! Data flows strictly forward, one word at a time:
//! - **[`language`]**: immutable consonant/vowel inventory and legal onsets
//! - **[`syllabifier`]**: phoneme tokens -> [`Syllable`]s
//! - **[`stringify`]**: syllables -> `"AH0 BAW1T"`
//! - **[`cue`]**: context, syllable and segment cue groups
//!
//! [`CuePipeline`] wires these to a [`Phonemizer`] and a shared
//! [`TranscriptionCache`] to produce training [`Event`]s.
//!
//! # Example
//!
//! ```rust
//! use syllacue_core::{get_profile, stringify, syllabify};
//!
//! let english = get_profile("en").unwrap();
//! let syllables = syllabify(&english, "EH1 K S T R AH0").unwrap();
//!
//! assert_eq!(syllables.len(), 2);
//! assert_eq!(stringify(&syllables), "EH1K STRAH0");
//! ```

pub mod cache;
pub mod cue;
pub mod error;
pub mod language;
pub mod phoneme;
pub mod phonemizer;
pub mod pipeline;
pub mod stringify;
pub mod syllabifier;
pub mod syllable;

pub use cache::{CacheStats, TranscriptionCache};
pub use cue::{context_cue, join_cue, segment_cue, syllable_cue, WordCues};
pub use error::{CoreError, Result};
pub use language::{get_profile, list_available_languages, LanguageProfile, BOUNDARY_MARKER};
pub use phoneme::{Phoneme, PhonemeInput};
pub use phonemizer::{normalize_segments, LexiconPhonemizer, Phonemizer};
pub use pipeline::{CuePipeline, Event, EventSet, InvalidWordPolicy, SkippedWord};
pub use stringify::{render_syllable, stringify};
pub use syllabifier::{syllabify, syllable_count, Syllabifier};
pub use syllable::{Cluster, Syllable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_single_word() {
        let english = get_profile("en").unwrap();
        let syllables = syllabify(&english, "B AE1 T").unwrap();
        assert_eq!(stringify(&syllables), "BAE1T");

        let cues = WordCues::build(&english, normalize_segments("B AE1 T")).unwrap();
        assert_eq!(
            cues.cue(&["the", "bat", "flew"], 1).unwrap(),
            "c.the_c.flew_y.bae1t_s.b_s.ae1_s.t"
        );
    }

    #[test]
    fn test_module_exports() {
        let _profile: std::sync::Arc<LanguageProfile> = get_profile("english").unwrap();
        let _cache = TranscriptionCache::new();
        let _policy = InvalidWordPolicy::default();
        assert_eq!(BOUNDARY_MARKER, ".");
    }
}
