//! Word sequence -> NDL training events

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cache::TranscriptionCache;
use crate::cue::WordCues;
use crate::error::{CoreError, Result};
use crate::language::LanguageProfile;
use crate::phonemizer::{normalize_segments, Phonemizer};

/// One row of an event file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub cues: String,
    pub outcomes: String,
}

/// What to do with a word whose transcription cannot be syllabified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidWordPolicy {
    /// Fail the whole sequence
    #[default]
    Abort,
    /// Emit no event for the word; it still serves as context
    Skip,
}

/// A word left out under [`InvalidWordPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedWord {
    pub index: usize,
    pub word: String,
    pub reason: String,
}

/// Events of one word sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSet {
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedWord>,
}

/// Phonemizer, language profile and memoization cache wired together
#[derive(Clone)]
pub struct CuePipeline {
    profile: Arc<LanguageProfile>,
    phonemizer: Arc<dyn Phonemizer>,
    cache: Arc<TranscriptionCache>,
    policy: InvalidWordPolicy,
}

impl std::fmt::Debug for CuePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CuePipeline")
            .field("language", &self.profile.code())
            .field("phonemizer", &"<dyn Phonemizer>")
            .field("cached_words", &self.cache.len())
            .field("policy", &self.policy)
            .finish()
    }
}

impl CuePipeline {
    /// Pipeline with a fresh cache and the `Abort` policy
    pub fn new(profile: Arc<LanguageProfile>, phonemizer: Arc<dyn Phonemizer>) -> Self {
        Self {
            profile,
            phonemizer,
            cache: Arc::new(TranscriptionCache::new()),
            policy: InvalidWordPolicy::default(),
        }
    }

    /// Share an existing cache, e.g. across several pipelines
    pub fn with_cache(mut self, cache: Arc<TranscriptionCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_policy(mut self, policy: InvalidWordPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub fn cache(&self) -> &Arc<TranscriptionCache> {
        &self.cache
    }

    pub fn policy(&self) -> InvalidWordPolicy {
        self.policy
    }

    /// Phonemize and syllabify `word` at most once per cache
    pub fn word_cues(&self, word: &str) -> Result<Arc<WordCues>> {
        self.cache.get_or_try_insert_with(word, || {
            let raw = self.phonemizer.phonemize(word)?;
            WordCues::build(&self.profile, normalize_segments(&raw))
        })
    }

    /// Full cue string for `words[index]`
    pub fn cue_for<S: AsRef<str>>(&self, words: &[S], index: usize) -> Result<String> {
        let word = words
            .get(index)
            .map(AsRef::as_ref)
            .ok_or(CoreError::ContextOutOfRange {
                index,
                len: words.len(),
            })?;
        self.word_cues(word)?.cue(words, index)
    }

    /// One event per word of `words`, outcome = the word itself
    pub fn events<S: AsRef<str>>(&self, words: &[S]) -> Result<EventSet> {
        let mut set = EventSet {
            events: Vec::with_capacity(words.len()),
            skipped: Vec::new(),
        };

        for (index, word) in words.iter().enumerate() {
            let word = word.as_ref();
            match self.cue_for(words, index) {
                Ok(cues) => set.events.push(Event {
                    cues,
                    outcomes: word.to_string(),
                }),
                Err(e) if self.policy == InvalidWordPolicy::Skip && e.is_word_level() => {
                    tracing::warn!(word, index, error = %e, "skipping word");
                    set.skipped.push(SkippedWord {
                        index,
                        word: word.to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::error!(word, index, error = %e, "cannot build cue");
                    return Err(e);
                }
            }
        }

        tracing::debug!(
            words = words.len(),
            events = set.events.len(),
            skipped = set.skipped.len(),
            "built events"
        );
        Ok(set)
    }

    /// Events for several independent sequences (one per speaker), in
    /// input order. Sequences run in parallel with the `parallel` feature;
    /// all of them share this pipeline's cache.
    pub fn events_batch<S>(&self, sequences: &[Vec<S>]) -> Result<Vec<EventSet>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            sequences.par_iter().map(|words| self.events(words)).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            sequences.iter().map(|words| self.events(words)).collect()
        }
    }
}
