//! Maximal-onset syllabification
//!
//! A single left-to-right pass over the tokens. Consonants (and boundary
//! markers) collect in a pending buffer; each vowel closes the buffer by
//! splitting it into the coda of the previous syllable and the onset of
//! the new one. The split point is the largest onset the profile lists as
//! legal, unless an explicit marker in the buffer dictates it.

use crate::error::{CoreError, Result};
use crate::language::{LanguageProfile, BOUNDARY_MARKER};
use crate::phoneme::{Phoneme, PhonemeInput};
use crate::syllable::{Cluster, Syllable};

/// Syllabification engine bound to one language profile
#[derive(Debug, Clone, Copy)]
pub struct Syllabifier<'p> {
    profile: &'p LanguageProfile,
}

impl<'p> Syllabifier<'p> {
    pub fn new(profile: &'p LanguageProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &'p LanguageProfile {
        self.profile
    }

    /// Syllabify a canonical token list.
    ///
    /// Fails on the first token that is neither a declared consonant, a
    /// declared vowel, nor the boundary marker; no partial result is
    /// returned in that case.
    pub fn syllabify<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<Syllable>> {
        let mut syllables: Vec<Syllable> = Vec::new();
        let mut pending: Vec<&str> = Vec::new();

        for (position, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            let Phoneme { symbol, stress } = Phoneme::parse(token);

            if self.profile.is_vowel(symbol) {
                let (coda, onset) = self.split_pending(&pending, syllables.is_empty());

                // Before the first nucleus there is no syllable to take the
                // coda, so consonants ahead of a word-initial marker are dropped.
                if let Some(previous) = syllables.last_mut() {
                    previous.coda.extend(coda);
                }

                syllables.push(Syllable::new(stress, onset, symbol.to_string()));
                pending.clear();
            } else if self.profile.is_consonant(symbol) || symbol == BOUNDARY_MARKER {
                pending.push(symbol);
            } else {
                return Err(CoreError::InvalidPhoneme {
                    symbol: token.to_string(),
                    position,
                });
            }
        }

        let rest = cluster(&pending);
        if !rest.is_empty() {
            match syllables.last_mut() {
                Some(last) => last.coda.extend(rest),
                None => syllables.push(Syllable::degenerate(rest)),
            }
        }

        tracing::trace!(tokens = tokens.len(), syllables = syllables.len(), "syllabified");
        Ok(syllables)
    }

    /// Split the consonants seen since the last nucleus into
    /// `(coda of previous syllable, onset of next syllable)`.
    fn split_pending(&self, pending: &[&str], word_initial: bool) -> (Cluster, Cluster) {
        if let Some(marker) = pending.iter().position(|s| *s == BOUNDARY_MARKER) {
            return (cluster(&pending[..marker]), cluster(&pending[marker + 1..]));
        }

        // k = 0 tries the whole buffer as onset. A word-initial onset is
        // accepted even when illegal: there is no syllable to take a coda.
        let split = (0..=pending.len())
            .find(|&k| {
                let onset = &pending[k..];
                onset.is_empty() || word_initial || self.profile.is_legal_onset(onset)
            })
            .unwrap_or(pending.len());

        (cluster(&pending[..split]), cluster(&pending[split..]))
    }
}

fn cluster(symbols: &[&str]) -> Cluster {
    symbols
        .iter()
        .filter(|s| **s != BOUNDARY_MARKER)
        .map(|s| s.to_string())
        .collect()
}

/// Normalize `input` and syllabify it with `profile`
pub fn syllabify(profile: &LanguageProfile, input: impl Into<PhonemeInput>) -> Result<Vec<Syllable>> {
    let tokens = input.into().into_tokens();
    Syllabifier::new(profile).syllabify(&tokens)
}

/// Number of syllables in the syllabification of `input`.
///
/// A vowel-less word counts as one syllable; an empty input as none.
pub fn syllable_count(profile: &LanguageProfile, input: impl Into<PhonemeInput>) -> Result<usize> {
    Ok(syllabify(profile, input)?.len())
}
