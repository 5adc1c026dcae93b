//! Syllable structure

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Consonant run of an onset or coda. English clusters rarely exceed
/// three symbols, so these stay inline.
pub type Cluster = SmallVec<[String; 4]>;

/// One syllable: optional stress, onset, nucleus, coda.
///
/// `nucleus` is `None` only for the degenerate container produced when a
/// word has no vowel at all; in that case every consonant sits in `coda`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub stress: Option<u8>,
    pub onset: Cluster,
    pub nucleus: Option<String>,
    pub coda: Cluster,
}

impl Syllable {
    pub(crate) fn new(stress: Option<u8>, onset: Cluster, nucleus: String) -> Self {
        Self {
            stress,
            onset,
            nucleus: Some(nucleus),
            coda: Cluster::new(),
        }
    }

    pub(crate) fn degenerate(coda: Cluster) -> Self {
        Self {
            stress: None,
            onset: Cluster::new(),
            nucleus: None,
            coda,
        }
    }

    /// True for the vowel-less container
    pub fn is_degenerate(&self) -> bool {
        self.nucleus.is_none()
    }

    /// Nucleus with its stress digit reattached (`AE1`)
    pub fn stressed_nucleus(&self) -> Option<String> {
        self.nucleus.as_ref().map(|n| match self.stress {
            Some(stress) => format!("{n}{stress}"),
            None => n.clone(),
        })
    }

    /// Number of phoneme symbols in the syllable
    pub fn len(&self) -> usize {
        self.onset.len() + usize::from(self.nucleus.is_some()) + self.coda.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
