//! Immutable phoneme inventory and onset legality table

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::config::{Inventory, LanguageConfig, Metadata, Onsets};
use crate::error::{CoreError, Result};

/// Token that forces a syllable break between two nuclei
pub const BOUNDARY_MARKER: &str = ".";

/// Consonants, vowels and legal onset clusters of one language.
///
/// Onset clusters are stored space-joined (`"S T R"`); the empty string
/// is a member when an onset-less syllable is legal.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    code: String,
    name: String,
    consonants: HashSet<String>,
    vowels: HashSet<String>,
    onsets: HashSet<String>,
}

impl LanguageProfile {
    /// Build a profile from raw symbol lists, validating it.
    pub fn new<C, V, O>(code: &str, name: &str, consonants: C, vowels: V, onsets: O) -> Result<Self>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        let config = LanguageConfig {
            metadata: Metadata {
                code: code.to_string(),
                name: name.to_string(),
            },
            inventory: Inventory {
                consonants: consonants.into_iter().map(Into::into).collect(),
                vowels: vowels.into_iter().map(Into::into).collect(),
            },
            onsets: Onsets {
                clusters: onsets.into_iter().map(Into::into).collect(),
            },
        };
        Self::from_config(&config)
    }

    /// Build a profile from a parsed configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate().map_err(CoreError::Configuration)?;

        // Normalize inner whitespace so "S  T" and "S T" name the same cluster
        let onsets = config
            .onsets
            .clusters
            .iter()
            .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            consonants: config.inventory.consonants.iter().cloned().collect(),
            vowels: config.inventory.vowels.iter().cloned().collect(),
            onsets,
        })
    }

    /// Parse and validate a TOML profile
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(toml_str)
            .map_err(|e| CoreError::Configuration(format!("Failed to parse profile: {e}")))?;
        Self::from_config(&config)
    }

    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let profile = Self::from_toml_str(&content).map_err(|e| match e {
            CoreError::Configuration(msg) => {
                CoreError::Configuration(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        tracing::debug!(
            code = %profile.code,
            path = %path.display(),
            "loaded language profile from file"
        );
        Ok(profile)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_consonant(&self, symbol: &str) -> bool {
        self.consonants.contains(symbol)
    }

    pub fn is_vowel(&self, symbol: &str) -> bool {
        self.vowels.contains(symbol)
    }

    /// Whether `onset`, joined with single spaces, is a listed cluster
    pub fn is_legal_onset<S: AsRef<str>>(&self, onset: &[S]) -> bool {
        let joined = onset.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
        self.onsets.contains(&joined)
    }

    pub fn consonant_count(&self) -> usize {
        self.consonants.len()
    }

    pub fn vowel_count(&self) -> usize {
        self.vowels.len()
    }

    pub fn onset_count(&self) -> usize {
        self.onsets.len()
    }
}
