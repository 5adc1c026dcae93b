//! Configuration structures and validation
//!
//! This module defines the TOML schema for language profiles.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::profile::BOUNDARY_MARKER;

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub inventory: Inventory,
    pub onsets: Onsets,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Phoneme inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub consonants: Vec<String>,
    pub vowels: Vec<String>,
}

/// Legal onset clusters, each a space-joined run of consonant symbols
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Onsets {
    #[serde(default)]
    pub clusters: Vec<String>,
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if self.inventory.vowels.is_empty() {
            return Err("No vowels defined".to_string());
        }

        for symbol in self
            .inventory
            .consonants
            .iter()
            .chain(self.inventory.vowels.iter())
        {
            check_symbol(symbol)?;
        }

        let consonants: HashSet<&str> =
            self.inventory.consonants.iter().map(String::as_str).collect();

        if let Some(shared) = self
            .inventory
            .vowels
            .iter()
            .find(|v| consonants.contains(v.as_str()))
        {
            return Err(format!(
                "Symbol '{shared}' is declared both as consonant and vowel"
            ));
        }

        for cluster in &self.onsets.clusters {
            if let Some(unknown) = cluster
                .split_whitespace()
                .find(|c| !consonants.contains(c))
            {
                return Err(format!(
                    "Onset cluster '{cluster}' contains undeclared consonant '{unknown}'"
                ));
            }
        }

        Ok(())
    }
}

fn check_symbol(symbol: &str) -> Result<(), String> {
    if symbol.is_empty() {
        return Err("Empty phoneme symbol in inventory".to_string());
    }
    if symbol == BOUNDARY_MARKER {
        return Err(format!(
            "Boundary marker '{BOUNDARY_MARKER}' cannot be declared as a phoneme"
        ));
    }
    if symbol.chars().any(char::is_whitespace) {
        return Err(format!("Phoneme symbol '{symbol}' contains whitespace"));
    }
    if symbol.ends_with(|c: char| c.is_ascii_digit()) {
        return Err(format!(
            "Phoneme symbol '{symbol}' ends with a digit, which is read as stress"
        ));
    }
    Ok(())
}
