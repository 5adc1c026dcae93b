//! Language profile source for CLI commands

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use syllacue_core::{get_profile, LanguageProfile};

/// Language selection flags shared by commands
#[derive(Debug, Clone, Default, Args)]
pub struct LanguageArgs {
    /// Embedded language profile (code or name, e.g. `en`)
    #[arg(short, long, value_name = "CODE", conflicts_with = "language_config")]
    pub language: Option<String>,

    /// Path to an external language profile (TOML)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,
}

impl LanguageArgs {
    /// Source selected by the flags, falling back to `default_code`
    pub fn source(&self, default_code: &str) -> LanguageSource {
        match (&self.language_config, &self.language) {
            (Some(path), _) => LanguageSource::External { path: path.clone() },
            (None, Some(code)) => LanguageSource::BuiltIn(code.clone()),
            (None, None) => LanguageSource::BuiltIn(default_code.to_string()),
        }
    }
}

/// Source of a language profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Embedded profile, by code or name
    BuiltIn(String),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {code}"),
            LanguageSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Load the profile
    pub fn load(&self) -> Result<Arc<LanguageProfile>> {
        let profile = match self {
            LanguageSource::BuiltIn(code) => get_profile(code)?,
            LanguageSource::External { path } => Arc::new(
                LanguageProfile::from_file(path)
                    .with_context(|| format!("Failed to load language profile: {}", path.display()))?,
            ),
        };
        log::info!(
            "Using language profile '{}' ({})",
            profile.code(),
            self.display_name()
        );
        Ok(profile)
    }
}
