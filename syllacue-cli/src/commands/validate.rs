//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use syllacue_core::LanguageProfile;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language profile to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language profile: {}",
            self.language_config.display()
        );

        match LanguageProfile::from_file(&self.language_config) {
            Ok(profile) => {
                println!("✓ Profile is valid!");
                println!("  Language code: {}", profile.code());
                println!("  Language name: {}", profile.name());
                println!("  Consonants:    {}", profile.consonant_count());
                println!("  Vowels:        {}", profile.vowel_count());
                println!("  Legal onsets:  {}", profile.onset_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
