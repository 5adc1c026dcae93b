//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new profile
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language profile template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Profile template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. List the phoneme inventory and legal onsets of your language");
        println!("2. Validate your profile:");
        println!(
            "   syllacue validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for syllabification:");
        println!(
            "   syllacue syllabify --language-config {} \"K A . T A\"",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template profile content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language profile for {code}

[metadata]
code = "{code}"
name = "Custom Language"

# Phoneme symbols as they appear in transcriptions, without stress digits.
# A symbol may not be "." (the syllable boundary marker) and may not end in
# a digit. Consonants and vowels must not overlap.
[inventory]
consonants = ["P", "T", "K", "S", "M", "N", "L", "R"]
vowels = ["A", "E", "I", "O", "U"]

# Legal syllable onsets. Each cluster is a space-separated run of declared
# consonants; "" admits vowel-initial syllables. Consonants that cannot start
# a syllable together are split so the longest legal cluster opens the next
# syllable.
[onsets]
clusters = [
    "",
    "P", "T", "K", "S", "M", "N", "L", "R",
    "P L", "P R", "T R", "K L", "K R",
    "S P", "S T", "S K",
    "S P R", "S T R", "S K R",
]
"#,
            code = self.language_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllacue_core::LanguageProfile;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            language_code: "xx".to_string(),
            output: PathBuf::from("custom.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("custom.toml"));
    }

    #[test]
    fn test_template_is_a_valid_profile() {
        let args = GenerateConfigArgs {
            language_code: "xx".to_string(),
            output: PathBuf::from("xx.toml"),
        };

        let profile = LanguageProfile::from_toml_str(&args.generate_template()).unwrap();
        assert_eq!(profile.code(), "xx");
        assert_eq!(profile.vowel_count(), 5);
        assert!(profile.is_legal_onset(&["S", "T", "R"]));
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("custom.toml");

        let args = GenerateConfigArgs {
            language_code: "xx".to_string(),
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("code = \"xx\""));
    }
}
