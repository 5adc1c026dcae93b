//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use syllacue_core::{get_profile, list_available_languages, InvalidWordPolicy};

pub mod events;
pub mod generate_config;
pub mod syllabify;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Syllabify ARPABET transcriptions
    Syllabify(syllabify::SyllabifyArgs),

    /// Build NDL event files from speaker word lists
    Events(events::EventsArgs),

    /// Validate a language profile
    Validate(validate::ValidateArgs),

    /// Generate a language profile template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded language profiles
    Languages,

    /// List output formats of the syllabify command
    Formats,
}

/// Command-line spelling of [`InvalidWordPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnInvalid {
    /// Stop at the first word that cannot be syllabified
    Abort,
    /// Leave the word out and keep going
    Skip,
}

impl From<OnInvalid> for InvalidWordPolicy {
    fn from(value: OnInvalid) -> Self {
        match value {
            OnInvalid::Abort => InvalidWordPolicy::Abort,
            OnInvalid::Skip => InvalidWordPolicy::Skip,
        }
    }
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Syllabify(args) => args.execute(),
            Commands::Events(args) => args.execute(quiet),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for code in list_available_languages() {
                    let profile = get_profile(code)?;
                    println!("  {:<8} {}", code, profile.name());
                }
            }
            ListCommands::Formats => {
                println!("Available formats:");
                println!("  text     One syllabification per line");
                println!("  json     JSON array with syllable structure and cues");
            }
        }
        Ok(())
    }
}
