//! Syllabify command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use syllacue_core::{
    normalize_segments, segment_cue, stringify, syllable_cue, InvalidWordPolicy, LanguageProfile,
    Syllabifier,
};

use super::OnInvalid;
use crate::config::CliConfig;
use crate::input::{parse_transcription_line, FileReader};
use crate::language_source::LanguageArgs;
use crate::output::{JsonFormatter, OutputFormatter, SyllabificationRecord, TextFormatter};

/// Arguments for the syllabify command
#[derive(Debug, Args)]
pub struct SyllabifyArgs {
    /// Transcriptions to syllabify (e.g. "EH1 K S T R AH0")
    #[arg(value_name = "TRANSCRIPTION")]
    pub transcriptions: Vec<String>,

    /// File with one transcription per line, optionally `label<TAB>` first
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// What to do with transcriptions that cannot be syllabified
    #[arg(long, value_enum)]
    pub on_invalid: Option<OnInvalid>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One syllabification per line
    Text,
    /// JSON array with syllable structure and cue fragments
    Json,
}

impl SyllabifyArgs {
    /// Execute the syllabify command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let policy = self
            .on_invalid
            .map(InvalidWordPolicy::from)
            .unwrap_or(config.processing.on_invalid);

        let lines = self.collect_lines()?;
        if lines.is_empty() {
            bail!("No transcriptions given (pass them as arguments or with --input)");
        }

        let profile = self
            .language
            .source(&config.processing.default_language)
            .load()?;

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(
                std::io::stdout(),
                config.output.pretty_json,
            )),
        };

        let mut skipped = 0usize;
        for (line_no, (label, transcription)) in lines.into_iter().enumerate() {
            match build_record(&profile, label, transcription) {
                Ok(record) => formatter.format_record(&record)?,
                Err(e) if policy == InvalidWordPolicy::Skip && e.is_word_level() => {
                    log::warn!("Skipping transcription {}: {e}", line_no + 1);
                    skipped += 1;
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to syllabify transcription {}", line_no + 1)
                    })
                }
            }
        }
        formatter.finish()?;

        if skipped > 0 {
            log::info!("Skipped {skipped} transcription(s)");
        }
        Ok(())
    }

    fn collect_lines(&self) -> Result<Vec<(Option<String>, String)>> {
        let mut lines: Vec<(Option<String>, String)> = self
            .transcriptions
            .iter()
            .map(|t| parse_transcription_line(t))
            .collect();

        if let Some(path) = &self.input {
            lines.extend(FileReader::read_transcriptions(path)?);
        }
        Ok(lines)
    }
}

fn build_record(
    profile: &LanguageProfile,
    label: Option<String>,
    transcription: String,
) -> syllacue_core::Result<SyllabificationRecord> {
    let segments = normalize_segments(&transcription);
    let syllables = Syllabifier::new(profile).syllabify(&segments)?;
    let syllabification = stringify(&syllables);

    Ok(SyllabificationRecord {
        label,
        syllable_cue: syllable_cue(&syllabification),
        segment_cue: segment_cue(&segments),
        syllabification,
        transcription,
        syllables,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllacue_core::{get_profile, CoreError};

    #[test]
    fn test_build_record() {
        let profile = get_profile("en").unwrap();
        let record = build_record(
            &profile,
            Some("about".to_string()),
            "AH0-B-AW1-T".to_string(),
        )
        .unwrap();

        assert_eq!(record.syllabification, "AH0 BAW1T");
        assert_eq!(record.syllable_cue, "y.ah0_y.baw1t");
        assert_eq!(record.segment_cue, "s.ah0_s.b_s.aw1_s.t");
        assert_eq!(record.syllables.len(), 2);
    }

    #[test]
    fn test_build_record_invalid() {
        let profile = get_profile("en").unwrap();
        let err = build_record(&profile, None, "B XX1 G".to_string()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidPhoneme { ref symbol, position: 1 } if symbol == "XX1"
        ));
    }

    #[test]
    fn test_no_transcriptions() {
        let args = SyllabifyArgs {
            transcriptions: Vec::new(),
            input: None,
            format: OutputFormat::Text,
            language: LanguageArgs::default(),
            on_invalid: None,
            config: None,
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_skip_invalid() {
        let args = SyllabifyArgs {
            transcriptions: vec!["B XX1 G".to_string(), "B AE1 T".to_string()],
            input: None,
            format: OutputFormat::Text,
            language: LanguageArgs::default(),
            on_invalid: Some(OnInvalid::Skip),
            config: None,
        };
        assert!(args.execute().is_ok());

        let args = SyllabifyArgs {
            on_invalid: Some(OnInvalid::Abort),
            ..args
        };
        assert!(args.execute().is_err());
    }
}
