//! Events command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use syllacue_core::{CuePipeline, EventSet, InvalidWordPolicy, LexiconPhonemizer};

use super::OnInvalid;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, speaker_name, FileReader};
use crate::language_source::LanguageArgs;
use crate::output::{write_event_file, TsvEventWriter};
use crate::progress::ProgressReporter;

/// Arguments for the events command
#[derive(Debug, Args)]
pub struct EventsArgs {
    /// Speaker word lists, one word per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Pronunciation lexicon (CMUdict or `word<TAB>transcription`)
    #[arg(long, value_name = "FILE")]
    pub lexicon: PathBuf,

    /// Merged event file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory for one event file per speaker
    #[arg(long, value_name = "DIR")]
    pub per_speaker_dir: Option<PathBuf>,

    /// Gzip-compress event files
    #[arg(long)]
    pub gzip: bool,

    /// What to do with words that cannot be transcribed or syllabified
    #[arg(long, value_enum)]
    pub on_invalid: Option<OnInvalid>,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Effective settings after merging flags over the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    policy: InvalidWordPolicy,
    gzip: bool,
    threads: usize,
}

impl EventsArgs {
    /// Execute the events command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let settings = self.settings(&config);
        log::debug!("Arguments: {:?}", self);
        log::debug!("Effective settings: {:?}", settings);

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} speaker file(s)", files.len());

        let profile = self
            .language
            .source(&config.processing.default_language)
            .load()?;
        let lexicon = LexiconPhonemizer::from_file(&self.lexicon)
            .with_context(|| format!("Failed to load lexicon: {}", self.lexicon.display()))?;
        if lexicon.is_empty() {
            bail!("Lexicon {} has no entries", self.lexicon.display());
        }
        let pipeline = CuePipeline::new(profile, Arc::new(lexicon)).with_policy(settings.policy);

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);
        progress.set_message("Reading word lists");

        let sequences = files
            .iter()
            .map(|path| FileReader::read_word_list(path))
            .collect::<Result<Vec<_>>>()?;

        progress.set_message("Building events");
        let threads = worker_threads(settings.threads);
        log::info!("Using {threads} worker thread(s)");
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker threads")?;
        let sets = pool
            .install(|| pipeline.events_batch(&sequences))
            .context("Failed to build events")?;

        self.write_outputs(&files, &sets, settings.gzip, &progress)?;
        progress.finish();

        let stats = pipeline.cache().stats();
        log::info!(
            "Transcription cache: {} words, {} hits, {} misses",
            stats.entries,
            stats.hits,
            stats.misses
        );

        let events: usize = sets.iter().map(|set| set.events.len()).sum();
        let skipped: usize = sets.iter().map(|set| set.skipped.len()).sum();
        if skipped > 0 {
            log::warn!("Skipped {skipped} word(s) that could not be syllabified");
        }
        if !quiet {
            eprintln!(
                "Built {events} events for {} speaker(s), {skipped} word(s) skipped",
                files.len()
            );
        }
        Ok(())
    }

    fn settings(&self, config: &CliConfig) -> Settings {
        Settings {
            policy: self
                .on_invalid
                .map(InvalidWordPolicy::from)
                .unwrap_or(config.processing.on_invalid),
            gzip: self.gzip || config.output.gzip,
            threads: self.threads.unwrap_or(config.performance.worker_threads),
        }
    }

    fn write_outputs(
        &self,
        files: &[PathBuf],
        sets: &[EventSet],
        gzip: bool,
        progress: &ProgressReporter,
    ) -> Result<()> {
        if let Some(dir) = &self.per_speaker_dir {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        for (path, set) in files.iter().zip(sets) {
            let speaker = speaker_name(path);
            if let Some(dir) = &self.per_speaker_dir {
                write_event_file(&speaker_file(dir, &speaker), &set.events, gzip)?;
            }
            progress.file_completed(&speaker);
        }

        let merged = sets.iter().flat_map(|set| &set.events);
        match &self.output {
            Some(path) => {
                let written = write_event_file(path, merged, gzip)?;
                log::info!("Wrote merged events to {}", written.display());
            }
            None if self.per_speaker_dir.is_none() => {
                if gzip {
                    log::warn!("--gzip is ignored when writing to stdout");
                }
                let mut writer = TsvEventWriter::new(io::stdout().lock())?;
                writer.write_events(merged)?;
                writer.into_inner()?;
            }
            None => {}
        }
        Ok(())
    }
}

/// Requested thread count, `0` meaning one per logical CPU
fn worker_threads(requested: usize) -> usize {
    match requested {
        0 => num_cpus::get(),
        n => n,
    }
}

fn speaker_file(dir: &Path, speaker: &str) -> PathBuf {
    dir.join(format!("{speaker}.tsv"))
}
