//! Plain text output formatter

use super::{OutputFormatter, SyllabificationRecord};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter: one syllabification per line, prefixed by the
/// label and a tab when the input had one
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &SyllabificationRecord) -> Result<()> {
        match &record.label {
            Some(label) => writeln!(self.writer, "{label}\t{}", record.syllabification)?,
            None => writeln!(self.writer, "{}", record.syllabification)?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
