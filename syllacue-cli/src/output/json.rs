//! JSON output formatter

use super::{OutputFormatter, SyllabificationRecord};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - collects records and writes one JSON array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<SyllabificationRecord>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &SyllabificationRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllacue_core::{get_profile, stringify, syllabify};

    #[test]
    fn test_json_structure() {
        let profile = get_profile("en").unwrap();
        let syllables = syllabify(&profile, "B AE1 T").unwrap();
        let record = SyllabificationRecord {
            label: None,
            transcription: "B AE1 T".to_string(),
            syllabification: stringify(&syllables),
            syllable_cue: "y.bae1t".to_string(),
            segment_cue: "s.b_s.ae1_s.t".to_string(),
            syllables,
        };

        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_record(&record).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let first = &value[0];
        assert!(first.get("label").is_none());
        assert_eq!(first["syllabification"], "BAE1T");
        assert_eq!(first["syllables"][0]["nucleus"], "AE");
        assert_eq!(first["syllables"][0]["stress"], 1);
        assert_eq!(first["syllables"][0]["onset"][0], "B");
    }

    #[test]
    fn test_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.into_inner()).unwrap(), "[]\n");
    }
}
