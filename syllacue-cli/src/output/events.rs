//! Tab-separated event files for NDL training

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use syllacue_core::Event;

const HEADER: [&str; 2] = ["cues", "outcomes"];

/// Writes `cues<TAB>outcomes` rows, header first
pub struct TsvEventWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TsvEventWriter<W> {
    /// Create a writer and emit the header row
    pub fn new(writer: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    pub fn write_event(&mut self, event: &Event) -> Result<()> {
        self.writer
            .write_record([event.cues.as_str(), event.outcomes.as_str()])?;
        Ok(())
    }

    pub fn write_events<'a>(&mut self, events: impl IntoIterator<Item = &'a Event>) -> Result<()> {
        for event in events {
            self.write_event(event)?;
        }
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush event rows: {}", e.error()))
    }
}

/// Plain or gzip-compressed file
enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Sink {
    fn create(path: &Path, gzip: bool) -> io::Result<Self> {
        let file = BufWriter::new(File::create(path)?);
        Ok(if gzip {
            Sink::Gzip(GzEncoder::new(file, Compression::default()))
        } else {
            Sink::Plain(file)
        })
    }

    fn finish(self) -> io::Result<()> {
        match self {
            Sink::Plain(mut file) => file.flush(),
            Sink::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Plain(w) => w.write(buf),
            Sink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Plain(w) => w.flush(),
            Sink::Gzip(w) => w.flush(),
        }
    }
}

/// Path an event file is written to: `.gz` is appended when compressing
/// and the name does not already carry it.
pub fn event_file_path(path: &Path, gzip: bool) -> PathBuf {
    let has_gz = path.extension().is_some_and(|ext| ext == "gz");
    if gzip && !has_gz {
        let mut name = path.as_os_str().to_os_string();
        name.push(".gz");
        PathBuf::from(name)
    } else {
        path.to_path_buf()
    }
}

/// Write `events` to `path` and return the path actually written
pub fn write_event_file<'a>(
    path: &Path,
    events: impl IntoIterator<Item = &'a Event>,
    gzip: bool,
) -> Result<PathBuf> {
    let target = event_file_path(path, gzip);
    let sink = Sink::create(&target, gzip)
        .with_context(|| format!("Failed to create event file: {}", target.display()))?;

    let mut writer = TsvEventWriter::new(sink)?;
    writer.write_events(events)?;
    writer
        .into_inner()?
        .finish()
        .with_context(|| format!("Failed to finish event file: {}", target.display()))?;

    log::debug!("Wrote {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::TempDir;

    fn event(cues: &str, outcomes: &str) -> Event {
        Event {
            cues: cues.to_string(),
            outcomes: outcomes.to_string(),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let mut writer = TsvEventWriter::new(Vec::new()).unwrap();
        writer
            .write_event(&event("c.runs_y.dao1g_s.d_s.ao1_s.g", "dog"))
            .unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            output,
            "cues\toutcomes\nc.runs_y.dao1g_s.d_s.ao1_s.g\tdog\n"
        );
    }

    #[test]
    fn test_header_without_events() {
        let writer = TsvEventWriter::new(Vec::new()).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(output, "cues\toutcomes\n");
    }

    #[test]
    fn test_event_file_path() {
        assert_eq!(
            event_file_path(Path::new("out/s01.tsv"), true),
            PathBuf::from("out/s01.tsv.gz")
        );
        assert_eq!(
            event_file_path(Path::new("out/s01.tsv.gz"), true),
            PathBuf::from("out/s01.tsv.gz")
        );
        assert_eq!(
            event_file_path(Path::new("out/s01.tsv"), false),
            PathBuf::from("out/s01.tsv")
        );
    }

    #[test]
    fn test_gzip_file() {
        let temp_dir = TempDir::new().unwrap();
        let events = vec![event("y.bae1t_s.b_s.ae1_s.t", "bat")];

        let written = write_event_file(&temp_dir.path().join("events.tsv"), &events, true).unwrap();
        assert!(written.to_string_lossy().ends_with(".tsv.gz"));

        let mut content = String::new();
        GzDecoder::new(File::open(&written).unwrap())
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "cues\toutcomes\ny.bae1t_s.b_s.ae1_s.t\tbat\n");
    }

    #[test]
    fn test_plain_file() {
        let temp_dir = TempDir::new().unwrap();
        let events = vec![event("c.b_y.ah0_s.ah0", "a"), event("c.a_y.bih1g_s.b_s.ih1_s.g", "b")];

        let written = write_event_file(&temp_dir.path().join("events.tsv"), &events, false).unwrap();
        let content = std::fs::read_to_string(written).unwrap();
        assert_eq!(content.lines().count(), 3);
    }
}
