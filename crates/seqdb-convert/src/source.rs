// Line source: lazy, finite, forward-only line iteration over an input
// file

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A lazy sequence of raw lines from a flat file, with trailing whitespace
/// and line terminators stripped.
///
/// Opening fails before any line is produced, so an unreadable file never
/// contributes a partial corpus. The stream is forward-only; restarting
/// means reopening. Paths ending in `.gz` are decompressed transparently,
/// since GenBank divisions ship gzipped.
pub struct LineSource {
    reader: Box<dyn BufRead>,
}

impl LineSource {
    /// Open a plain or gzipped flat file for line iteration
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;

        let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        Ok(Self { reader })
    }

    /// Wrap an in-memory reader (tests, pre-decompressed buffers)
    pub fn from_reader<R: std::io::Read + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(BufReader::new(reader)),
        }
    }
}

impl Iterator for LineSource {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                while line.ends_with(|c: char| c.is_whitespace()) {
                    line.pop();
                }
                Some(Ok(line))
            },
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};

    #[test]
    fn test_lines_are_trimmed() {
        let source = LineSource::from_reader(Cursor::new("one  \r\ntwo\t\nthree"));
        let lines: Vec<String> = source.map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        let source = LineSource::from_reader(Cursor::new(""));
        assert_eq!(source.count(), 0);
    }

    #[test]
    fn test_open_missing_file_fails() {
        assert!(LineSource::open("/no/such/input.fas").is_err());
    }

    #[test]
    fn test_open_gzipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.fas.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">seq1\nACGT\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let lines: Vec<String> = LineSource::open(&path)
            .unwrap()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec![">seq1", "ACGT"]);
    }
}
