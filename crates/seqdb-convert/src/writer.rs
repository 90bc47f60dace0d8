// Canonical database serialization
//
// One record per line, `organism|accession|locus|sequence`, UNIX newlines,
// no header row. This is the exact layout the search engines load, so the
// format is bit-for-bit stable.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::Corpus;

pub struct DatabaseWriter;

impl DatabaseWriter {
    /// Write the corpus to `path`, truncating any existing file.
    ///
    /// Returns the number of bytes written. A failure mid-write leaves the
    /// lines already flushed on disk; there is no all-or-nothing
    /// guarantee.
    pub fn write_file(path: impl AsRef<Path>, corpus: &Corpus) -> Result<u64> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to open output file: {}", path.display()))?;

        let mut writer = BufWriter::new(file);
        let bytes = Self::write_to(&mut writer, corpus)?;
        writer.flush().context("Failed to flush output file")?;
        Ok(bytes)
    }

    /// Serialize the corpus, in insertion order, to any sink
    pub fn write_to<W: Write>(writer: &mut W, corpus: &Corpus) -> Result<u64> {
        let mut bytes = 0u64;

        for record in corpus.records() {
            let line = format!(
                "{}|{}|{}|{}\n",
                record.organism, record.accession, record.locus, record.sequence
            );
            writer
                .write_all(line.as_bytes())
                .context("Failed to write record")?;
            bytes += line.len() as u64;
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SequenceRecord;

    fn record(organism: &str, accession: &str, locus: &str, sequence: &str) -> SequenceRecord {
        SequenceRecord {
            organism: organism.to_string(),
            accession: accession.to_string(),
            locus: locus.to_string(),
            strain: "none".to_string(),
            sequence: sequence.to_string(),
        }
    }

    #[test]
    fn test_line_layout() {
        let mut corpus = Corpus::new();
        corpus.insert("k1", record("Aeromonas punctata", "X60408", "S000002564", "ACGT"));

        let mut out = Vec::new();
        let bytes = DatabaseWriter::write_to(&mut out, &corpus).unwrap();

        assert_eq!(out, b"Aeromonas punctata|X60408|S000002564|ACGT\n");
        assert_eq!(bytes, out.len() as u64);
    }

    #[test]
    fn test_insertion_order_and_no_trailing_record() {
        let mut corpus = Corpus::new();
        corpus.insert("k1", record("none", "A1", "L1", "AAAA"));
        corpus.insert("k2", record("none", "A2", "L2", "CCCC"));

        let mut out = Vec::new();
        DatabaseWriter::write_to(&mut out, &corpus).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "none|A1|L1|AAAA\nnone|A2|L2|CCCC\n");
    }

    #[test]
    fn test_empty_corpus_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.txt");

        let bytes = DatabaseWriter::write_file(&path, &Corpus::new()).unwrap();
        assert_eq!(bytes, 0);
        assert_eq!(std::fs::read(&path).unwrap(), b"");
    }

    #[test]
    fn test_output_is_truncated_not_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.txt");
        std::fs::write(&path, "stale contents\n").unwrap();

        let mut corpus = Corpus::new();
        corpus.insert("k1", record("none", "A1", "L1", "AAAA"));
        DatabaseWriter::write_file(&path, &corpus).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "none|A1|L1|AAAA\n");
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let result = DatabaseWriter::write_file("/no/such/dir/db.txt", &Corpus::new());
        assert!(result.is_err());
    }
}
