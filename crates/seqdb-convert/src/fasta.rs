// FASTA record assembly
//
// A two-state machine over the line stream: seeking a header, or
// accumulating sequence body under the most recent header. Record
// boundaries are `>` lines; everything else of significant length is
// sequence.

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::RawRecord;

/// Minimum length for a line to be significant; anything shorter is
/// treated as blank or comment noise.
pub const MIN_LINE_LEN: usize = 2;

pub struct FastaAssembler {
    min_line_len: usize,
}

impl Default for FastaAssembler {
    fn default() -> Self {
        Self {
            min_line_len: MIN_LINE_LEN,
        }
    }
}

impl FastaAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_line_len(mut self, min_line_len: usize) -> Self {
        self.min_line_len = min_line_len;
        self
    }

    /// Assemble raw records from a line stream.
    ///
    /// Every header line yields exactly one record: a header flushes the
    /// record open before it, and end of input flushes the open record
    /// unconditionally, even with an empty sequence body, so the last
    /// header in a file is never dropped. Sequence lines arriving before
    /// any header are flushed under an empty key rather than lost.
    pub fn assemble<I>(&self, lines: I) -> Result<Vec<RawRecord>>
    where
        I: IntoIterator<Item = std::io::Result<String>>,
    {
        let mut records = Vec::new();
        let mut key: Option<String> = None;
        let mut buffer = String::new();

        for line in lines {
            let line = line.context("Failed to read line")?;

            if line.len() < self.min_line_len {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                Self::flush(&mut records, key.take(), &mut buffer);
                key = Some(header.trim().to_string());
            } else {
                buffer.push_str(line.trim());
            }
        }

        // End of input: the open record is flushed no matter what has
        // accumulated.
        if key.is_some() || !buffer.is_empty() {
            Self::flush(&mut records, key, &mut buffer);
        }

        Ok(records)
    }

    fn flush(records: &mut Vec<RawRecord>, key: Option<String>, buffer: &mut String) {
        let raw_sequence = buffer.trim().to_string();
        buffer.clear();

        match key {
            Some(key) => records.push(RawRecord { key, raw_sequence }),
            None if !raw_sequence.is_empty() => {
                warn!(
                    bases = raw_sequence.len(),
                    "sequence data before any header; keeping it under an empty key"
                );
                records.push(RawRecord {
                    key: String::new(),
                    raw_sequence,
                });
            },
            None => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> impl Iterator<Item = std::io::Result<String>> + '_ {
        text.lines().map(|l| Ok(l.to_string()))
    }

    #[test]
    fn test_record_per_header() {
        let input = ">seq1 first\nACGT\nTTTT\n>seq2 second\nGGGG\n";
        let records = FastaAssembler::new().assemble(lines(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "seq1 first");
        assert_eq!(records[0].raw_sequence, "ACGTTTTT");
        assert_eq!(records[1].key, "seq2 second");
        assert_eq!(records[1].raw_sequence, "GGGG");
    }

    #[test]
    fn test_short_lines_ignored() {
        let input = ">seq1 first\nAC\n\n.\nGT\n";
        let records = FastaAssembler::new().assemble(lines(input)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].raw_sequence, "ACGT");
    }

    #[test]
    fn test_trailing_header_without_sequence_is_kept() {
        let input = ">seq1 first\nACGT\n>seq2 trailing\n";
        let records = FastaAssembler::new().assemble(lines(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].key, "seq2 trailing");
        assert_eq!(records[1].raw_sequence, "");
    }

    #[test]
    fn test_headerless_input_flushed_under_empty_key() {
        let input = "ACGT\nTTTT\n";
        let records = FastaAssembler::new().assemble(lines(input)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, "");
        assert_eq!(records[0].raw_sequence, "ACGTTTTT");
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        let records = FastaAssembler::new().assemble(lines("")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_error_propagates() {
        let stream = vec![
            Ok(">seq1".to_string()),
            Err(std::io::Error::other("disk gone")),
        ];
        assert!(FastaAssembler::new().assemble(stream).is_err());
    }
}
