// Data models for the conversion pipeline

use serde::Serialize;
use std::collections::HashMap;

use crate::sequence;
use crate::stats::RunStatistics;

/// Input flat-file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Fasta,
    Genbank,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Fasta => "fasta",
            SourceFormat::Genbank => "genbank",
        }
    }
}

impl std::str::FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fasta" | "fas" | "fa" => Ok(SourceFormat::Fasta),
            "genbank" | "gb" | "gbk" => Ok(SourceFormat::Genbank),
            other => Err(format!("unknown source format: {}", other)),
        }
    }
}

/// Intermediate parse unit: one record boundary's worth of raw text.
///
/// `key` is the raw annotation text (a FASTA header with the leading `>`
/// already stripped); `raw_sequence` is the concatenated, not yet
/// normalized sequence body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub key: String,
    pub raw_sequence: String,
}

/// Canonical output unit: the four pipe-delimited fields plus the secondary
/// strain annotation. Absent fields carry the sentinel `"none"`; `sequence`
/// holds only the uppercased IUPAC nucleotide alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceRecord {
    pub organism: String,
    pub accession: String,
    pub locus: String,
    pub strain: String,
    pub sequence: String,
}

impl SequenceRecord {
    /// Sequence length in bases
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Number of degenerate bases (`N`) in the sequence
    pub fn ambiguity(&self) -> usize {
        self.sequence.bytes().filter(|b| *b == b'N').count()
    }

    /// Reversed sequence
    pub fn reverse(&self) -> String {
        sequence::reverse(&self.sequence)
    }

    /// Complement strand
    pub fn complement(&self) -> String {
        sequence::complement(&self.sequence)
    }

    /// Antisense strand (alias of `complement`)
    pub fn antisense(&self) -> String {
        sequence::antisense(&self.sequence)
    }
}

/// The full set of normalized records produced from one input file.
///
/// Keys are unique; inserting an existing key overwrites the earlier record
/// in place (last-write-wins) while keeping the first insertion's position,
/// so the output line order is the order keys were first seen. Owned by one
/// pipeline run; never shared across files.
#[derive(Debug, Default)]
pub struct Corpus {
    index: HashMap<String, usize>,
    entries: Vec<(String, SequenceRecord)>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the previous record if the key was
    /// already present (the caller decides whether the overwrite is worth a
    /// warning).
    pub fn insert(&mut self, key: impl Into<String>, record: SequenceRecord) -> Option<SequenceRecord> {
        let key = key.into();
        match self.index.get(&key).copied() {
            Some(slot) => Some(std::mem::replace(&mut self.entries[slot].1, record)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, record));
                None
            },
        }
    }

    pub fn get(&self, key: &str) -> Option<&SequenceRecord> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &SequenceRecord> {
        self.entries.iter().map(|(_, record)| record)
    }

    /// Key/record pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SequenceRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }
}

/// Pipeline run result
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub format: SourceFormat,
    /// Raw records flushed by the assembler
    pub records_parsed: usize,
    /// Records written to the database (after duplicate-key collapse)
    pub records_written: usize,
    /// Keys that were overwritten by a later record with the same key
    pub duplicate_keys: usize,
    pub bytes_written: u64,
    pub statistics: RunStatistics,
    pub duration_seconds: f64,
}
