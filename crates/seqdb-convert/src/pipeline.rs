// Conversion pipeline
//
// Orchestrates one run over one input file:
// 1. Iterate lines from the source
// 2. Assemble raw records (format-specific state machine)
// 3. Recover annotation fields
// 4. Normalize sequences
// 5. Accumulate the corpus (last write wins per key)
// 6. Collect statistics and write the database
//
// Purely sequential within one file; converting several files means one
// independent pipeline per file, with nothing shared between them.

use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::ConvertConfig;
use crate::fasta::FastaAssembler;
use crate::genbank::GenbankAssembler;
use crate::models::{ConversionResult, Corpus, SequenceRecord, SourceFormat};
use crate::sequence;
use crate::source::LineSource;
use crate::stats::RunStatistics;
use crate::writer::DatabaseWriter;

/// The corpus assembled from one input file, with parse bookkeeping
#[derive(Debug)]
pub struct CollectedCorpus {
    pub corpus: Corpus,
    /// Raw records flushed by the assembler
    pub records_parsed: usize,
    /// Keys overwritten by a later record with the same key
    pub duplicate_keys: usize,
}

pub struct Pipeline {
    config: ConvertConfig,
}

impl Pipeline {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline: parse `input`, write the database to
    /// `output`, and report statistics over the written corpus.
    pub fn run(&self, input: &Path, output: &Path) -> Result<ConversionResult> {
        let start_time = Instant::now();

        info!(
            "Starting {} conversion: {}",
            self.config.format.as_str(),
            input.display()
        );

        let collected = self.collect(input)?;
        let statistics = RunStatistics::from_corpus(&collected.corpus);
        let bytes_written = DatabaseWriter::write_file(output, &collected.corpus)?;

        let duration = start_time.elapsed();

        info!(
            "Conversion complete for {}: {} raw records, {} written, {} bytes in {:.2}s",
            input.display(),
            collected.records_parsed,
            collected.corpus.len(),
            bytes_written,
            duration.as_secs_f64()
        );

        Ok(ConversionResult {
            format: self.config.format,
            records_parsed: collected.records_parsed,
            records_written: collected.corpus.len(),
            duplicate_keys: collected.duplicate_keys,
            bytes_written,
            statistics,
            duration_seconds: duration.as_secs_f64(),
        })
    }

    /// Parse and normalize `input` into a corpus without writing anything
    /// (read-only statistics runs use this directly)
    pub fn collect(&self, input: &Path) -> Result<CollectedCorpus> {
        let lines = LineSource::open(input)?;

        match self.config.format {
            SourceFormat::Fasta => self.collect_fasta(lines),
            SourceFormat::Genbank => self.collect_genbank(lines),
        }
    }

    fn collect_fasta(&self, lines: LineSource) -> Result<CollectedCorpus> {
        let assembler = FastaAssembler::new().with_min_line_len(self.config.min_line_len);
        let mut records = assembler.assemble(lines)?;
        self.apply_parse_limit(&mut records);

        let strategy = self.config.provider.strategy();
        let mut collected = CollectedCorpus {
            corpus: Corpus::new(),
            records_parsed: records.len(),
            duplicate_keys: 0,
        };

        for raw in records {
            let annotation = strategy.extract(&raw.key);
            let record = SequenceRecord {
                organism: annotation.organism,
                accession: annotation.accession,
                locus: annotation.locus,
                strain: annotation.strain,
                sequence: sequence::normalize(&raw.raw_sequence),
            };
            Self::insert(&mut collected, raw.key, record);
        }

        Ok(collected)
    }

    fn collect_genbank(&self, lines: LineSource) -> Result<CollectedCorpus> {
        let mut blocks = GenbankAssembler::new().assemble(lines)?;
        self.apply_parse_limit(&mut blocks);

        let mut collected = CollectedCorpus {
            corpus: Corpus::new(),
            records_parsed: blocks.len(),
            duplicate_keys: 0,
        };

        for block in blocks {
            let annotation = block.annotation(self.config.organism_display_len);
            let record = SequenceRecord {
                sequence: sequence::normalize(&block.origin()),
                organism: annotation.organism,
                accession: annotation.accession,
                strain: annotation.strain,
                // the locus id is the derived corpus key for this format
                locus: annotation.locus.clone(),
            };
            Self::insert(&mut collected, annotation.locus, record);
        }

        Ok(collected)
    }

    fn insert(collected: &mut CollectedCorpus, key: String, record: SequenceRecord) {
        if collected.corpus.insert(key.clone(), record).is_some() {
            collected.duplicate_keys += 1;
            warn!(key = %key, "duplicate record key; keeping the later record");
        }
    }

    fn apply_parse_limit<T>(&self, records: &mut Vec<T>) {
        if let Some(limit) = self.config.parse_limit {
            if records.len() > limit {
                info!("Reached parse limit of {}, truncating", limit);
                records.truncate(limit);
            }
        }
    }
}
