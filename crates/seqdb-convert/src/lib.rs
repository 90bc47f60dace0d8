//! seqdb conversion library
//!
//! Normalizes loosely-standardized annotated sequence flat files (FASTA,
//! GenBank) into the canonical pipe-delimited database consumed by the
//! downstream search tools.
//!
//! Annotation layout varies across source providers, so neither format can
//! be parsed by fixed columns; record boundaries are detected by per-format
//! state machines and the annotation fields are recovered heuristically,
//! with the sentinel `"none"` standing in for anything a rule cannot find.
//!
//! Data flow for one run:
//!
//! ```text
//! LineSource -> {Fasta|Genbank}Assembler -> annotation extraction
//!            -> sequence normalization -> Corpus -> (statistics, writer)
//! ```

pub mod annotation;
pub mod config;
pub mod fasta;
pub mod genbank;
pub mod models;
pub mod pipeline;
pub mod sequence;
pub mod source;
pub mod stats;
pub mod writer;

pub use annotation::{Annotation, AnnotationStrategy, Provider, MISSING_FIELD};
pub use config::ConvertConfig;
pub use fasta::FastaAssembler;
pub use genbank::{GenbankAssembler, GenbankBlock};
pub use models::{ConversionResult, Corpus, RawRecord, SequenceRecord, SourceFormat};
pub use pipeline::Pipeline;
pub use source::LineSource;
pub use stats::RunStatistics;
pub use writer::DatabaseWriter;
