// Conversion configuration

use crate::annotation::Provider;
use crate::genbank::FIELD_DISPLAY_LEN;
use crate::models::SourceFormat;

/// Configuration for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Input flat-file format
    pub format: SourceFormat,

    /// FASTA header layout; selects the annotation strategy
    pub provider: Provider,

    /// Display cap for the organism field
    pub organism_display_len: usize,

    /// Minimum significant line length for FASTA input
    pub min_line_len: usize,

    /// Record limit for testing (None = convert all)
    pub parse_limit: Option<usize>,
}

impl ConvertConfig {
    /// Create a configuration with defaults for the given format
    pub fn new(format: SourceFormat) -> Self {
        Self {
            format,
            provider: Provider::default(),
            organism_display_len: FIELD_DISPLAY_LEN,
            min_line_len: crate::fasta::MIN_LINE_LEN,
            parse_limit: None,
        }
    }

    /// Set the FASTA header provider
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Set the organism display cap
    pub fn with_organism_display_len(mut self, len: usize) -> Self {
        self.organism_display_len = len;
        self
    }

    /// Set a record limit for testing
    pub fn with_parse_limit(mut self, limit: usize) -> Self {
        self.parse_limit = Some(limit);
        self
    }
}
