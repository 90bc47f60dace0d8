// Run statistics over the normalized corpus

use serde::Serialize;

use crate::models::{Corpus, SequenceRecord};

/// Running accumulator fed one record at a time while the corpus is built
#[derive(Debug, Default)]
pub struct StatsAccumulator {
    records: usize,
    total_length: u64,
    total_ambiguity: u64,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &SequenceRecord) {
        let length = record.len();

        self.records += 1;
        self.total_length += length as u64;
        self.total_ambiguity += record.ambiguity() as u64;
        self.min_length = Some(self.min_length.map_or(length, |min| min.min(length)));
        self.max_length = Some(self.max_length.map_or(length, |max| max.max(length)));
    }

    pub fn finalize(self) -> RunStatistics {
        let averages = |total: u64| {
            (self.records > 0).then(|| total as f64 / self.records as f64)
        };

        RunStatistics {
            records: self.records,
            min_length: self.min_length,
            max_length: self.max_length,
            avg_length: averages(self.total_length),
            avg_ambiguity: averages(self.total_ambiguity),
        }
    }
}

/// Read-only aggregate over a fully assembled corpus.
///
/// The min/max/average fields are `None` for an empty corpus; there is no
/// division-by-zero failure mode, the averages are simply undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStatistics {
    pub records: usize,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub avg_length: Option<f64>,
    pub avg_ambiguity: Option<f64>,
}

impl RunStatistics {
    /// Collect statistics over a finished corpus
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut acc = StatsAccumulator::new();
        for record in corpus.records() {
            acc.add(record);
        }
        acc.finalize()
    }
}

impl std::fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn count(f: &mut std::fmt::Formatter<'_>, value: Option<usize>) -> std::fmt::Result {
            match value {
                Some(v) => writeln!(f, "{}", v),
                None => writeln!(f, "undefined"),
            }
        }

        fn average(f: &mut std::fmt::Formatter<'_>, value: Option<f64>) -> std::fmt::Result {
            match value {
                Some(v) => writeln!(f, "{:.2}", v),
                None => writeln!(f, "undefined"),
            }
        }

        writeln!(f, "   sequence data statistics")?;
        writeln!(f, "---------------------------")?;
        writeln!(f, "    total number of records: {}", self.records)?;
        write!(f, "maximum length of sequences: ")?;
        count(f, self.max_length)?;
        write!(f, "minimum length of sequences: ")?;
        count(f, self.min_length)?;
        write!(f, "average length of sequences: ")?;
        average(f, self.avg_length)?;
        write!(f, "average number of ambiguity: ")?;
        average(f, self.avg_ambiguity)
    }
}
