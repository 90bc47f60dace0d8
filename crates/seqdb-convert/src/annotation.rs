// Heuristic annotation recovery for FASTA header keys
//
// There is no standard layout for FASTA annotation; each source provider
// arranges the header fields differently, so the field positions are a
// per-provider strategy selected by configuration rather than a fixed
// parse.

use serde::Serialize;

/// Sentinel emitted for any field an extraction rule cannot recover
pub const MISSING_FIELD: &str = "none";

/// Characters the downstream delimited format cannot carry in a text field
const DISALLOWED: &[char] = &['%', '_', '\'', '&', ';', '"', '\n', '\r'];

/// Strip the characters that are disallowed in the pipe-delimited output
/// and in any query use of the field. Idempotent.
pub fn sanitize(field: &str) -> String {
    field.chars().filter(|c| !DISALLOWED.contains(c)).collect()
}

/// Cap a field to `max` characters for display, marking the cut with an
/// ellipsis
pub fn truncate_display(field: &str, max: usize) -> String {
    if field.chars().count() <= max || max < 4 {
        return field.to_string();
    }
    let cut: String = field.chars().take(max - 3).collect();
    format!("{}...", cut)
}

/// Annotation fields recovered from a raw record key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub organism: String,
    pub accession: String,
    pub locus: String,
    pub strain: String,
}

impl Annotation {
    /// All fields set to the missing-field sentinel
    pub fn missing() -> Self {
        Self {
            organism: MISSING_FIELD.to_string(),
            accession: MISSING_FIELD.to_string(),
            locus: MISSING_FIELD.to_string(),
            strain: MISSING_FIELD.to_string(),
        }
    }
}

/// A provider-specific recipe for recovering annotation fields from a raw
/// FASTA header
pub trait AnnotationStrategy: Send + Sync {
    fn extract(&self, key: &str) -> Annotation;
}

/// Known header layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// `Accession ;Locus;Strain` headers, `;`-delimited with the strain as
    /// the trailing field (ribosomal reference databases)
    #[default]
    Rdp,
    /// `gi|number|db|accession|description` headers, `|`-delimited
    /// (NCBI-style)
    Ncbi,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Rdp => "rdp",
            Provider::Ncbi => "ncbi",
        }
    }

    /// The annotation strategy for this provider's header layout
    pub fn strategy(&self) -> Box<dyn AnnotationStrategy> {
        match self {
            Provider::Rdp => Box::new(SemicolonDelimited),
            Provider::Ncbi => Box::new(PipeDelimited),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rdp" | "semicolon" => Ok(Provider::Rdp),
            "ncbi" | "pipe" => Ok(Provider::Ncbi),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn field_or_sentinel(field: Option<&str>) -> String {
    match field.map(|f| sanitize(f.trim())) {
        Some(f) if !f.is_empty() => f,
        _ => MISSING_FIELD.to_string(),
    }
}

/// `;`-delimited header layout: the accession is the first whitespace token
/// of the leading field, the locus the second-to-last field, and the
/// organism (a strain designation) the last.
///
/// `>AF361098.1 ;LOC9;StrainX` -> accession `AF361098.1`, locus `LOC9`,
/// organism/strain `StrainX`.
pub struct SemicolonDelimited;

impl AnnotationStrategy for SemicolonDelimited {
    fn extract(&self, key: &str) -> Annotation {
        let fields: Vec<&str> = key.split(';').collect();

        let accession = field_or_sentinel(
            fields
                .first()
                .and_then(|f| f.split_whitespace().next()),
        );

        // The positional scheme needs at least two delimited fields; a
        // plain header keeps the sentinels.
        let (locus, strain) = if fields.len() >= 2 {
            (
                field_or_sentinel(Some(fields[fields.len() - 2])),
                field_or_sentinel(fields.last().copied()),
            )
        } else {
            (MISSING_FIELD.to_string(), MISSING_FIELD.to_string())
        };

        Annotation {
            organism: strain.clone(),
            accession,
            locus,
            strain,
        }
    }
}

/// `|`-delimited header layout: locus from field 1, accession from field 3,
/// organism from the first comma-separated token of field 4.
///
/// `>gi|2765658|gb|Z78533.1|CIZ78533 C.irapeanum 5.8S rRNA gene` -> locus
/// `2765658`, accession `Z78533.1`, organism `CIZ78533 C.irapeanum 5.8S
/// rRNA gene` up to the first comma.
pub struct PipeDelimited;

impl AnnotationStrategy for PipeDelimited {
    fn extract(&self, key: &str) -> Annotation {
        let fields: Vec<&str> = key.split('|').collect();

        let locus = field_or_sentinel(fields.get(1).copied());
        let accession = field_or_sentinel(fields.get(3).copied());
        let organism = field_or_sentinel(
            fields
                .get(4)
                .and_then(|f| f.split(',').next()),
        );

        Annotation {
            organism,
            // field 3 carries the strain/accession components in this
            // layout
            strain: accession.clone(),
            accession,
            locus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_disallowed() {
        assert_eq!(sanitize("Aero%mo_nas' &punc;ta\"ta\n"), "Aeromonas punctata");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let once = sanitize("a%b_c'd&e;f\"g");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display("short", 60), "short");
        let long = "x".repeat(70);
        let cut = truncate_display(&long, 60);
        assert_eq!(cut.chars().count(), 60);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_semicolon_layout() {
        let ann = SemicolonDelimited.extract("AF361098.1 ;LOC9;StrainX");
        assert_eq!(ann.accession, "AF361098.1");
        assert_eq!(ann.locus, "LOC9");
        assert_eq!(ann.organism, "StrainX");
        assert_eq!(ann.strain, "StrainX");
    }

    #[test]
    fn test_semicolon_layout_plain_header() {
        let ann = SemicolonDelimited.extract("seq1 some description");
        assert_eq!(ann.accession, "seq1");
        assert_eq!(ann.locus, MISSING_FIELD);
        assert_eq!(ann.organism, MISSING_FIELD);
    }

    #[test]
    fn test_pipe_layout() {
        let ann =
            PipeDelimited.extract("gi|2765658|gb|Z78533.1|Cypripedium irapeanum, 5.8S rRNA gene");
        assert_eq!(ann.locus, "2765658");
        assert_eq!(ann.accession, "Z78533.1");
        assert_eq!(ann.organism, "Cypripedium irapeanum");
    }

    #[test]
    fn test_pipe_layout_falls_back_to_sentinels() {
        let ann = PipeDelimited.extract("ABC123.1 ;LOC9;StrainX");
        assert_eq!(ann.locus, MISSING_FIELD);
        assert_eq!(ann.accession, MISSING_FIELD);
        assert_eq!(ann.organism, MISSING_FIELD);
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("rdp".parse::<Provider>(), Ok(Provider::Rdp));
        assert_eq!("NCBI".parse::<Provider>(), Ok(Provider::Ncbi));
        assert!("embl".parse::<Provider>().is_err());
    }
}
