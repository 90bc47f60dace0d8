// GenBank flat-file record assembly and field extraction
//
// Records are delimited by a `LOCUS` opening line and a `//` terminator.
// Annotation is recovered by first-match scans over the buffered block:
// source files disagree on which sections they carry, so every rule has a
// fallback and bottoms out at the `"none"` sentinel.

use anyhow::{Context, Result};
use tracing::warn;

use crate::annotation::{sanitize, truncate_display, Annotation, MISSING_FIELD};

/// Display cap applied to the organism and strain fields
pub const FIELD_DISPLAY_LEN: usize = 60;

/// The buffered lines of one well-terminated record, `LOCUS` line included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenbankBlock {
    lines: Vec<String>,
}

impl GenbankBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Locus id: the token after the `LOCUS` keyword.
    ///
    /// ```text
    /// LOCUS       S000002564   1500 bp   RNA      25-MAR-2002
    ///             ~~~~~~~~~~
    /// ```
    pub fn locus(&self) -> String {
        self.lines
            .iter()
            .find(|line| line.starts_with("LOCUS"))
            .and_then(|line| line.split_whitespace().nth(1))
            .map(sanitize)
            .unwrap_or_else(|| MISSING_FIELD.to_string())
    }

    /// Organism: the remainder of the first `DEFINITION` line, else the
    /// quoted value of the first `/organism=` qualifier. Capped to
    /// `display_len` characters.
    pub fn organism(&self, display_len: usize) -> String {
        let definition = self
            .lines
            .iter()
            .find_map(|line| line.strip_prefix("DEFINITION"))
            .map(|rest| rest.trim());

        let found = definition.or_else(|| {
            self.lines
                .iter()
                .find_map(|line| Self::qualifier_value(line, "/organism="))
        });

        found
            .map(|value| truncate_display(&sanitize(value), display_len))
            .unwrap_or_else(|| MISSING_FIELD.to_string())
    }

    /// Accession: the token after the `GenBank entry:` cross-reference
    /// marker (as written into COMMENT sections by reference databases),
    /// else the token after the `ACCESSION` keyword.
    pub fn accession(&self) -> String {
        for line in &self.lines {
            if let Some(pos) = line.find("GenBank entry:") {
                let rest = &line[pos + "GenBank entry:".len()..];
                let token: String = rest
                    .trim_start()
                    .chars()
                    .take_while(|c| !c.is_whitespace() && *c != '|')
                    .collect();
                if !token.is_empty() {
                    return sanitize(&token);
                }
            }
        }

        self.lines
            .iter()
            .find_map(|line| line.strip_prefix("ACCESSION"))
            .and_then(|rest| rest.split_whitespace().next())
            .map(sanitize)
            .unwrap_or_else(|| MISSING_FIELD.to_string())
    }

    /// Strain: the quoted value of the first `/strain=` qualifier, capped
    /// to the field display length. Secondary annotation only; not one of
    /// the four canonical output fields.
    pub fn strain(&self) -> String {
        self.lines
            .iter()
            .find_map(|line| Self::qualifier_value(line, "/strain="))
            .map(|value| truncate_display(&sanitize(value), FIELD_DISPLAY_LEN))
            .unwrap_or_else(|| MISSING_FIELD.to_string())
    }

    /// Raw sequence: every line after `ORIGIN`, with the leading numeric
    /// position token of each line discarded and the remaining chunks
    /// concatenated.
    ///
    /// ```text
    /// ORIGIN
    ///       1 CGAACGCTGG CGGCGTGCCT AATACATGCA ...
    ///      61 TAGAAAAACT TAGCGGCGAA CGGGTGAGTA ...
    /// ```
    pub fn origin(&self) -> String {
        let Some(start) = self
            .lines
            .iter()
            .position(|line| line.starts_with("ORIGIN"))
        else {
            return String::new();
        };

        let mut origin = String::new();
        for line in &self.lines[start + 1..] {
            for chunk in line.split_whitespace().skip(1) {
                origin.push_str(chunk);
            }
        }
        origin
    }

    /// All annotation fields of this block
    pub fn annotation(&self, display_len: usize) -> Annotation {
        Annotation {
            organism: self.organism(display_len),
            accession: self.accession(),
            locus: self.locus(),
            strain: self.strain(),
        }
    }

    /// Value of a `/qualifier="..."` marker within a line, unquoted and
    /// bounded at the closing quote (or end of line when unterminated)
    fn qualifier_value<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
        let pos = line.find(marker)?;
        let rest = &line[pos + marker.len()..];
        let rest = rest.strip_prefix('"').unwrap_or(rest);
        match rest.find('"') {
            Some(end) => Some(&rest[..end]),
            None => Some(rest),
        }
    }
}

/// State machine turning a line stream into terminated GenBank blocks
#[derive(Debug, Default)]
pub struct GenbankAssembler;

impl GenbankAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Assemble all well-terminated blocks from a line stream.
    ///
    /// `LOCUS` opens a block (discarding any unterminated lines buffered
    /// before it) and `//` completes it. A trailing block the file
    /// truncates before its terminator yields no record.
    pub fn assemble<I>(&self, lines: I) -> Result<Vec<GenbankBlock>>
    where
        I: IntoIterator<Item = std::io::Result<String>>,
    {
        let mut blocks = Vec::new();
        let mut buffer: Vec<String> = Vec::new();
        let mut collecting = false;

        for line in lines {
            let line = line.context("Failed to read line")?;

            if line.is_empty() {
                continue;
            }

            if line.starts_with("//") {
                if collecting {
                    blocks.push(GenbankBlock::new(std::mem::take(&mut buffer)));
                    collecting = false;
                }
                continue;
            }

            if line.starts_with("LOCUS") {
                if collecting && !buffer.is_empty() {
                    warn!(
                        locus = %GenbankBlock::new(std::mem::take(&mut buffer)).locus(),
                        "unterminated record interrupted by a new LOCUS; discarding it"
                    );
                }
                buffer.clear();
                collecting = true;
            }

            if collecting {
                buffer.push(line);
            }
        }

        if collecting && !buffer.is_empty() {
            warn!(
                locus = %GenbankBlock::new(buffer).locus(),
                "input ended before the record terminator; discarding truncated record"
            );
        }

        Ok(blocks)
    }
}
