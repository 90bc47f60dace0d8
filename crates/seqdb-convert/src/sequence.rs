// Nucleotide sequence normalization and strand operations
//
// These are public building blocks, not just pipeline internals: the
// downstream primer/enzyme matching needs `reverse` and `complement` to
// orient query strands against the database.

/// IUPAC nucleotide alphabet accepted in normalized output: the four bases,
/// `N`, and the ambiguity codes.
pub const ALPHABET: &str = "ACGTNYRSWKMBDHV";

/// Normalize a raw sequence into the canonical alphabet.
///
/// Uppercases, maps the RNA `U` to `T` and the placeholder `X` to `N`, and
/// replaces anything left outside [`ALPHABET`] (gaps, stray punctuation,
/// protein residues) with `N`.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            let c = c.to_ascii_uppercase();
            match c {
                'U' => 'T',
                'X' => 'N',
                c if ALPHABET.contains(c) => c,
                _ => 'N',
            }
        })
        .collect()
}

/// Reverse a sequence. No alphabet validation; any text reverses.
pub fn reverse(seq: &str) -> String {
    seq.chars().rev().collect()
}

/// Complement a sequence through the fixed table
/// `ATUGCYRSWKMBDHVN -> TAACGRYSWMKVHDBN`.
///
/// Length-preserving and total over the stated alphabet; characters outside
/// it pass through unchanged, so gap characters survive a round trip.
pub fn complement(seq: &str) -> String {
    seq.chars()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'U' => 'A',
            'G' => 'C',
            'C' => 'G',
            'Y' => 'R',
            'R' => 'Y',
            'S' => 'S',
            'W' => 'W',
            'K' => 'M',
            'M' => 'K',
            'B' => 'V',
            'D' => 'H',
            'H' => 'D',
            'V' => 'B',
            'N' => 'N',
            other => other,
        })
        .collect()
}

/// Antisense strand, an alias of [`complement`]
pub fn antisense(seq: &str) -> String {
    complement(seq)
}
