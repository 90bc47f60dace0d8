// FASTA conversion tests

use seqdb_convert::{ConvertConfig, Pipeline, Provider, SourceFormat};
use std::io::Write;

fn fasta_pipeline() -> Pipeline {
    Pipeline::new(ConvertConfig::new(SourceFormat::Fasta))
}

fn write_input(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.fas");
    let mut file = std::fs::File::create(&path).expect("Failed to create input");
    file.write_all(contents.as_bytes()).expect("Failed to write input");
    path
}

#[test]
fn test_convert_sample_fasta_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("db.txt");

    let result = fasta_pipeline()
        .run(
            std::path::Path::new("../../tests/fixtures/fasta/sample.fas"),
            &output,
        )
        .expect("Failed to convert sample file");

    // one record per header line, including the trailing sequence-less one
    assert_eq!(result.records_parsed, 3);
    assert_eq!(result.records_written, 3);
    assert_eq!(result.statistics.records, 3);
    assert_eq!(result.statistics.min_length, Some(0));
    assert_eq!(result.statistics.max_length, Some(120));

    let db = std::fs::read_to_string(&output).expect("Failed to read output");
    let lines: Vec<&str> = db.lines().collect();
    assert_eq!(lines.len(), 3);

    // annotation recovered through the semicolon layout
    assert!(lines[0].starts_with("DSM 7323|AF361098.1|S000002564|CGAACGCTGG"));
    // RNA bases normalized to the DNA alphabet
    assert!(lines[1].ends_with("GAAAGTTGGTTTTGCTAACA"));
    // the trailing header still yields a full four-field line
    assert_eq!(lines[2], "CIP 7433|AF361100.1|S000002566|");
}

#[test]
fn test_plain_headers_fall_back_to_sentinels() {
    // the provider-specific split does not apply to these headers; the
    // record is still emitted with sentinel fields
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = write_input(
        &dir,
        ">ABC123.1 ;LOC9;StrainX\nacgtACGT\nNNacgt\n>DEF456.1 ;LOC2;StrainY\nTTTT\n",
    );
    let output = dir.path().join("db.txt");

    let config = ConvertConfig::new(SourceFormat::Fasta).with_provider(Provider::Ncbi);
    let result = Pipeline::new(config)
        .run(&input, &output)
        .expect("Failed to convert");

    assert_eq!(result.records_written, 2);

    let db = std::fs::read_to_string(&output).expect("Failed to read output");
    let lines: Vec<&str> = db.lines().collect();
    assert_eq!(lines[0], "none|none|none|ACGTACGTNNACGT");
    assert_eq!(lines[1], "none|none|none|TTTT");
}

#[test]
fn test_semicolon_layout_recovers_fields() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = write_input(
        &dir,
        ">ABC123.1 ;LOC9;StrainX\nacgtACGT\nNNacgt\n>DEF456.1 ;LOC2;StrainY\nTTTT\n",
    );
    let output = dir.path().join("db.txt");

    fasta_pipeline()
        .run(&input, &output)
        .expect("Failed to convert");

    let db = std::fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(
        db,
        "StrainX|ABC123.1|LOC9|ACGTACGTNNACGT\nStrainY|DEF456.1|LOC2|TTTT\n"
    );
}

#[test]
fn test_records_match_header_count_with_duplicates_collapsed() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = write_input(
        &dir,
        ">same ;L1;S1\nAAAA\n>other ;L2;S2\nCCCC\n>same ;L1;S1\nGGGG\n",
    );
    let output = dir.path().join("db.txt");

    let result = fasta_pipeline()
        .run(&input, &output)
        .expect("Failed to convert");

    assert_eq!(result.records_parsed, 3);
    assert_eq!(result.records_written, 2);
    assert_eq!(result.duplicate_keys, 1);

    // last write wins, and the overwritten key keeps its original position
    let db = std::fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(db, "S1|same|L1|GGGG\nS2|other|L2|CCCC\n");
}

#[test]
fn test_empty_input_produces_empty_database() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = write_input(&dir, "");
    let output = dir.path().join("db.txt");

    let result = fasta_pipeline()
        .run(&input, &output)
        .expect("Failed to convert");

    assert_eq!(result.records_written, 0);
    assert_eq!(result.statistics.records, 0);
    assert_eq!(result.statistics.avg_length, None);
    assert_eq!(result.statistics.avg_ambiguity, None);
    assert_eq!(std::fs::read_to_string(&output).expect("read"), "");
}
