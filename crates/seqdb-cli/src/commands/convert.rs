//! `seqdb fasta` / `seqdb genbank` command implementation
//!
//! Runs the conversion pipeline over one input file and reports the run
//! statistics plus the checksum of the written database.

use std::path::PathBuf;

use seqdb_common::checksum::file_sha256;
use seqdb_convert::{ConvertConfig, Pipeline, Provider, SourceFormat};

use crate::error::{CliError, Result};
use crate::progress::{create_spinner, format_bytes};

/// Convert `input` into the database at `output`
pub async fn run(
    format: SourceFormat,
    input: PathBuf,
    output: PathBuf,
    provider: Option<String>,
    json: bool,
) -> Result<()> {
    let provider = parse_provider(provider)?;
    let config = ConvertConfig::new(format).with_provider(provider);

    let spinner = create_spinner(&format!("processing {} ...", input.display()));

    let pipeline_output = output.clone();
    let result = tokio::task::spawn_blocking(move || {
        Pipeline::new(config).run(&input, &pipeline_output)
    })
    .await
    .map_err(|e| CliError::Other(anyhow::anyhow!(e)))??;

    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", result.statistics);
    println!(
        "wrote {} ({})",
        output.display(),
        format_bytes(result.bytes_written)
    );

    let checksum = file_sha256(&output)?;
    println!("database checksum (sha256): {}", checksum);

    Ok(())
}

fn parse_provider(provider: Option<String>) -> Result<Provider> {
    match provider {
        Some(name) => name.parse().map_err(CliError::InvalidArgument),
        None => Ok(Provider::default()),
    }
}
