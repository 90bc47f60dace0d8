//! `seqdb stats` command implementation
//!
//! Parses and normalizes an input file, then reports the corpus statistics
//! without writing anything.

use std::path::PathBuf;

use seqdb_convert::stats::RunStatistics;
use seqdb_convert::{ConvertConfig, Pipeline, Provider, SourceFormat};

use crate::error::{CliError, Result};
use crate::progress::create_spinner;

/// Report statistics over `input`
pub async fn run(input: PathBuf, format: String, provider: String, json: bool) -> Result<()> {
    let format: SourceFormat = format.parse().map_err(CliError::InvalidArgument)?;
    let provider: Provider = provider.parse().map_err(CliError::InvalidArgument)?;
    let config = ConvertConfig::new(format).with_provider(provider);

    let spinner = create_spinner(&format!("processing {} ...", input.display()));

    let collected = tokio::task::spawn_blocking(move || Pipeline::new(config).collect(&input))
        .await
        .map_err(|e| CliError::Other(anyhow::anyhow!(e)))??;

    spinner.finish_and_clear();

    let statistics = RunStatistics::from_corpus(&collected.corpus);

    if json {
        println!("{}", serde_json::to_string_pretty(&statistics)?);
    } else {
        println!("{}", statistics);
    }

    Ok(())
}
