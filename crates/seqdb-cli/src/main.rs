//! seqdb CLI - Main entry point

use clap::Parser;
use seqdb_cli::{Cli, Commands};
use seqdb_common::logging::{init_logging, LogConfig, LogLevel};
use seqdb_convert::SourceFormat;
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Parse command-line arguments. Usage failures print the usage text to
    // stdout and exit 0: the wrapper scripts that drive the converters
    // read stdout and treat the usage report as a clean exit.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            print!("{}", err.render());
            process::exit(0);
        },
    };

    // Initialize logging: environment configuration first, then the
    // verbose flag raises the level. Without either, only warnings reach
    // the console.
    let mut log_config = LogConfig::from_env().unwrap_or_default();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    } else if std::env::var("LOG_LEVEL").is_err() {
        log_config.level = LogLevel::Warn;
    }

    // The CLI works without logging; ignore init errors
    let _ = init_logging(&log_config);

    // Execute command
    if let Err(e) = execute_command(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: Cli) -> seqdb_cli::Result<()> {
    match cli.command {
        Commands::Fasta {
            input,
            output,
            provider,
            json,
        } => {
            seqdb_cli::commands::convert::run(
                SourceFormat::Fasta,
                input,
                output,
                Some(provider),
                json,
            )
            .await
        }

        Commands::Genbank {
            input,
            output,
            json,
        } => {
            seqdb_cli::commands::convert::run(SourceFormat::Genbank, input, output, None, json)
                .await
        }

        Commands::Stats {
            input,
            format,
            provider,
            json,
        } => seqdb_cli::commands::stats::run(input, format, provider, json).await,
    }
}
