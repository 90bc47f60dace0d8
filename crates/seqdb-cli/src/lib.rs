//! seqdb CLI Library
//!
//! Command-line interface for converting annotated sequence flat files into
//! the canonical pipe-delimited search database.
//!
//! # Overview
//!
//! - **FASTA conversion**: `seqdb fasta <INPUT> <OUTPUT>`
//! - **GenBank conversion**: `seqdb genbank <INPUT> <OUTPUT>`
//! - **Statistics**: `seqdb stats <INPUT>` (read-only, nothing written)
//!
//! Inputs may be plain text or gzipped (`.gz`). The output database is
//! always fully overwritten, one `organism|accession|locus|sequence` line
//! per record.

pub mod commands;
pub mod error;
pub mod progress;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// seqdb - sequence flat-file to search database converter
#[derive(Parser, Debug)]
#[command(name = "seqdb")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a FASTA flat file into the search database format
    Fasta {
        /// The FASTA file to be processed (no error checking on the
        /// format)
        input: PathBuf,

        /// The database file to write; always overwritten
        output: PathBuf,

        /// Header layout of the source provider (rdp, ncbi)
        #[arg(short, long, default_value = "rdp")]
        provider: String,

        /// Print run statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a GenBank flat file into the search database format
    Genbank {
        /// The GenBank file to be processed
        input: PathBuf,

        /// The database file to write; always overwritten
        output: PathBuf,

        /// Print run statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report corpus statistics without writing a database
    Stats {
        /// The flat file to inspect
        input: PathBuf,

        /// Input format (fasta, genbank)
        #[arg(short, long, default_value = "fasta")]
        format: String,

        /// Header layout of the source provider (rdp, ncbi)
        #[arg(short, long, default_value = "rdp")]
        provider: String,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}
