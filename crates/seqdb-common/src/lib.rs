//! seqdb Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling, logging, and file utilities for the seqdb
//! workspace.
//!
//! # Overview
//!
//! This crate provides the functionality used across all seqdb members:
//!
//! - **Error Handling**: Custom error type and result alias
//! - **Logging**: Centralized tracing initialization
//! - **Checksums**: Integrity reporting for written database files
//!
//! # Example
//!
//! ```no_run
//! use seqdb_common::{Result, SeqdbError};
//! use seqdb_common::checksum::file_sha256;
//!
//! fn report(path: &str) -> Result<()> {
//!     let checksum = file_sha256(path)?;
//!     tracing::info!(%checksum, "database written");
//!     Ok(())
//! }
//! ```

pub mod checksum;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{Result, SeqdbError};
