//! Checksum utilities for database file integrity reporting

use crate::error::Result;
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;

/// Compute the SHA-256 checksum of a file, hex encoded
pub fn file_sha256(path: impl AsRef<Path>) -> Result<String> {
    let mut file = std::fs::File::open(path)?;
    reader_sha256(&mut file)
}

/// Compute the SHA-256 checksum of any readable source, hex encoded
pub fn reader_sha256<R: Read>(reader: &mut R) -> Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
