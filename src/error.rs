//! Conversion errors.

use std::path::PathBuf;

/// Errors that can occur while converting a file.
///
/// Only I/O can fail; malformed escape sequences are never an error.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Cannot open input file: {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open output file: {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// The path that could not be read or written.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConvertError::ReadInput { path, .. } | ConvertError::WriteOutput { path, .. } => path,
        }
    }
}
