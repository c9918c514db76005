/// Errors raised while loading and analyzing a document

use std::io;
use std::path::PathBuf;

/// Failures of the analysis pipeline
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Input path missing, unreadable, permission denied or not a regular file
    #[error("Cannot read input file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File contents are not valid UTF-8 text
    #[error("Input file {} is not valid UTF-8 (invalid byte sequence at offset {offset})", .path.display())]
    Decode { path: PathBuf, offset: usize },

    /// Report could not be serialized or written
    #[error("Failed to export report to {}: {reason}", .path.display())]
    Export { path: PathBuf, reason: String },
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
