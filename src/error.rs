//! Transcript read errors.

use std::path::PathBuf;

/// Errors that can occur while reading a transcript file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 (first invalid byte at offset {}); drop --strict to decode lossily", .path.display(), .offset)]
    InvalidUtf8 { path: PathBuf, offset: usize },
}
