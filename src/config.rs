//! Configuration for a comparison run.

use std::path::PathBuf;

/// Legacy default name for the captured transcript.
pub const DEFAULT_FILE1: &str = "bigint.log";

/// Legacy default name for the expected transcript.
pub const DEFAULT_FILE2: &str = "expected.log";

/// How invalid UTF-8 in a transcript is handled while reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Replace invalid byte sequences with U+FFFD and keep going.
    ///
    /// Captured transcripts are frequently corrupted by partial escape
    /// sequences; dropping fidelity beats refusing to compare at all.
    /// This is the default.
    #[default]
    Lossy,
    /// Fail the run on the first invalid byte sequence.
    Strict,
}

/// Configuration for one comparison run.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// First transcript path, resolved against the working directory.
    pub file1: PathBuf,
    /// Second transcript path, resolved against the working directory.
    pub file2: PathBuf,
    /// Decode policy applied to both files.
    pub decode: DecodePolicy,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            file1: PathBuf::from(DEFAULT_FILE1),
            file2: PathBuf::from(DEFAULT_FILE2),
            decode: DecodePolicy::Lossy,
        }
    }
}
