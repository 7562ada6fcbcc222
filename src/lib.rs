//! Transcript log normalization and comparison.
//!
//! Console transcripts captured from interactive programs carry noise that
//! has nothing to do with the program's actual output: stray NUL and BEL
//! characters, session banners (`User Name:`, date headers), and prompt text
//! that a terminal capture merged onto the same line as the answer typed into
//! it. This crate strips that noise from two transcripts and then compares
//! them position by position.
//!
//! # Pipeline
//!
//! - [`reader`] - Reads a transcript fully into raw lines, with an explicit
//!   lossy/strict UTF-8 decode policy
//! - [`normalize`] - Filters raw lines down to the semantically meaningful
//!   ones, preserving order
//! - [`compare`] - Walks two normalized transcripts in lockstep and reports
//!   the first divergence plus any length mismatch
//!
//! Deliberately out of scope: general diff alignment (no LCS, no
//! insert/delete detection), directory comparison, and configurable filter
//! rules. Classification is purely prefix/substring based and comparison is
//! strict positional equality.

pub mod compare;
pub mod config;
pub mod error;
pub mod normalize;
pub mod reader;

pub use compare::{compare, Outcome, Report};
pub use config::{CompareConfig, DecodePolicy};
pub use error::ReadError;
pub use normalize::normalize;
pub use reader::read_lines;

use tracing::debug;

/// Run the full pipeline for one configuration: read both transcripts,
/// normalize them, and compare.
///
/// Semantic mismatches are not errors; they are carried in the returned
/// [`Report`]. Only read or decode failures surface as `Err`.
pub fn run(config: &CompareConfig) -> Result<Report, ReadError> {
    let raw1 = read_lines(&config.file1, config.decode)?;
    let raw2 = read_lines(&config.file2, config.decode)?;

    let lines1 = normalize(&raw1);
    let lines2 = normalize(&raw2);
    debug!(
        "{}: kept {} of {} lines",
        config.file1.display(),
        lines1.len(),
        raw1.len()
    );
    debug!(
        "{}: kept {} of {} lines",
        config.file2.display(),
        lines2.len(),
        raw2.len()
    );

    Ok(compare(&lines1, &lines2))
}
