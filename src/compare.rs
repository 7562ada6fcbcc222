//! Lockstep comparison of two normalized transcripts.
//!
//! Comparison is strict positional equality: line `i` of one transcript is
//! only ever compared with line `i` of the other. There is no alignment or
//! insert/delete detection; a single extra line early in one file shifts
//! every later comparison, and that is the intended behavior for transcripts
//! that are supposed to be identical after filtering.

use std::fmt;

/// Terminal outcome of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Same length, every line equal.
    Match,
    /// Common prefix equal, but the transcripts have different lengths.
    LengthDiffers,
    /// First differing pair inside the common prefix. `line` is 1-based.
    ///
    /// Takes priority over [`Outcome::LengthDiffers`] when both hold.
    MismatchAt {
        line: usize,
        left: String,
        right: String,
    },
}

/// Result of comparing two normalized transcripts.
///
/// Carries both lengths so the rendering can report a count mismatch even
/// when a content difference is what ends the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub len1: usize,
    pub len2: usize,
    pub outcome: Outcome,
}

impl Report {
    /// True when the transcripts matched in both length and content.
    pub fn is_match(&self) -> bool {
        matches!(self.outcome, Outcome::Match)
    }
}

/// Compare two normalized transcripts position by position.
///
/// Walks the common prefix eagerly and stops at the first differing pair;
/// lines past the first difference are never examined.
pub fn compare(lines1: &[String], lines2: &[String]) -> Report {
    let (len1, len2) = (lines1.len(), lines2.len());

    for (i, (a, b)) in lines1.iter().zip(lines2).enumerate() {
        if a != b {
            return Report {
                len1,
                len2,
                outcome: Outcome::MismatchAt {
                    line: i + 1,
                    left: a.clone(),
                    right: b.clone(),
                },
            };
        }
    }

    let outcome = if len1 == len2 {
        Outcome::Match
    } else {
        Outcome::LengthDiffers
    };
    Report { len1, len2, outcome }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len1 != self.len2 {
            writeln!(f, "Line count mismatch: {} vs {}", self.len1, self.len2)?;
        }
        match &self.outcome {
            // Debug formatting keeps invisible characters visible.
            Outcome::MismatchAt { line, left, right } => {
                writeln!(f, "Difference at line {}:", line)?;
                writeln!(f, "File 1: {:?}", left)?;
                writeln!(f, "File 2: {:?}", right)
            }
            Outcome::LengthDiffers => writeln!(f, "Files differ in length."),
            Outcome::Match => writeln!(f, "Files match!"),
        }
    }
}
