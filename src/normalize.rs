//! Noise filtering for captured console transcripts.
//!
//! A raw transcript line is either semantically meaningful program output or
//! session-specific noise: stray NUL/BEL characters, login banners, date
//! headers, or an interactive prompt that the capture merged onto the same
//! line as the value typed into it. This module classifies each line with
//! plain prefix/substring checks and keeps only the meaningful ones, in
//! their original order.

/// Substring that identifies a merged date-prompt line.
const DATE_PROMPT: &str = "Enter the new date:";

/// Full prompt text a merged line is split on to recover the typed value.
///
/// The `(mm-dd-yy)` suffix is a literal from the one transcript format this
/// tool was written against. Do not generalize it; a merged line whose
/// prompt does not match this exact text carries nothing recoverable.
const DATE_PROMPT_FULL: &str = "Enter the new date: (mm-dd-yy)";

/// Prefixes of session banner lines that are always discarded.
const BANNER_PREFIXES: &[&str] = &["User Name:", "The current date is:", "Tue Nov 11"];

/// Normalize a single raw line.
///
/// Returns the cleaned line, or `None` when the line is noise. Rules, in
/// order and mutually exclusive:
///
/// 1. NUL and BEL characters are removed anywhere in the line.
/// 2. The result is whitespace-trimmed; an empty result is discarded.
/// 3. A line containing the date prompt is handled by the merged-prompt
///    rule only: split on the full prompt literal, emit the trimmed
///    remainder after it if non-empty, otherwise discard. The banner checks
///    below are never consulted for such a line.
/// 4. A line starting with any banner prefix is discarded.
/// 5. Anything else is emitted trimmed, unchanged.
pub fn normalize_line(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|&c| c != '\0' && c != '\x07').collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains(DATE_PROMPT) {
        // Merged prompt: only the text after the full prompt is real output.
        return match trimmed.split_once(DATE_PROMPT_FULL) {
            Some((_, rest)) => {
                let rest = rest.trim();
                (!rest.is_empty()).then(|| rest.to_owned())
            }
            None => None,
        };
    }

    if BANNER_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        return None;
    }

    Some(trimmed.to_owned())
}

/// Normalize a full transcript, preserving the order of surviving lines.
///
/// The output length is always `<=` the input length: filtering removes
/// lines (or substitutes the merged-prompt remainder in place) but never
/// adds or splits.
pub fn normalize(lines: &[String]) -> Vec<String> {
    lines.iter().filter_map(|l| normalize_line(l)).collect()
}
