//! Transcript file reading with an explicit decode policy.
//!
//! A transcript is read fully into memory in one shot; the file handle is
//! released before any processing starts. There is no streaming and no
//! partial read, which keeps the rest of the pipeline a pure function over
//! a `Vec` of raw lines.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::config::DecodePolicy;
use crate::error::ReadError;

/// Read a transcript into raw lines.
///
/// Line terminators (`\n` and `\r\n`) are stripped; embedded control
/// characters are kept for the normalizer to deal with. The decode policy
/// decides what happens to invalid UTF-8: [`DecodePolicy::Lossy`] substitutes
/// U+FFFD, [`DecodePolicy::Strict`] returns [`ReadError::InvalidUtf8`].
pub fn read_lines(path: &Path, policy: DecodePolicy) -> Result<Vec<String>, ReadError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ReadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let text = match policy {
        DecodePolicy::Lossy => String::from_utf8_lossy(&bytes).into_owned(),
        DecodePolicy::Strict => String::from_utf8(bytes).map_err(|e| ReadError::InvalidUtf8 {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })?,
    };

    let lines: Vec<String> = text.lines().map(str::to_owned).collect();
    debug!("{}: read {} raw lines", path.display(), lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn splits_lines_and_strips_terminators() {
        let file = write_temp(b"one\ntwo\r\nthree\n");
        let lines = read_lines(file.path(), DecodePolicy::Lossy).unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn lossy_replaces_invalid_utf8() {
        let file = write_temp(b"ok\n\xff\xfe broken\n");
        let lines = read_lines(file.path(), DecodePolicy::Lossy).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "ok");
        assert!(lines[1].contains('\u{FFFD}'));
    }

    #[test]
    fn strict_rejects_invalid_utf8() {
        let file = write_temp(b"ok\n\xff\n");
        let err = read_lines(file.path(), DecodePolicy::Strict).unwrap_err();
        assert!(matches!(err, ReadError::InvalidUtf8 { offset: 3, .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_lines(&dir.path().join("absent.log"), DecodePolicy::Lossy).unwrap_err();
        assert!(matches!(err, ReadError::FileNotFound { .. }));
    }
}
