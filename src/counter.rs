use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::{Result, StatsError};

/// What to do with a file that is not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decode {
    #[default]
    Strict,
    Lossy,
}

/// Reads the whole file and returns its line count.
pub fn count_lines(path: &Path, decode: Decode) -> Result<usize> {
    let bytes = fs::read(path).map_err(|source| StatsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = match std::str::from_utf8(&bytes) {
        Ok(text) => count_text_lines(text),
        Err(_) if decode == Decode::Lossy => {
            let (text, _, _) = WINDOWS_1252.decode(&bytes);
            count_text_lines(&text)
        }
        Err(_) => {
            return Err(StatsError::Decode {
                path: path.to_path_buf(),
            })
        }
    };
    Ok(lines)
}

/// Counts lines with universal newlines: `\n`, `\r\n` and a lone `\r` each
/// end a line, and a trailing unterminated segment counts as one more.
pub fn count_text_lines(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut lines = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => lines += 1,
            b'\r' => {
                lines += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let terminated = matches!(bytes.last(), None | Some(b'\n') | Some(b'\r'));
    if terminated {
        lines
    } else {
        lines + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_text_has_no_lines() {
        assert_eq!(count_text_lines(""), 0);
    }

    #[test]
    fn unterminated_last_line_counts() {
        assert_eq!(count_text_lines("a\nb"), 2);
        assert_eq!(count_text_lines("a\nb\n"), 2);
        assert_eq!(count_text_lines("no newline"), 1);
    }

    #[test]
    fn blank_lines_count() {
        assert_eq!(count_text_lines("\n\n\n"), 3);
    }

    #[test]
    fn universal_newlines() {
        assert_eq!(count_text_lines("a\r\nb\r\n"), 2);
        assert_eq!(count_text_lines("a\rb\rc"), 3);
        assert_eq!(count_text_lines("a\r\n\rb\n"), 3);
    }

    #[test]
    fn invalid_utf8_is_fatal_when_strict() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin.ts");
        fs::write(&path, b"caf\xe9\nbar\n").unwrap();

        let err = count_lines(&path, Decode::Strict).unwrap_err();
        assert!(matches!(err, StatsError::Decode { .. }));
    }

    #[test]
    fn invalid_utf8_is_counted_when_lossy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin.ts");
        fs::write(&path, b"caf\xe9\nbar\n").unwrap();

        assert_eq!(count_lines(&path, Decode::Lossy).unwrap(), 2);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = count_lines(&dir.path().join("gone.ts"), Decode::Strict).unwrap_err();
        assert!(matches!(err, StatsError::Read { .. }));
    }
}
