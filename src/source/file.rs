//! File-based input source.
//!
//! Files are static: the whole file is read once at construction and
//! handed out on the first poll.

use crate::model::error::InputError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;

/// Read-once file source.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    lines: Option<Vec<String>>,
}

impl FileSource {
    /// Open and read the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors. Invalid UTF-8 is
    /// replaced with U+FFFD rather than rejected.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = BufReader::new(File::open(path)?);
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        while let Some(line) = read_line_lossy(&mut reader, &mut buf)? {
            lines.push(line);
        }

        info!(path = %path.display(), lines = lines.len(), "loaded input file");

        Ok(Self {
            path: path.to_path_buf(),
            lines: Some(lines),
        })
    }

    /// Path this source was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return all lines on the first call, nothing afterwards.
    pub fn drain_lines(&mut self) -> Vec<String> {
        self.lines.take().unwrap_or_default()
    }
}

/// Read one line, decoding it lossily. Returns `None` at EOF.
///
/// `buf` is scratch space reused across calls.
pub(crate) fn read_line_lossy<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buf);
    Ok(Some(strip_line_ending(&line).to_string()))
}

/// Strip the trailing `\n` or `\r\n`.
pub(crate) fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}
