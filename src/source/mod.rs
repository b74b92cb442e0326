//! Input sources.
//!
//! This module provides the producers of the item sequence:
//! - File loading for read-once file input
//! - Stdin for piped input (live streaming)
//! - Unified InputSource enum for both

use crate::model::error::InputError;
use crate::model::Record;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Where the records come from.
#[derive(Debug)]
enum SourceKind {
    File(FileSource),
    Stdin(StdinSource),
}

/// Unified input source.
///
/// Abstracts over file loading and stdin with a common interface and
/// numbers lines across polls.
#[derive(Debug)]
pub struct InputSource {
    kind: SourceKind,
    lines_read: usize,
}

impl InputSource {
    /// Wrap a file source.
    pub fn file(source: FileSource) -> Self {
        Self {
            kind: SourceKind::File(source),
            lines_read: 0,
        }
    }

    /// Wrap a stdin source.
    pub fn stdin(source: StdinSource) -> Self {
        Self {
            kind: SourceKind::Stdin(source),
            lines_read: 0,
        }
    }

    /// Poll for new records.
    ///
    /// Returns parsed records, not raw strings (parse at boundary).
    /// Non-blocking - returns immediately with available records.
    ///
    /// # Behavior:
    /// - File: all records on first call, empty vec after
    /// - Stdin: incremental as data arrives
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn poll(&mut self) -> Result<Vec<Record>, InputError> {
        let lines = match &mut self.kind {
            SourceKind::File(f) => f.drain_lines(),
            SourceKind::Stdin(s) => s.poll()?,
        };

        let first = self.lines_read + 1;
        self.lines_read += lines.len();
        Ok(lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| Record::parse(first + i, line))
            .collect())
    }

    /// Check if the source is still live (can receive more data).
    ///
    /// # Behavior:
    /// - File: always false (static, read-once)
    /// - Stdin: true until EOF is reached
    pub fn is_live(&self) -> bool {
        match &self.kind {
            SourceKind::File(_) => false,
            SourceKind::Stdin(s) => !s.is_complete(),
        }
    }

    /// Whether this source streams from stdin.
    pub fn is_stdin(&self) -> bool {
        matches!(self.kind, SourceKind::Stdin(_))
    }

    /// Short label for the list title: the file name, or `stdin`.
    pub fn label(&self) -> String {
        match &self.kind {
            SourceKind::File(f) => f
                .path()
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| f.path().display().to_string()),
            SourceKind::Stdin(_) => "stdin".to_string(),
        }
    }

    /// Total lines handed out so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource (loads on construction)
/// 2. Else: use StdinSource (fails if stdin is a terminal)
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is not piped.
/// Returns `InputError::FileNotFound` if file does not exist.
/// Returns `InputError::Io` for I/O errors during file reading.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::file(FileSource::new(path)?)),
        None => Ok(InputSource::stdin(StdinSource::new()?)),
    }
}
