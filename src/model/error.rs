//! Error types for the viewer.
//!
//! # Error Categories
//!
//! - [`InputError`] - File/stdin reading failures (file not found, no input, IO)
//! - [`InvalidConfiguration`] - Rejected list geometry (zero row or viewport height)
//!
//! Both fold into `view::TuiError` together with terminal I/O failures.
//!
//! # Error Recovery Strategy
//!
//! Lines that are not JSON objects are **not** errors: they are kept as
//! plain-text records. A rejected resize is logged and the previous
//! geometry kept. Input and terminal errors are fatal and propagate to
//! the top-level error handler.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::view_state::window::InvalidConfiguration;

/// Errors encountered when reading input from files or stdin.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: Display error and exit (user provided invalid path)
/// - **NoInput**: Display usage help - user must provide file path or pipe stdin
/// - **Io**: Generic I/O failures (permissions, disk errors) - display and exit
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use vlist::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No file path was given and stdin is an interactive terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlist::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from input source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
