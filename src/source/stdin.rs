//! Stdin-based source for piped input.
//!
//! A background thread reads lines and forwards them over a channel so
//! that `poll` never blocks the TUI event loop.

use super::file::read_line_lossy;
use crate::model::error::InputError;
use std::io::{BufReader, IsTerminal, Read};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, warn};

/// Messages from the reader thread.
#[derive(Debug)]
enum ReaderEvent {
    Line(String),
    Error(std::io::Error),
}

/// Stdin source for piped input.
///
/// Supports both streaming mode (data arriving incrementally, like
/// `tail -f products.jsonl | vlist`) and complete mode (EOF reached).
#[derive(Debug)]
pub struct StdinSource {
    rx: Receiver<ReaderEvent>,
    complete: bool,
    /// Read error held back until the lines before it have been handed out.
    pending_error: Option<std::io::Error>,
}

impl StdinSource {
    /// Create a new StdinSource reading the process stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
    /// This prevents the TUI from waiting on keyboard input that was meant
    /// to be piped data.
    pub fn new() -> Result<Self, InputError> {
        if std::io::stdin().is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(std::io::stdin()))
    }

    /// Create a StdinSource from any reader.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut reader = BufReader::new(reader);
            let mut buf = Vec::new();
            loop {
                let event = match read_line_lossy(&mut reader, &mut buf) {
                    Ok(Some(line)) => ReaderEvent::Line(line),
                    Ok(None) => break,
                    Err(e) => ReaderEvent::Error(e),
                };
                let is_error = matches!(event, ReaderEvent::Error(_));
                if tx.send(event).is_err() || is_error {
                    break;
                }
            }
            debug!("stdin reader finished");
        });
        Self {
            rx,
            complete: false,
            pending_error: None,
        }
    }

    /// Drain every line that has arrived so far. Never blocks.
    ///
    /// Sets the `complete` flag once the reader thread has hung up.
    /// Lines that arrived before a read error are returned first; the
    /// error itself is reported by the next poll.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if reading failed; the source is complete afterwards.
    pub fn poll(&mut self) -> Result<Vec<String>, InputError> {
        if let Some(e) = self.pending_error.take() {
            return Err(InputError::Io(e));
        }
        let mut lines = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(ReaderEvent::Line(line)) => lines.push(line),
                Ok(ReaderEvent::Error(e)) => {
                    warn!(error = %e, lines = lines.len(), "stdin read failed");
                    self.complete = true;
                    if lines.is_empty() {
                        return Err(InputError::Io(e));
                    }
                    self.pending_error = Some(e);
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.complete = true;
                    break;
                }
            }
        }
        Ok(lines)
    }

    /// Check if EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
