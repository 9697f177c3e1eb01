//! Reading answers from the user

use std::io::{self, BufRead, StdinLock};
use thiserror::Error;

use super::Abort;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Read(#[from] io::Error),

    #[error("Input stream closed")]
    Closed,
}

/// Line reader over a buffered input stream.
///
/// Create one per process and pass it to whatever needs console input;
/// buffered bytes past the current line stay with the reader.
pub struct InputReader<R> {
    reader: R,
}

impl InputReader<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read one line, trimmed of surrounding whitespace.
    ///
    /// A stream that is already at its end yields [`InputError::Closed`]; a
    /// last line without a trailing newline is still returned.
    pub fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Like [`read_line`](Self::read_line), aborting when nothing can be read.
    pub fn get_user_input<A: Abort + ?Sized>(&mut self, abort: &A) -> String {
        match self.read_line() {
            Ok(line) => line,
            Err(err) => abort.abort(&["Error getting user input".to_string(), err.to_string()]),
        }
    }
}
