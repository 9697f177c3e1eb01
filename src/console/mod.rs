//! Console output and input
//!
//! Error blocks, label/value blocks, indentation and pluralization, the
//! [`Abort`] capability used by every fatal path, and the [`InputReader`]
//! for interactive answers.

mod abort;
mod format;
mod input;
mod render;

pub use abort::{exit_with_error_message, print_error, Abort, ConsoleAbort};
pub use format::{indent, pluralize};
pub use input::{InputError, InputReader};
pub use render::{render_error, render_label_and_value};

use std::io::{self, Stdout, Write};

/// Writes styled blocks to an output stream. Write failures abort.
pub struct Console<W, A> {
    out: W,
    abort: A,
}

impl<A: Abort> Console<Stdout, A> {
    pub fn stdout(abort: A) -> Self {
        Self::new(io::stdout(), abort)
    }
}

impl<W: Write, A: Abort> Console<W, A> {
    pub fn new(out: W, abort: A) -> Self {
        Self { out, abort }
    }

    pub fn print_line(&mut self, text: &str) {
        self.write(&format!("{text}\n"));
    }

    pub fn print_label_and_value(&mut self, label: &str, value: &str) {
        self.write(&render_label_and_value(label, value));
    }

    pub fn print_error<S: AsRef<str>>(&mut self, messages: &[S]) {
        self.write(&render_error(messages));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            self.abort
                .abort(&[format!("Failed to write to the console: {err}")]);
        }
    }
}
