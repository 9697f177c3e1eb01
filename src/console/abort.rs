//! Fatal termination with a diagnostic

use std::io::{self, Write};

use super::render::render_error;

/// Ends the program after reporting `messages`.
pub trait Abort {
    fn abort(&self, messages: &[String]) -> !;
}

impl<A: Abort + ?Sized> Abort for &A {
    fn abort(&self, messages: &[String]) -> ! {
        (**self).abort(messages)
    }
}

/// Prints the error block to stdout and exits with status 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAbort;

impl Abort for ConsoleAbort {
    fn abort(&self, messages: &[String]) -> ! {
        exit_with_error_message(messages)
    }
}

/// Print the error block for `messages` to stdout.
pub fn print_error<S: AsRef<str>>(messages: &[S]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(render_error(messages).as_bytes())?;
    out.flush()
}

/// Print the error block and terminate with status 1.
pub fn exit_with_error_message<S: AsRef<str>>(messages: &[S]) -> ! {
    if let Err(err) = print_error(messages) {
        // Nothing left to report to; stderr is the last resort.
        eprintln!("Error: {err}");
    }
    std::process::exit(1)
}
