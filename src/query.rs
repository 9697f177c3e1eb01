//! Questions about a command's output
//!
//! `output_contains` and `output_contains_line` go through the fatal path:
//! they are meant for commands that must succeed. Use
//! [`Executor::succeeds`] to probe something that may legitimately fail.

use crate::console::Abort;
use crate::process::{CommandLine, Executor, Runner};

impl<R: Runner, A: Abort> Executor<R, A> {
    /// Whether `target` occurs anywhere in the command's output.
    pub fn output_contains(&self, command: &CommandLine, target: &str) -> bool {
        self.run_require_output(command).contains(target)
    }

    /// Whether some line of the command's output is exactly `target`.
    pub fn output_contains_line(&self, command: &CommandLine, target: &str) -> bool {
        let output = self.run_require_output(command);
        let lines: Vec<&str> = output.split('\n').collect();
        sequence_contains(&lines, target)
    }

    /// Whether the command ran and exited successfully. Never aborts.
    pub fn succeeds(&self, command: &CommandLine) -> bool {
        self.run_capturing_output(command).is_success()
    }
}

/// Whether any element equals `target` exactly.
pub fn sequence_contains<S: AsRef<str>>(sequence: &[S], target: &str) -> bool {
    sequence.iter().any(|element| element.as_ref() == target)
}

/// A copy of `sequence` without the elements equal to `target`.
pub fn sequence_without<S: AsRef<str> + Clone>(sequence: &[S], target: &str) -> Vec<S> {
    sequence
        .iter()
        .filter(|element| element.as_ref() != target)
        .cloned()
        .collect()
}
