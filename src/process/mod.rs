//! Process runner
//!
//! Runs one external command to completion and reports its combined output
//! together with a success/failure outcome. Two layers:
//! - [`Runner::run`] never fails on its own: spawn errors and non-zero exits
//!   come back inside the [`Execution`]
//! - [`require_success`] turns a failed [`Execution`] into a fatal abort, for
//!   call sites that have no recovery path

mod command;
mod execution;
mod system;

pub use command::{CommandLine, EmptyCommandError};
pub use execution::{Execution, Outcome, RunError};
pub use system::SystemRunner;

use tracing::debug;

use crate::console::Abort;

/// Something that can run a command and hand back what it printed.
pub trait Runner {
    fn run(&self, command: &CommandLine) -> Execution;
}

impl<R: Runner + ?Sized> Runner for &R {
    fn run(&self, command: &CommandLine) -> Execution {
        (**self).run(command)
    }
}

/// Return the captured text of a successful execution, abort otherwise.
///
/// The diagnostic names the command, the output captured so far and the
/// underlying cause.
pub fn require_success<A: Abort + ?Sized>(
    command: &CommandLine,
    execution: Execution,
    abort: &A,
) -> String {
    let (output, outcome) = execution.into_parts();
    match outcome {
        Ok(()) => output,
        Err(cause) => {
            debug!(command = %command, error = %cause, "required command failed");
            abort.abort(&[
                format!("Command: {command}"),
                format!("Output: {output}"),
                cause.to_string(),
            ])
        }
    }
}

/// Pairs a [`Runner`] with the [`Abort`] used by its fatal operations.
///
/// # Example
/// ```ignore
/// use strand::console::ConsoleAbort;
/// use strand::process::{CommandLine, Executor, SystemRunner};
///
/// let executor = Executor::new(SystemRunner::new(), ConsoleAbort);
/// let branch = executor.run_require_output(&CommandLine::new(
///     "git",
///     ["rev-parse", "--abbrev-ref", "HEAD"],
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct Executor<R, A> {
    runner: R,
    abort: A,
}

impl<R: Runner, A: Abort> Executor<R, A> {
    pub fn new(runner: R, abort: A) -> Self {
        Self { runner, abort }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run `command` and report output and outcome. Never aborts.
    pub fn run_capturing_output(&self, command: &CommandLine) -> Execution {
        self.runner.run(command)
    }

    /// Run `command` and return its output. Aborts if it fails.
    pub fn run_require_output(&self, command: &CommandLine) -> String {
        let execution = self.runner.run(command);
        require_success(command, execution, &self.abort)
    }
}
