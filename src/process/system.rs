//! Runner backed by real child processes

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use tracing::debug;

use super::{CommandLine, Execution, RunError, Runner};

/// Spawns each command as a child process and waits for it.
///
/// Standard output and standard error share one pipe, so the captured text
/// keeps the order in which the child wrote to them. Standard input is
/// closed.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    current_dir: Option<PathBuf>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every command from `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: Some(dir.into()),
        }
    }

    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    fn spawn(&self, command: &CommandLine) -> io::Result<(Child, io::PipeReader)> {
        let (reader, writer) = io::pipe()?;

        // The Command holds the write ends; it must be dropped before reading
        // or the read never sees EOF.
        let mut process = Command::new(command.program());
        process
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);
        if let Some(dir) = &self.current_dir {
            process.current_dir(dir);
        }
        let child = process.spawn()?;
        drop(process);

        Ok((child, reader))
    }
}

impl Runner for SystemRunner {
    fn run(&self, command: &CommandLine) -> Execution {
        let joined = command.to_string();
        debug!(command = %joined, "running command");

        let (mut child, mut reader) = match self.spawn(command) {
            Ok(spawned) => spawned,
            Err(source) => {
                debug!(command = %joined, error = %source, "command failed to start");
                return Execution::captured(
                    "",
                    Err(RunError::Spawn {
                        command: joined,
                        source,
                    }),
                );
            }
        };

        let mut raw = Vec::new();
        let read = reader.read_to_end(&mut raw);
        let status = child.wait();
        let text = String::from_utf8_lossy(&raw);

        let outcome = match (read, status) {
            (Err(source), _) | (_, Err(source)) => Err(RunError::Capture {
                command: joined.clone(),
                source,
            }),
            (Ok(_), Ok(status)) if status.success() => Ok(()),
            (Ok(_), Ok(status)) => Err(RunError::Exit {
                command: joined.clone(),
                code: status.code(),
            }),
        };

        debug!(
            command = %joined,
            success = outcome.is_ok(),
            bytes = raw.len(),
            "command finished"
        );
        Execution::captured(&text, outcome)
    }
}
