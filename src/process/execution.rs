//! Captured output and outcome of one command run

use std::io;
use thiserror::Error;

/// Why a command did not succeed.
///
/// Callers that only care about success can treat every variant the same;
/// the variants exist so that "could not start" and "ran and failed" stay
/// distinguishable when it matters.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to execute: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to capture output of {command}: {source}")]
    Capture {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} exited with {}", describe_exit(.code))]
    Exit { command: String, code: Option<i32> },
}

impl RunError {
    /// Exit code of a command that ran to completion, if it had one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunError::Exit { code, .. } => *code,
            RunError::Spawn { .. } | RunError::Capture { .. } => None,
        }
    }

    pub fn is_spawn_failure(&self) -> bool {
        matches!(self, RunError::Spawn { .. })
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by a signal)".to_string(),
    }
}

pub type Outcome = Result<(), RunError>;

/// Combined stdout/stderr text of a finished command plus its outcome.
#[derive(Debug)]
pub struct Execution {
    output: String,
    outcome: Outcome,
}

impl Execution {
    /// Build from raw captured text. Surrounding whitespace is trimmed here
    /// and nowhere else.
    pub fn captured(raw: &str, outcome: Outcome) -> Self {
        Self {
            output: raw.trim().to_string(),
            outcome,
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn into_parts(self) -> (String, Outcome) {
        (self.output, self.outcome)
    }
}
