//! Test doubles shared by unit tests

use std::cell::RefCell;

use crate::console::Abort;
use crate::process::{CommandLine, Execution, RunError, Runner};

/// Aborts by panicking with the message lines joined by newlines.
pub struct PanicAbort;

impl Abort for PanicAbort {
    fn abort(&self, messages: &[String]) -> ! {
        panic!("{}", messages.join("\n"))
    }
}

/// Returns the same scripted output for every command and records calls.
pub struct ScriptedRunner {
    output: String,
    exit_code: Option<i32>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn succeeding(output: &str) -> Self {
        Self {
            output: output.to_string(),
            exit_code: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(output: &str, exit_code: i32) -> Self {
        Self {
            exit_code: Some(exit_code),
            ..Self::succeeding(output)
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, command: &CommandLine) -> Execution {
        self.calls.borrow_mut().push(command.to_string());
        let outcome = match self.exit_code {
            None => Ok(()),
            Some(code) => Err(RunError::Exit {
                command: command.to_string(),
                code: Some(code),
            }),
        };
        Execution::captured(&self.output, outcome)
    }
}
