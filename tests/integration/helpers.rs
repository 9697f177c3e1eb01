//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};
use strand::console::Abort;
use strand::CommandLine;

/// Turns fatal aborts into panics so tests can observe them.
pub struct PanicAbort;

impl Abort for PanicAbort {
    fn abort(&self, messages: &[String]) -> ! {
        panic!("{}", messages.join("\n"))
    }
}

pub fn sh(script: &str) -> CommandLine {
    CommandLine::new("sh", ["-c", script])
}

/// Run the `strand` binary with colors off.
pub fn strand(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_strand"))
        .args(args)
        .current_dir(dir)
        .env("STRAND_COLOR", "never")
        .env_remove("STRAND_LOG")
        .output()
        .expect("Failed to run strand binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
