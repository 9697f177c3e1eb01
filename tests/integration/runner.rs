//! SystemRunner against real child processes

use std::fs;
use strand::{CommandLine, Runner, SystemRunner};
use tempfile::TempDir;

use super::helpers::sh;

#[test]
fn test_success_without_output() {
    let execution = SystemRunner::new().run(&sh("exit 0"));
    assert_eq!(execution.output(), "");
    assert!(execution.is_success());
}

#[test]
fn test_failure_with_stdout_output() {
    let execution = SystemRunner::new().run(&sh("printf 'hello\\n'; exit 2"));
    let (output, outcome) = execution.into_parts();
    assert_eq!(output, "hello");
    let cause = outcome.unwrap_err();
    assert_eq!(cause.exit_code(), Some(2));
    assert!(!cause.is_spawn_failure());
}

#[test]
fn test_failure_with_stderr_output() {
    let execution = SystemRunner::new().run(&sh("echo 'bad revision' >&2; exit 128"));
    assert_eq!(execution.output(), "bad revision");
    assert!(!execution.is_success());
}

#[test]
fn test_combined_output_is_trimmed_once() {
    let execution = SystemRunner::new().run(&sh("printf '\\n\\n  a\\n  b  \\n\\n'"));
    assert_eq!(execution.output(), "a\n  b");
}

#[test]
fn test_large_output_is_fully_read() {
    let script = "i=0; while [ $i -lt 20000 ]; do echo line$i; i=$((i+1)); done";
    let execution = SystemRunner::new().run(&sh(script));
    let lines: Vec<&str> = execution.output().lines().collect();
    assert_eq!(lines.len(), 20000);
    assert_eq!(lines.last(), Some(&"line19999"));
}

#[test]
fn test_stdin_is_closed() {
    // `cat` would block forever on an inherited terminal.
    let execution = SystemRunner::new().run(&CommandLine::new("cat", Vec::<String>::new()));
    assert_eq!(execution.output(), "");
    assert!(execution.is_success());
}

#[test]
fn test_runs_in_given_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("marker.txt"), "").unwrap();

    let runner = SystemRunner::in_dir(temp.path());
    let execution = runner.run(&CommandLine::new("ls", Vec::<String>::new()));
    assert_eq!(execution.output(), "marker.txt");
}

#[test]
fn test_missing_directory_is_spawn_failure() {
    let temp = TempDir::new().unwrap();
    let runner = SystemRunner::in_dir(temp.path().join("gone"));
    let (_, outcome) = runner.run(&sh("true")).into_parts();
    assert!(outcome.unwrap_err().is_spawn_failure());
}
