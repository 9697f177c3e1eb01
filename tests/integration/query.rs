//! Output queries over real commands

use strand::{sequence_without, Executor, SystemRunner};

use super::helpers::{sh, PanicAbort};

fn executor() -> Executor<SystemRunner, PanicAbort> {
    Executor::new(SystemRunner::new(), PanicAbort)
}

#[test]
fn test_output_contains_line_whole_lines_only() {
    let command = sh("printf 'foo\\nfoobar\\n'");
    assert!(executor().output_contains_line(&command, "foo"));
    assert!(!executor().output_contains_line(&command, "foob"));
}

#[test]
fn test_output_contains_substring() {
    let command = sh("echo 'origin/main'");
    assert!(executor().output_contains(&command, "main"));
    assert!(executor().output_contains(&command, ""));
    assert!(!executor().output_contains(&command, "develop"));
}

#[test]
fn test_empty_output_has_empty_line() {
    assert!(executor().output_contains_line(&sh("true"), ""));
}

#[test]
#[should_panic(expected = "Command: sh -c echo nope; exit 3")]
fn test_query_aborts_when_command_fails() {
    executor().output_contains(&sh("echo nope; exit 3"), "nope");
}

#[test]
fn test_succeeds_tolerates_missing_program() {
    let missing = strand::CommandLine::new("definitely-not-a-real-program-4c1f", ["--version"]);
    assert!(!executor().succeeds(&missing));
    assert!(executor().succeeds(&sh("true")));
}

#[test]
fn test_lines_without_current_branch() {
    let output = executor().run_require_output(&sh("printf 'main\\nfeature\\nmain\\nhotfix\\n'"));
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(sequence_without(&lines, "main"), vec!["feature", "hotfix"]);
}
