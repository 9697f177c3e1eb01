//! Finding a program that opens URLs in the default browser

use tracing::debug;

use crate::console::Abort;

/// Launcher used on Windows. `explorer` mangles `?` and `=` in URLs, `start`
/// does not.
pub const WINDOWS_LAUNCHER: &str = "start";

/// Candidates probed in order on every other OS.
pub const BROWSER_COMMANDS: [&str; 8] = [
    "xdg-open",
    "open",
    "cygstart",
    "x-www-browser",
    "firefox",
    "opera",
    "mozilla",
    "netscape",
];

/// Empty unless the package declares one.
const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");

fn report_issue_line(repository: &str) -> String {
    if repository.is_empty() {
        format!("please open an issue for {}", env!("CARGO_PKG_NAME"))
    } else {
        format!("please open an issue at {}/issues", repository.trim_end_matches('/'))
    }
}

fn missing_browser_messages() -> Vec<String> {
    vec![
        "Cannot open a browser.".to_string(),
        "If you think this is a bug,".to_string(),
        report_issue_line(REPOSITORY),
        "and mention your OS and browser.".to_string(),
    ]
}

/// The first launcher usable on `os`, given a way to tell whether a program
/// is on the search path.
pub fn find_browser_command<F>(os: &str, resolvable: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    if os == "windows" {
        return Some(WINDOWS_LAUNCHER.to_string());
    }
    let found = BROWSER_COMMANDS
        .iter()
        .copied()
        .find(|candidate| resolvable(candidate))
        .map(str::to_string);
    debug!(os, launcher = ?found, "browser command lookup");
    found
}

/// Whether `program` resolves on `PATH`.
pub fn on_path(program: &str) -> bool {
    which::which(program).is_ok()
}

/// The launcher for this machine. Aborts if there is none.
pub fn open_browser_command<A: Abort + ?Sized>(abort: &A) -> String {
    match find_browser_command(std::env::consts::OS, on_path) {
        Some(command) => command,
        None => abort.abort(&missing_browser_messages()),
    }
}
