//! Styled text for the terminal

use colored::Colorize;

use super::format::indent;

/// Blank line, bold red "Error" header, every line of every message in red
/// indented by two spaces, blank line.
pub fn render_error<S: AsRef<str>>(messages: &[S]) -> String {
    let mut rendered = String::from("\n");
    rendered.push_str(&format!("{}\n", "  Error".bold().red()));
    for message in messages {
        rendered.push_str(&format!("{}\n", indent(message.as_ref(), 1).red()));
    }
    rendered.push('\n');
    rendered
}

/// Bold underlined `label:`, the value indented one level on the next line,
/// then an empty line.
pub fn render_label_and_value(label: &str, value: &str) -> String {
    format!(
        "{}\n{}\n\n",
        format!("{label}:").bold().underline(),
        indent(value, 1)
    )
}
