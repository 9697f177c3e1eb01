//! Plain text formatting helpers

/// Prefix every line of `message` with `level` two-space units.
pub fn indent(message: &str, level: usize) -> String {
    let prefix = "  ".repeat(level);
    format!("{prefix}{}", message.replace('\n', &format!("\n{prefix}")))
}

/// `count` followed by `word`, pluralized unless `count` is exactly "1".
///
/// Words ending in a sibilant take "es" ("branches"), everything else
/// takes "s" ("commits").
pub fn pluralize(count: &str, word: &str) -> String {
    if count == "1" {
        return format!("{count} {word}");
    }
    let suffix = if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|ending| word.ends_with(ending))
    {
        "es"
    } else {
        "s"
    };
    format!("{count} {word}{suffix}")
}
