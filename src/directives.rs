//! Skip directives written in templates.
//!
//! - `$# detect-missing-i18n-skip-line` anywhere after the flagged tag skips
//!   that line (a `$#` template comment at the end of the line).
//! - A line starting with `# detect-missing-i18n-skip-line` (optionally
//!   indented, optionally prefixed by `$`) skips the line after it.

pub const SKIP_DIRECTIVE: &str = "# detect-missing-i18n-skip-line";

/// Whether `fragment` (the line from the flagged tag onwards) carries an
/// inline `$#` skip directive.
pub fn skips_line(fragment: &str) -> bool {
    fragment
        .match_indices(SKIP_DIRECTIVE)
        .any(|(i, _)| fragment[..i].ends_with('$'))
}

/// Whether `line` starts with a skip directive, which silences the line that
/// follows it.
pub fn skips_next_line(line: &str) -> bool {
    let text = line.trim_start();
    let text = text.strip_prefix('$').unwrap_or(text);
    text.starts_with(SKIP_DIRECTIVE)
}
