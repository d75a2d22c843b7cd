//! Per-file detection.
//!
//! [`scan`] walks a file line by line, runs the ordered rule chain on each
//! line and applies the suppression passes to the first hit. It never reads
//! or writes anything itself, so scanning the same text twice yields the
//! same findings in the same order.

mod lines;

use std::iter::{Enumerate, FusedIterator};

use self::lines::{SplitLines, split_lines};
use crate::{directives, issues::Finding, rules::first_match};

/// Markers that, anywhere before the matching tag, mean the line is inside a
/// comment or a `$:` expression rather than literal markup.
const SUPPRESSING_MARKERS: &[&str] = &["<!--", "$:"];

/// Scan `contents` lazily. Each line yields at most one finding.
pub fn scan<'a>(contents: &'a str, file_path: &'a str) -> Findings<'a> {
    Findings {
        file_path,
        lines: split_lines(contents).enumerate(),
        previous: None,
    }
}

/// Iterator returned by [`scan`].
#[derive(Debug, Clone)]
pub struct Findings<'a> {
    file_path: &'a str,
    lines: Enumerate<SplitLines<'a>>,
    previous: Option<&'a str>,
}

impl Iterator for Findings<'_> {
    type Item = Finding;

    fn next(&mut self) -> Option<Finding> {
        for (index, line) in self.lines.by_ref() {
            let previous = self.previous.replace(line);
            if let Some(finding) = check_line(self.file_path, index + 1, line, previous) {
                return Some(finding);
            }
        }
        None
    }
}

impl FusedIterator for Findings<'_> {}

/// Decide a single line given the line before it (`None` for the first line).
pub fn check_line(
    file_path: &str,
    line_number: usize,
    line: &str,
    previous: Option<&str>,
) -> Option<Finding> {
    let (rule, hit) = first_match(line)?;

    let preceding = &line[..hit.start];
    if SUPPRESSING_MARKERS
        .iter()
        .any(|marker| preceding.contains(marker))
    {
        return None;
    }

    let fragment = &line[hit.start..];
    if directives::skips_line(fragment) {
        return None;
    }

    if previous.is_some_and(directives::skips_next_line) {
        return None;
    }

    // Columns count characters, not bytes.
    let col = line[..hit.content].chars().count() + 1;
    Some(Finding::new(file_path, line_number, col, rule, fragment))
}
