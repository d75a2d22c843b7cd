//! Line splitting for template text.
//!
//! Besides `\n` and `\r\n`, a lone `\r`, vertical tab, form feed, the
//! `\x1c`..`\x1e` separators, NEL and the Unicode line and paragraph
//! separators each end a line. A trailing break does not start an empty line.

use std::iter::FusedIterator;

const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split `text` into lines without their terminators.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(end) = self.rest.find(LINE_BREAKS) else {
            return Some(std::mem::take(&mut self.rest));
        };

        let (line, tail) = self.rest.split_at(end);
        let break_len = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        self.rest = &tail[break_len..];
        Some(line)
    }
}

impl FusedIterator for SplitLines<'_> {}
