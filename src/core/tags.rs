//! Opening-tag candidates.
//!
//! An opening tag is `<`, a lowercase ASCII letter, any run of non-`>`
//! characters, then a closing character that is not `/`, `-` or whitespace
//! followed by `>`. Tags named `code`, `link` and comments (`<!--`) never
//! count.
//!
//! The run before the closing character cannot contain `>`, so the closing
//! character is either the one right before the first `>` or the first `>`
//! itself (when it is directly followed by another `>`). A tag therefore has
//! at most two possible ends; [`OpeningTag::ends`] yields them shortest first.

const EXCLUDED_NAMES: &[&str] = &["code", "link", "!--"];

/// A `<` that can start an opening tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningTag<'a> {
    line: &'a str,
    /// Byte offset of `<`.
    pub start: usize,
    /// Byte offset of the first `>` after the tag name's first letter.
    close: Option<usize>,
}

impl<'a> OpeningTag<'a> {
    /// Byte offsets just past each possible end of the tag, shortest first.
    pub fn ends(self) -> impl Iterator<Item = usize> + 'a {
        let line = self.line;
        let body_start = self.start + 2;

        let before_close = self.close.and_then(|close| {
            let (offset, c) = line[..close].char_indices().next_back()?;
            let closes = offset >= body_start && c != '/' && c != '-' && !c.is_whitespace();
            closes.then_some(close + 1)
        });
        let doubled_close = self
            .close
            .filter(|&close| line[close + 1..].starts_with('>'))
            .map(|close| close + 2);

        before_close.into_iter().chain(doubled_close)
    }

    /// The part of the tag where attributes may appear: from after the first
    /// letter of the name up to the first `>` (or the end of the line).
    pub fn attribute_region(self) -> (usize, &'a str) {
        let body_start = self.start + 2;
        let end = self.close.unwrap_or(self.line.len());
        (body_start, &self.line[body_start..end])
    }
}

/// Every possible opening tag in `line`, left to right.
pub fn opening_tags(line: &str) -> impl Iterator<Item = OpeningTag<'_>> {
    line.match_indices('<').filter_map(move |(start, _)| {
        let rest = &line[start + 1..];
        if EXCLUDED_NAMES.iter().any(|name| rest.starts_with(name)) {
            return None;
        }
        if !rest.starts_with(|c: char| c.is_ascii_lowercase()) {
            return None;
        }
        let body_start = start + 2;
        let close = line[body_start..].find('>').map(|i| body_start + i);
        Some(OpeningTag { line, start, close })
    })
}
