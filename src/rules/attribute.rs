//! User-facing attribute values: `title`, `placeholder` and `alt`.

use super::RuleMatch;
use crate::core::{
    patterns::PATTERNS,
    tags::{OpeningTag, opening_tags},
};

/// A quoted literal value that is not a translation call, an escaped
/// literal, or made only of punctuation, variables and URLs. The tag must be
/// closed later on the line.
pub fn missing(line: &str) -> Option<RuleMatch> {
    opening_tags(line).find_map(|tag| {
        attribute_values(tag).find_map(|value| {
            let quote = line[value..].chars().next()?;
            let ignore = PATTERNS.quoted_ignore(quote)?;
            let content = value + quote.len_utf8();
            let rest = &line[content..];
            (!ignore.is_match(rest) && rest.contains('>')).then_some(RuleMatch {
                start: tag.start,
                content,
            })
        })
    })
}

/// A value written with the `$("...")` bypass idiom.
pub fn bypassed(line: &str) -> Option<RuleMatch> {
    opening_tags(line).find_map(|tag| {
        attribute_values(tag)
            .find(|&value| PATTERNS.bypass.is_match(&line[value..]))
            .map(|content| RuleMatch {
                start: tag.start,
                content,
            })
    })
}

/// Byte offsets right after each `title=`, `placeholder=` or `alt=` inside
/// the tag.
fn attribute_values(tag: OpeningTag<'_>) -> impl Iterator<Item = usize> + '_ {
    let (offset, region) = tag.attribute_region();
    PATTERNS
        .attribute
        .find_iter(region)
        .map(move |m| offset + m.end())
}
