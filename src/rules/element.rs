//! Text placed directly after an opening tag.

use super::RuleMatch;
use crate::core::{patterns::PATTERNS, tags::opening_tags};

/// An opening tag followed by content that is not a translation call, an
/// escaped literal, or a run of punctuation, entities, variables and URLs.
pub fn missing(line: &str) -> Option<RuleMatch> {
    first_tag_followed_by(line, |rest| !PATTERNS.element_ignore.is_match(rest))
}

/// An opening tag followed by `$("` or `$('`.
pub fn bypassed(line: &str) -> Option<RuleMatch> {
    first_tag_followed_by(line, |rest| PATTERNS.bypass.is_match(rest))
}

fn first_tag_followed_by(line: &str, accept: impl Fn(&str) -> bool) -> Option<RuleMatch> {
    opening_tags(line).find_map(|tag| {
        tag.ends()
            .find(|&end| accept(&line[end..]))
            .map(|content| RuleMatch {
                start: tag.start,
                content,
            })
    })
}
