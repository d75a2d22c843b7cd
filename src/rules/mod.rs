//! The ordered rule chain.
//!
//! Each rule is a pure function of one line that returns the leftmost
//! matching tag, or `None`. Rules are evaluated in [`ORDERED_RULES`] order
//! and the first hit governs the line; later rules are not consulted.
//!
//! ## Module Structure
//!
//! - `element`: bare or bypassed text right after an opening tag
//! - `attribute`: bare or bypassed `title`/`placeholder`/`alt` values

pub mod attribute;
pub mod element;

use crate::issues::Rule;

/// Evaluation order. Element rules come before attribute rules, and within
/// each target the missing case comes before the bypassed one.
pub const ORDERED_RULES: [Rule; 4] = [
    Rule::ElementMissing,
    Rule::ElementBypassed,
    Rule::AttributeMissing,
    Rule::AttributeBypassed,
];

/// Where a rule matched, as byte offsets into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    /// The `<` that opens the matching tag.
    pub start: usize,
    /// The first byte of the flagged content.
    pub content: usize,
}

impl Rule {
    /// Run this rule against a single line.
    pub fn find(self, line: &str) -> Option<RuleMatch> {
        match self {
            Rule::ElementMissing => element::missing(line),
            Rule::ElementBypassed => element::bypassed(line),
            Rule::AttributeMissing => attribute::missing(line),
            Rule::AttributeBypassed => attribute::bypassed(line),
        }
    }
}

/// The first rule in [`ORDERED_RULES`] that matches `line`.
pub fn first_match(line: &str) -> Option<(Rule, RuleMatch)> {
    ORDERED_RULES
        .iter()
        .find_map(|&rule| rule.find(line).map(|m| (rule, m)))
}
