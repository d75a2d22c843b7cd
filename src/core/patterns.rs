//! Named sub-patterns and the compiled pattern set.
//!
//! The `regex` crate has no look-around, so every "not followed by" condition
//! is compiled as a pattern anchored with `^` and tested against the text
//! that follows a candidate position. Tag shape is scanned in `core::tags`.

use std::sync::LazyLock;

use regex::Regex;

/// A single punctuation, digit or whitespace character that carries no
/// translatable meaning on its own.
pub const PUNCTUATION: &str = r#"[(){}\[\]/\\:;\-_\s+=*^%#.•·?♥|≡0-9,!xX✓×@"'†★]"#;

pub const HTML_ENTITY: &str = r"&[a-z0-9]+;";

/// `$var`, `$:var`, `$call(args)`, `$var[idx]`, `${expr}`, `%(name)s`, `{{expr}}`.
pub const VARIABLE: &str = concat!(
    r"\$:?\S+",
    r"|\$[^\s(]+\([^)]+\)",
    r"|\$[^\s\[]+\[[^\]]+\]",
    r"|\$\{[^}]+\}",
    r"|%\(?[a-z_]+\)?",
    r"|\{\{[^}]+\}\}",
);

pub const URL_OR_DOMAIN: &str = r"https?://\S+|[a-z\-]+\.[A-Za-z]{2}[a-z]?";

/// `$_(`, `$:_(`, `$(`, `$:(`, and `$ungettext(` / `$:ungettext(`.
pub const TRANSLATION_CALL: &str = r"\$:?_?\(|\$:?ungettext\(";

/// `\$$`, an escaped dollar sign.
pub const ESCAPED_LITERAL: &str = r"\\\$\$";

/// `$("` or `$('`: raw output that sidesteps translation.
pub const BYPASS_CALL: &str = r#"\$\(['"]"#;

/// Compiled patterns shared by every scan.
pub struct PatternSet {
    /// Content after an opening tag that is not translatable text.
    pub element_ignore: Regex,
    /// Content after an opening tag that uses the bypass idiom.
    pub bypass: Regex,
    /// Attribute names whose values are shown to users.
    pub attribute: Regex,
    /// Double-quoted attribute value (after the quote) that needs no translation.
    pub double_quoted_ignore: Regex,
    /// Single-quoted attribute value (after the quote) that needs no translation.
    pub single_quoted_ignore: Regex,
}

impl PatternSet {
    fn new() -> Self {
        let element_ignore = format!(
            r"^(?:[<\r\n]|$|{ESCAPED_LITERAL}|{TRANSLATION_CALL}|(?:{PUNCTUATION}|{HTML_ENTITY}|{VARIABLE}|{URL_OR_DOMAIN})+(?:[\r\n<]|$))"
        );

        Self {
            element_ignore: compile(&element_ignore),
            bypass: compile(&format!("^{BYPASS_CALL}")),
            attribute: compile(r"(?:title|placeholder|alt)="),
            double_quoted_ignore: compile(&quoted_value_ignore('"')),
            single_quoted_ignore: compile(&quoted_value_ignore('\'')),
        }
    }

    /// The "needs no translation" pattern for a value opened by `quote`.
    pub fn quoted_ignore(&self, quote: char) -> Option<&Regex> {
        match quote {
            '"' => Some(&self.double_quoted_ignore),
            '\'' => Some(&self.single_quoted_ignore),
            _ => None,
        }
    }
}

fn quoted_value_ignore(quote: char) -> String {
    format!(
        r"^(?:{TRANSLATION_CALL}|{ESCAPED_LITERAL}|(?:{PUNCTUATION}|{VARIABLE}|{URL_OR_DOMAIN})*{quote})"
    )
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

pub static PATTERNS: LazyLock<PatternSet> = LazyLock::new(PatternSet::new);
