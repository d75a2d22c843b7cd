//! Finding types produced by the detector.
//!
//! These are plain data: the reporter in `cli::report` decides how each
//! severity is rendered.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// Which of the four ordered cases produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    /// Bare text directly inside an element.
    ElementMissing,
    /// Element content using the `$("...")` bypass idiom.
    ElementBypassed,
    /// `title`/`placeholder`/`alt` with a bare literal value.
    AttributeMissing,
    /// `title`/`placeholder`/`alt` using the bypass idiom.
    AttributeBypassed,
}

impl Rule {
    pub fn severity(self) -> Severity {
        match self {
            Rule::ElementMissing | Rule::AttributeMissing => Severity::Error,
            Rule::ElementBypassed | Rule::AttributeBypassed => Severity::Warning,
        }
    }
}

/// A single offending line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based character column of the flagged content.
    pub col: usize,
    pub rule: Rule,
    /// The line from the start of the matching tag to the end of the line.
    pub fragment: String,
}

impl Finding {
    pub fn new(file_path: &str, line: usize, col: usize, rule: Rule, fragment: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            col,
            rule,
            fragment: fragment.to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.rule.severity()
    }

    /// `path:line:col`, the clickable location used in reports.
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.file_path, self.line, self.col)
    }
}
