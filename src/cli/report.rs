//! Report formatting and printing utilities.
//!
//! Every record is one tab-separated line: a four-letter tag, the underlined
//! `path:line:col` padded to a common width, and the offending fragment.
//! Separate from the detector so it can be used as a library without
//! printing side effects.

use std::{
    fmt,
    io::Write,
    path::Path,
};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::session::ScanSummary;
use crate::issues::{Finding, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Room reserved after the longest path for `:line:col`.
const LOCATION_SUFFIX: &str = ":XXX:XXX";

/// Extra blank columns between the location and the fragment.
const LOCATION_GAP: usize = 4;

/// Tag printed at the start of each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Error,
    Warning,
    Skip,
}

impl Tag {
    fn colored(self) -> ColoredString {
        let text = self.to_string();
        match self {
            Tag::Error => text.bright_red(),
            Tag::Warning => text.bright_yellow(),
            Tag::Skip => text.bright_blue(),
        }
    }
}

impl From<Severity> for Tag {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Tag::Error,
            Severity::Warning => Tag::Warning,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Error => write!(f, "ERRO"),
            Tag::Warning => write!(f, "WARN"),
            Tag::Skip => write!(f, "SKIP"),
        }
    }
}

/// Prints findings and skipped files with locations aligned across a run.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    location_width: usize,
}

impl Reporter {
    /// Align locations to the longest of `files`.
    pub fn new<P: AsRef<Path>>(files: &[P]) -> Self {
        let longest = files
            .iter()
            .map(|f| UnicodeWidthStr::width(f.as_ref().to_string_lossy().as_ref()))
            .max()
            .unwrap_or(0);
        Self {
            location_width: longest + LOCATION_SUFFIX.len() + LOCATION_GAP,
        }
    }

    pub fn finding_to<W: Write>(&self, finding: &Finding, writer: &mut W) {
        let _ = writeln!(
            writer,
            "{}\t{}\t{}",
            Tag::from(finding.severity()).colored(),
            self.location(&finding.location()),
            finding.fragment
        );
    }

    pub fn skipped_to<W: Write>(&self, path: &Path, writer: &mut W) {
        let _ = writeln!(
            writer,
            "{}\t{}",
            Tag::Skip.colored(),
            path.to_string_lossy().underline()
        );
    }

    fn location(&self, location: &str) -> String {
        let padding = self
            .location_width
            .saturating_sub(UnicodeWidthStr::width(location));
        format!("{}{:padding$}", location.underline(), "", padding = padding)
    }
}

/// `N files scanned. M errors found.`
pub fn format_summary(summary: &ScanSummary) -> String {
    format!(
        "{} {} scanned. {} {} found.",
        summary.files_total,
        if summary.files_total == 1 { "file" } else { "files" },
        summary.error_count,
        if summary.error_count == 1 { "error" } else { "errors" }
    )
}

/// Print the summary line, followed by a pointer to the documentation when
/// anything was reported.
pub fn print_summary_to<W: Write>(summary: &ScanSummary, docs_url: &str, writer: &mut W) {
    let _ = writeln!(writer, "{}", format_summary(summary));
    if summary.error_count > 0 || summary.warning_count > 0 {
        let _ = writeln!(
            writer,
            "Learn how to fix these errors by reading our i18n documentation: {}",
            docs_url
        );
    }
}

/// Print a confirmation after `--init` wrote a config file.
pub fn print_init_success_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", path.display()).green()
    );
}
