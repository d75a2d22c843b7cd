//! One invocation over a list of files.

use std::{fs, io::Write, path::PathBuf};

use anyhow::{Context, Result};

use super::{ExitStatus, report::Reporter};
use crate::{config::ExclusionSet, core::scan, issues::Severity};

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Every file in the run, skipped ones included.
    pub files_total: usize,
    pub files_skipped: usize,
    pub error_count: usize,
    pub warning_count: usize,
}

impl ScanSummary {
    /// Errors fail the run; warnings alone do not.
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

/// Scan `files` in order, writing each finding (or SKIP record) as it is
/// found.
///
/// Files matched by `excludes` are skipped without being read. Any other
/// file that cannot be read aborts the run.
pub fn run_session<W: Write>(
    files: &[PathBuf],
    excludes: &ExclusionSet,
    writer: &mut W,
) -> Result<ScanSummary> {
    let reporter = Reporter::new(files);
    let mut summary = ScanSummary {
        files_total: files.len(),
        ..Default::default()
    };

    for file in files {
        if excludes.contains(file) {
            summary.files_skipped += 1;
            reporter.skipped_to(file, writer);
            continue;
        }

        let contents = fs::read_to_string(file)
            .with_context(|| format!("Failed to read file: {}", file.display()))?;
        let file_path = file.to_string_lossy();

        for finding in scan(&contents, &file_path) {
            match finding.severity() {
                Severity::Error => summary.error_count += 1,
                Severity::Warning => summary.warning_count += 1,
            }
            reporter.finding_to(&finding, writer);
        }
    }

    Ok(summary)
}
