//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Find user-facing strings in HTML templates that are not wrapped in an
/// i18n call.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Template files to check (default: every *.html under the default directories)
    pub files: Vec<PathBuf>,

    /// Also check files on the exclusion list instead of skipping them
    #[arg(long = "no-skip-excluded", action = clap::ArgAction::SetFalse)]
    pub skip_excluded: bool,

    /// Config file path (default: .i18n-detect.json in this or a parent directory)
    #[arg(long, env = "I18N_DETECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write a default .i18n-detect.json to the current directory and exit
    #[arg(long, conflicts_with_all = ["files", "config"])]
    pub init: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
