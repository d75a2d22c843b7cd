use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

const TEMPLATE_EXTENSION: &str = "html";

/// Result of expanding the default directories.
pub struct ScanResult {
    /// Template files, in directory order and sorted by name within each.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed while walking.
    pub skipped_count: usize,
}

/// Collect every `*.html` file under `directories`, recursively. Hidden
/// files and directories (names starting with `.`) are not visited.
///
/// Directories that do not exist are skipped (with a warning in verbose
/// mode); they are not an error, so the default layout can be used from any
/// working directory.
pub fn scan_template_files(directories: &[String], verbose: bool) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for dir in directories {
        let root = Path::new(dir);
        if !root.is_dir() {
            if verbose {
                eprintln!(
                    "{} Template directory does not exist: {}",
                    "warning:".bold().yellow(),
                    root.display()
                );
            }
            continue;
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && is_template_file(path) {
                files.push(path.to_path_buf());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_template_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXTENSION)
}
