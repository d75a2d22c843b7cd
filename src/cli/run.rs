use std::{env, fs, io::Write, path::Path};

use anyhow::{Result, bail};
use colored::Colorize;

use super::{
    ExitStatus,
    args::Arguments,
    report::{print_init_success_to, print_summary_to},
    session::run_session,
};
use crate::{
    config::{
        CONFIG_FILE_NAME, ConfigLoadResult, ExclusionSet, default_config_json, load_config,
        load_config_file,
    },
    core::file_scanner::scan_template_files,
};

/// Run the CLI with parsed arguments, writing the report to `writer`.
///
/// # Returns
/// - `Ok(ExitStatus)`: `Failure` if any ERROR finding was reported
/// - `Err` if a file or the config could not be read
pub fn run<W: Write>(args: Arguments, writer: &mut W) -> Result<ExitStatus> {
    if args.init {
        let path = Path::new(CONFIG_FILE_NAME);
        init(path)?;
        print_init_success_to(path, writer);
        return Ok(ExitStatus::Success);
    }

    let verbose = args.verbose;
    let ConfigLoadResult { config, path } = match &args.config {
        Some(path) => load_config_file(path)?,
        None => load_config(&env::current_dir()?)?,
    };

    if verbose {
        match &path {
            Some(path) => eprintln!("{} Using config {}", "note:".bold().cyan(), path.display()),
            None => eprintln!(
                "{} No {} found, using defaults",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            ),
        }
    }

    let files = if args.files.is_empty() {
        let scanned = scan_template_files(&config.default_directories, verbose);
        if verbose && scanned.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) could not be accessed",
                "warning:".bold().yellow(),
                scanned.skipped_count
            );
        }
        scanned.files
    } else {
        args.files
    };

    let excludes = if args.skip_excluded {
        config.exclusion_set()?
    } else {
        ExclusionSet::default()
    };

    let summary = run_session(&files, &excludes, writer)?;
    print_summary_to(&summary, &config.docs_url, writer);

    if verbose && summary.files_skipped > 0 {
        eprintln!(
            "{} {} excluded file(s) skipped (use {} to check them)",
            "note:".bold().cyan(),
            summary.files_skipped,
            "--no-skip-excluded".cyan()
        );
    }

    Ok(summary.exit_status())
}

fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::write(path, default_config_json()?)?;
    Ok(())
}
