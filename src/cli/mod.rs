use std::io;

use anyhow::Result;

pub mod args;
mod exit_status;
pub mod report;
mod run;
pub mod session;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Run the CLI, printing the report to stdout.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args, &mut io::stdout().lock())
}
