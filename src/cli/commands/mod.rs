//! Command dispatch for the sales processor CLI.

pub mod process;

use crate::cli::args::{Args, Commands};
use crate::error::Result;
use crate::processor::ScanStats;

/// Run the command selected on the command line.
///
/// `main` handles the no-subcommand case before calling this.
pub fn run(args: Args) -> Result<ScanStats> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args),
        None => Ok(ScanStats::default()),
    }
}
