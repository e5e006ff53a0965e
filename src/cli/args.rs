//! Command-line argument definitions for the sales processor.

use crate::config::{DEFAULT_BATCH_SIZE, ProcessorConfig};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the sales statistics processor
///
/// Computes summary sales statistics from a large sales transaction CSV by
/// scanning it in bounded-memory batches.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sales-processor",
    version,
    about = "Compute summary sales statistics from large CSV transaction files",
    long_about = "Scans a sales transaction CSV in fixed-size batches, keeping memory bounded \
                  regardless of file size, and reports the top-selling product and channel, the \
                  top-revenue country and region, and average monthly revenue per product."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Scan a sales CSV and print the summary report
    Process(ProcessArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Path to the source sales CSV file
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        help = "Path to the source sales CSV file"
    )]
    pub file: PathBuf,

    /// Maximum rows per batch
    ///
    /// Peak memory scales with this value. Note that the monthly-average
    /// statistic averages per-batch sums, so changing the batch size changes
    /// that statistic.
    #[arg(
        short = 'b',
        long = "batch-size",
        value_name = "ROWS",
        default_value_t = DEFAULT_BATCH_SIZE,
        help = "Maximum rows per batch"
    )]
    pub batch_size: usize,

    /// Suppress per-batch resource telemetry
    #[arg(short = 'q', long = "quiet", help = "Suppress per-batch telemetry")]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Log level derived from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Build the processor configuration from these arguments
    pub fn to_config(&self) -> ProcessorConfig {
        ProcessorConfig::new(&self.file)
            .with_batch_size(self.batch_size)
            .with_telemetry(!self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_process_command() {
        let args = Args::parse_from([
            "sales-processor",
            "process",
            "--file",
            "sales.csv",
            "--batch-size",
            "500",
            "--quiet",
        ]);

        let Some(Commands::Process(process)) = args.command else {
            panic!("expected process subcommand");
        };
        assert_eq!(process.file, PathBuf::from("sales.csv"));
        assert_eq!(process.batch_size, 500);
        assert!(process.quiet);
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["sales-processor", "process", "-f", "sales.csv"]);
        let Some(Commands::Process(process)) = args.command else {
            panic!("expected process subcommand");
        };
        assert_eq!(process.batch_size, DEFAULT_BATCH_SIZE);
        assert!(!process.quiet);
        assert_eq!(process.log_level(), "info");
    }

    #[test]
    fn test_verbosity_levels() {
        let args = Args::parse_from(["sales-processor", "process", "-f", "s.csv", "-vv"]);
        let Some(Commands::Process(process)) = args.command else {
            panic!("expected process subcommand");
        };
        assert_eq!(process.log_level(), "trace");
    }
}
