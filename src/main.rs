use clap::Parser;
use sales_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Sales Processor - Streaming Sales Statistics");
    println!("============================================");
    println!();
    println!("Compute summary sales statistics from large sales transaction CSV files");
    println!("by scanning them in bounded-memory batches.");
    println!();
    println!("USAGE:");
    println!("    sales-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Scan a sales CSV and print the summary report");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Scan with the default batch size (1,000,000 rows):");
    println!("    sales-processor process --file data/sales.csv");
    println!();
    println!("    # Smaller batches, no per-batch telemetry:");
    println!("    sales-processor process --file data/sales.csv --batch-size 100000 --quiet");
    println!();
    println!("For detailed help on any command, use:");
    println!("    sales-processor <COMMAND> --help");
}
