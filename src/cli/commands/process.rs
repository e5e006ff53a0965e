//! Process command implementation: full scan followed by the summary report.

use crate::cli::args::ProcessArgs;
use crate::error::Result;
use crate::processor::{SalesProcessor, ScanStats};
use crate::report;
use tracing::{debug, info};

/// Run the full scan and print the summary.
pub fn run_process(args: ProcessArgs) -> Result<ScanStats> {
    setup_logging(&args);

    info!("Starting sales processor");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    let mut processor = SalesProcessor::new(config)?;

    let stats = processor.run()?;
    println!(
        "Total elapsed time: {:.2} seconds",
        stats.elapsed.as_secs_f64()
    );

    report::print_summary(processor.aggregates())?;

    Ok(stats)
}

/// Set up structured logging for the process command
fn setup_logging(args: &ProcessArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sales_processor={}", args.log_level())));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", args.log_level());
}
