//! Per-batch resource telemetry.
//!
//! Fire-and-forget observer invoked after each fully processed batch. Reads
//! memory counters via sysinfo and prints one block per batch; never touches
//! aggregate state.

use std::time::Duration;
use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::debug;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Observes batch boundaries and reports process/system memory usage
#[derive(Debug)]
pub struct ResourceMonitor {
    system: System,
    pid: Option<Pid>,
    enabled: bool,
}

impl ResourceMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            system: System::new(),
            pid: sysinfo::get_current_pid().ok(),
            enabled,
        }
    }

    /// Report resource usage after `batch_index` finished processing
    pub fn observe(&mut self, batch_index: usize, rows: usize, elapsed: Duration) {
        if !self.enabled {
            debug!(
                "Batch {} done ({} rows in {:.2}s)",
                batch_index,
                rows,
                elapsed.as_secs_f64()
            );
            return;
        }

        self.system.refresh_memory();
        let used_mb = self.system.used_memory() as f64 / BYTES_PER_MB;
        let total_mb = self.system.total_memory() as f64 / BYTES_PER_MB;

        println!("Batch: {batch_index}");
        println!("Rows processed: {rows}");
        if let Some(rss_mb) = self.process_rss_mb() {
            println!("Process memory: {rss_mb:.2} MB");
        }
        println!("System memory: {used_mb:.2} / {total_mb:.2} MB");
        println!("Batch time: {:.2} seconds\n", elapsed.as_secs_f64());
    }

    fn process_rss_mb(&mut self) -> Option<f64> {
        let pid = self.pid?;
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        let process = self.system.process(pid)?;
        Some(process.memory() as f64 / BYTES_PER_MB)
    }
}
