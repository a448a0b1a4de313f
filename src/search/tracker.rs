//! Search instrumentation
//!
//! The engine reports node visits through a [`SearchTracker`]. The
//! default [`NullTracker`] does nothing, so uninstrumented searches pay
//! no cost beyond an inlined empty call. [`PerfTracker`] measures wall
//! time, node count, and process resident memory per search invocation.

use std::time::Instant;

use sysinfo::{ProcessesToUpdate, System};

/// Metrics for one completed search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub elapsed_ms: u64,
    pub nodes: u64,
    pub memory_mb: u64,
}

/// Receives search lifecycle events. All methods default to no-ops.
pub trait SearchTracker {
    fn start(&mut self) {}
    fn record_node(&mut self) {}
    fn stop(&mut self) -> SearchReport {
        SearchReport::default()
    }
}

/// Tracker that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTracker;

impl SearchTracker for NullTracker {}

/// Wall-time, node-count, and memory tracker. One instance covers one
/// search; `start` resets all counters.
#[derive(Debug, Default)]
pub struct PerfTracker {
    nodes: u64,
    started: Option<Instant>,
}

impl PerfTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchTracker for PerfTracker {
    fn start(&mut self) {
        self.nodes = 0;
        self.started = Some(Instant::now());
    }

    fn record_node(&mut self) {
        self.nodes += 1;
    }

    fn stop(&mut self) -> SearchReport {
        let elapsed_ms = self
            .started
            .take()
            .map_or(0, |t| t.elapsed().as_millis() as u64);
        SearchReport {
            elapsed_ms,
            nodes: self.nodes,
            memory_mb: process_memory_mb(),
        }
    }
}

/// Resident memory of the current process in MB; 0 when the sample
/// cannot be taken.
fn process_memory_mb() -> u64 {
    let Ok(pid) = sysinfo::get_current_pid() else {
        return 0;
    };
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    sys.process(pid).map_or(0, |p| p.memory() / (1024 * 1024))
}
