//! Per-operation latency capture and reporting.
//!
//! The engine itself does no timing; the host wraps each call and records
//! the elapsed nanoseconds here.

use std::fmt;
use std::io::{self, Write};

use hdrhistogram::Histogram;

/// HDR-histogram-backed latency sink.
pub struct LatencyStats {
    hist: Histogram<u64>,
}

/// Summary of a run's per-operation latencies, all in nanoseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatencyReport {
    pub min: u64,
    pub avg: u64,
    pub p50: u64,
    pub p90: u64,
    pub p99: u64,
    pub max: u64,
}

impl LatencyStats {
    pub fn new() -> Self {
        // 1ns to 100s at 3 significant digits covers any single operation.
        Self {
            hist: Histogram::new_with_bounds(1, 100_000_000_000, 3)
                .expect("static histogram bounds"),
        }
    }

    /// Record one sample. Zero is clamped to the 1ns floor.
    #[inline]
    pub fn record(&mut self, ns: u64) {
        let _ = self.hist.record(ns.max(1));
    }

    /// Number of recorded samples
    pub fn count(&self) -> u64 {
        self.hist.len()
    }

    /// Summarize the samples, or `None` when nothing was recorded.
    pub fn report(&self) -> Option<LatencyReport> {
        if self.hist.is_empty() {
            return None;
        }
        Some(LatencyReport {
            min: self.hist.min(),
            avg: self.hist.mean() as u64,
            p50: self.hist.value_at_quantile(0.50),
            p90: self.hist.value_at_quantile(0.90),
            p99: self.hist.value_at_quantile(0.99),
            max: self.hist.max(),
        })
    }

    /// Write the recorded distribution as `value_ns,count` CSV rows.
    pub fn dump_csv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "value_ns,count")?;
        for v in self.hist.iter_recorded() {
            writeln!(out, "{},{}", v.value_iterated_to(), v.count_at_value())?;
        }
        Ok(())
    }
}

impl Default for LatencyStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LatencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latency (ns): min={} avg={} p50={} p90={} p99={} max={}",
            self.min, self.avg, self.p50, self.p90, self.p99, self.max
        )
    }
}
