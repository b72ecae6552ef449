//! telemetry/snapshot.rs
//!
//! Immutable view over counters and timers, serialisable for reporting.

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub calls: u64,
    pub failures: u64,
    pub bytes_input: u64,
    pub bytes_output: u64,
    pub bytes_reserved: u64,
    /// `bytes_output / bytes_input`. Not capped: zlib expands
    /// incompressible input by a few bytes.
    pub compression_ratio: f64,
    pub throughput_input_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.bytes_input > 0 {
            counters.bytes_output as f64 / counters.bytes_input as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_input as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            calls: counters.calls,
            failures: counters.failures,
            bytes_input: counters.bytes_input,
            bytes_output: counters.bytes_output,
            bytes_reserved: counters.bytes_reserved,
            compression_ratio,
            throughput_input_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times,
        }
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal invariants:
    /// - output never exceeds what was reserved
    /// - failures are a subset of calls
    /// - stage time fits inside elapsed time
    pub fn sanity_check(&self) -> bool {
        self.bytes_output <= self.bytes_reserved
            && self.failures <= self.calls
            && self.stage_times.total() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
