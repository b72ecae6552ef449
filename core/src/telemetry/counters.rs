//! telemetry/counters.rs
//! Mutable counters collected across compression calls.
//!
//! Summary: caller-owned, so the compressor itself holds no shared state.
//! Converted into an immutable TelemetrySnapshot when the caller is done.
use std::ops::AddAssign;
use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub calls: u64,
    pub failures: u64,
    pub bytes_input: u64,
    pub bytes_output: u64,
    pub bytes_reserved: u64,
}

impl TelemetryCounters {
    /// Record one successful call.
    ///
    /// - `input_len`: uncompressed bytes handed in
    /// - `output_len`: compressed bytes produced
    /// - `reserved_len`: bound-sized buffer that was allocated for the call
    pub fn add_success(&mut self, input_len: usize, output_len: usize, reserved_len: usize) {
        self.calls += 1;
        self.bytes_input += input_len as u64;
        self.bytes_output += output_len as u64;
        self.bytes_reserved += reserved_len as u64;
    }

    /// Record one failed call. Failed calls contribute no output bytes.
    pub fn add_failure(&mut self, input_len: usize) {
        self.calls += 1;
        self.failures += 1;
        self.bytes_input += input_len as u64;
    }

    pub fn successes(&self) -> u64 {
        self.calls.saturating_sub(self.failures)
    }

    /// Allocated-but-unused bytes across successful calls.
    pub fn slack_bytes(&self) -> u64 {
        self.bytes_reserved.saturating_sub(self.bytes_output)
    }

    // Per-thread counters are merged at the end instead of sharing one
    // behind a lock.
    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.calls          += other.calls;
        self.failures       += other.failures;
        self.bytes_input    += other.bytes_input;
        self.bytes_output   += other.bytes_output;
        self.bytes_reserved += other.bytes_reserved;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
