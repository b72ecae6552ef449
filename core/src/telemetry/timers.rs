//! telemetry/timers.rs
//! Wall-clock split of the compress path: bound, allocate, compress.

use std::time::{Duration, Instant};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Bound,
    Allocate,
    Compress,
}

impl Stage {
    /// In the order a call runs them.
    pub const ALL: [Stage; 3] = [Stage::Bound, Stage::Allocate, Stage::Compress];
}

/// Accumulated time per stage; `None` until the stage has run once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    pub bound: Option<Duration>,
    pub allocate: Option<Duration>,
    pub compress: Option<Duration>,
}

impl StageTimes {
    fn slot(&mut self, stage: Stage) -> &mut Option<Duration> {
        match stage {
            Stage::Bound    => &mut self.bound,
            Stage::Allocate => &mut self.allocate,
            Stage::Compress => &mut self.compress,
        }
    }

    pub fn get(&self, stage: Stage) -> Option<Duration> {
        match stage {
            Stage::Bound    => self.bound,
            Stage::Allocate => self.allocate,
            Stage::Compress => self.compress,
        }
    }

    pub fn add(&mut self, stage: Stage, dur: Duration) {
        let slot = self.slot(stage);
        *slot = Some(slot.unwrap_or_default() + dur);
    }

    pub fn total(&self) -> Duration {
        Stage::ALL.iter().filter_map(|s| self.get(*s)).sum()
    }

    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.get(*s).is_some())
    }
}

/// Spans a batch of calls; stage times accumulate across them.
#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    start_time: Instant,
    end_time: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            stage_times: StageTimes::default(),
        }
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    pub fn elapsed(&self) -> Duration {
        self.end_time.unwrap_or_else(Instant::now).duration_since(self.start_time)
    }
}
