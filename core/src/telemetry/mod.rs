//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for compression calls.
//!
//! Counters and timers are owned by the caller and passed in per call, which
//! keeps `BufferCompressor` stateless and shareable across threads.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
