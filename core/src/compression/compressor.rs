//! compression/compressor.rs
//! One-shot zlib compression of an in-memory buffer.
//!
//! Design notes:
//! - The destination is sized by `compress_bound` up front, so a single
//!   `Compress::compress` call with `FlushCompress::Finish` always reaches
//!   the end of the stream for valid levels.
//! - The buffer is a zero-initialised `Vec<u8>`; every failure path drops it
//!   before returning, and a failure never carries bytes.
//! - `BufferCompressor` holds only its level, so `&self` calls are reentrant.

use std::time::{Duration, Instant};
use flate2::{Compress, Compression, FlushCompress, Status};
use tracing::{debug, trace, warn};

use crate::compression::bound::compress_bound;
use crate::compression::config::{to_compression, CompressorConfig};
use crate::compression::constants::Z_DEFAULT_COMPRESSION;
use crate::compression::types::{CompressedBuffer, CompressionError, CompressionResult, ZStatus};
use crate::telemetry::{Stage, TelemetryCounters, TelemetryTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCompressor {
    level: i32,
}

impl Default for BufferCompressor {
    fn default() -> Self {
        Self { level: Z_DEFAULT_COMPRESSION }
    }
}

impl BufferCompressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any `i32` is accepted; levels outside `-1..=9` fail each call with
    /// `Z_STREAM_ERROR`.
    pub fn with_level(level: i32) -> Self {
        Self { level }
    }

    pub fn from_config(config: &CompressorConfig) -> Self {
        Self { level: config.level }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    /// Compress `input` into a freshly allocated, bound-sized buffer.
    ///
    /// # Errors
    /// - `Z_STREAM_ERROR` for an invalid level (nothing is allocated)
    /// - `Z_MEM_ERROR` if the output buffer cannot be reserved
    /// - `Z_BUF_ERROR` if the primitive runs out of destination space
    pub fn compress(&self, input: &[u8]) -> Result<CompressedBuffer, CompressionError> {
        self.compress_staged(input, |_, _| {})
    }

    /// Same as [`compress`](Self::compress), flattened into a status-code
    /// record. Never panics and never returns bytes on failure.
    pub fn compress_result(&self, input: &[u8]) -> CompressionResult {
        self.compress(input).into()
    }

    /// Compress into a caller-provided destination and return the number of
    /// bytes written. A destination smaller than the stream needs fails with
    /// `Z_BUF_ERROR`; its contents are unspecified afterwards.
    pub fn compress_into(&self, input: &[u8], dest: &mut [u8]) -> Result<usize, CompressionError> {
        let level = self.compression(input.len())?;
        deflate_into(level, input, dest).map_err(|e| failed(e.status(), input.len()))
    }

    /// [`compress`](Self::compress) that also records per-stage timings and
    /// byte counts into caller-owned telemetry.
    pub fn compress_recorded(
        &self,
        input: &[u8],
        counters: &mut TelemetryCounters,
        timer: &mut TelemetryTimer,
    ) -> Result<CompressedBuffer, CompressionError> {
        let res = self.compress_staged(input, |stage, dur| timer.add_stage_time(stage, dur));
        match &res {
            Ok(buf) => counters.add_success(input.len(), buf.len(), buf.bound()),
            Err(_) => counters.add_failure(input.len()),
        }
        res
    }

    fn compress_staged<F>(&self, input: &[u8], mut on_stage: F) -> Result<CompressedBuffer, CompressionError>
    where
        F: FnMut(Stage, Duration),
    {
        let level = self.compression(input.len())?;

        let t = Instant::now();
        let bound = compress_bound(input.len());
        on_stage(Stage::Bound, t.elapsed());

        let t = Instant::now();
        let mut output = allocate(bound).map_err(|e| failed(e.status(), input.len()))?;
        on_stage(Stage::Allocate, t.elapsed());

        let t = Instant::now();
        let written = deflate_into(level, input, &mut output);
        on_stage(Stage::Compress, t.elapsed());

        // On error `output` is dropped here, never handed out.
        let written = written.map_err(|e| failed(e.status(), input.len()))?;
        output.truncate(written);

        debug!(input_len = input.len(), bound, written, level = self.level, "compressed buffer");
        Ok(CompressedBuffer::new(output, input.len(), bound))
    }

    fn compression(&self, input_len: usize) -> Result<Compression, CompressionError> {
        to_compression(self.level).ok_or_else(|| {
            debug!(level = self.level, "rejecting compression level");
            failed(ZStatus::StreamError, input_len)
        })
    }
}

/// Compress with the default level into a status-code record.
pub fn compress(input: &[u8]) -> CompressionResult {
    BufferCompressor::default().compress_result(input)
}

fn allocate(bound: usize) -> Result<Vec<u8>, CompressionError> {
    let mut output = Vec::new();
    output
        .try_reserve_exact(bound)
        .map_err(|_| CompressionError::from(ZStatus::MemError))?;
    output.resize(bound, 0);
    Ok(output)
}

fn deflate_into(level: Compression, input: &[u8], dest: &mut [u8]) -> Result<usize, CompressionError> {
    let mut engine = Compress::new(level, true);
    let status = engine
        .compress(input, dest, FlushCompress::Finish)
        .map_err(|e| {
            trace!(error = %e, "deflate stream error");
            CompressionError::from(ZStatus::StreamError)
        })?;

    match status {
        // total_out is bounded by dest.len()
        Status::StreamEnd => Ok(engine.total_out() as usize),
        Status::Ok | Status::BufError => {
            trace!(dest_len = dest.len(), produced = engine.total_out(), "destination exhausted");
            Err(ZStatus::BufError.into())
        }
    }
}

fn failed(status: ZStatus, input_len: usize) -> CompressionError {
    warn!(input_len, code = status.code(), %status, "compression failed");
    CompressionError::from(status)
}
