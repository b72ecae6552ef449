//! compress-core
//!
//! One-shot zlib compression of an in-memory buffer.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

pub mod compression;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        compress, compress_bound, BufferCompressor, CompressedBuffer, CompressionError,
        CompressionResult, CompressorConfig, ZStatus,
    };
    pub use crate::telemetry::{TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
}
