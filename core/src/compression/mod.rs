//! compression/mod.rs
//! One-shot zlib compression of a single in-memory buffer.
//!
//! Notes:
//! - The output buffer is sized by the zlib worst-case bound before the call.
//! - Failures surface the zlib status code verbatim; nothing is retried.
//! - Decompression and streaming are deliberately absent.

pub mod bound;
pub mod compressor;
pub mod config;
pub mod constants;
pub mod types;

pub use bound::*;
pub use compressor::*;
pub use config::{CompressorConfig, ConfigError, resolve_level};
pub use constants::*;
pub use types::*;
