//! compression/config.rs
//! Compressor configuration.
//!
//! Levels follow zlib: `-1` selects the library default, `0..=9` trade speed
//! for ratio. An out-of-range level is accepted here only by `with_level`;
//! the compressor then reports `Z_STREAM_ERROR` at call time.

use flate2::Compression;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::{DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL, Z_DEFAULT_COMPRESSION};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid compressor config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("compression level {level} outside {min}..={max} (or -1 for default)")]
    InvalidLevel { level: i32, min: i32, max: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompressorConfig {
    pub level: i32,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self { level: Z_DEFAULT_COMPRESSION }
    }
}

impl CompressorConfig {
    /// `None` falls back to the library default.
    pub fn with_level(level: Option<i32>) -> Self {
        Self { level: level.unwrap_or(Z_DEFAULT_COMPRESSION) }
    }

    /// Parse and validate a JSON config such as `{"level": 9}`.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match resolve_level(self.level) {
            Some(_) => Ok(()),
            None => Err(ConfigError::InvalidLevel {
                level: self.level,
                min: MIN_LEVEL,
                max: MAX_LEVEL,
            }),
        }
    }

    /// Level actually used after resolving the default sentinel.
    pub fn effective_level(&self) -> Option<i32> {
        resolve_level(self.level)
    }
}

/// Map a zlib level onto the concrete `0..=9` range, `None` if invalid.
pub fn resolve_level(level: i32) -> Option<i32> {
    match level {
        Z_DEFAULT_COMPRESSION => Some(DEFAULT_LEVEL),
        MIN_LEVEL..=MAX_LEVEL => Some(level),
        _ => None,
    }
}

pub(crate) fn to_compression(level: i32) -> Option<Compression> {
    resolve_level(level).map(|lvl| Compression::new(lvl as u32))
}
