//! compression/types.rs
//! Status codes, errors and the result records handed back to callers.
use std::fmt;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::status_codes;

/// FFI-safe mirror of the zlib status codes.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum ZStatus {
    Ok           = status_codes::Z_OK,
    StreamEnd    = status_codes::Z_STREAM_END,
    NeedDict     = status_codes::Z_NEED_DICT,
    Errno        = status_codes::Z_ERRNO,
    StreamError  = status_codes::Z_STREAM_ERROR,
    DataError    = status_codes::Z_DATA_ERROR,
    MemError     = status_codes::Z_MEM_ERROR,
    BufError     = status_codes::Z_BUF_ERROR,
    VersionError = status_codes::Z_VERSION_ERROR,
}

impl ZStatus {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == ZStatus::Ok
    }
}

impl fmt::Display for ZStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZStatus::Ok           => "Z_OK",
            ZStatus::StreamEnd    => "Z_STREAM_END",
            ZStatus::NeedDict     => "Z_NEED_DICT",
            ZStatus::Errno        => "Z_ERRNO",
            ZStatus::StreamError  => "Z_STREAM_ERROR",
            ZStatus::DataError    => "Z_DATA_ERROR",
            ZStatus::MemError     => "Z_MEM_ERROR",
            ZStatus::BufError     => "Z_BUF_ERROR",
            ZStatus::VersionError => "Z_VERSION_ERROR",
        };
        f.write_str(name)
    }
}

/// The only failure kind: the primitive reported a non-success status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompressionError {
    #[error("compression failed: {} (code {})", .status, .status.code())]
    CompressionFailed { status: ZStatus },
}

impl CompressionError {
    pub fn status(&self) -> ZStatus {
        match self {
            CompressionError::CompressionFailed { status } => *status,
        }
    }

    /// Raw zlib status code.
    pub fn error_code(&self) -> i32 {
        self.status().code()
    }
}

impl From<ZStatus> for CompressionError {
    fn from(status: ZStatus) -> Self {
        CompressionError::CompressionFailed { status }
    }
}

/// Successful output of one compression call.
///
/// Owns exactly the produced bytes; the bound-sized scratch capacity is kept
/// so callers can reuse the allocation if they want to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedBuffer {
    bytes: Vec<u8>,
    input_len: usize,
    bound: usize,
}

impl CompressedBuffer {
    pub(crate) fn new(bytes: Vec<u8>, input_len: usize, bound: usize) -> Self {
        Self { bytes, input_len, bound }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Uncompressed size of the input this buffer was produced from.
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Worst-case size that was allocated for this call.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Compressed size over uncompressed size; 0.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            0.0
        } else {
            self.bytes.len() as f64 / self.input_len as f64
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for CompressedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<CompressedBuffer> for Vec<u8> {
    fn from(buf: CompressedBuffer) -> Self {
        buf.bytes
    }
}

/// Flat record for embedding callers: bytes, length and a zlib status code.
///
/// On failure `output` is empty and `length` is zero; the bytes are only
/// meaningful when `error_code` is `Z_OK`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub output: Vec<u8>,
    pub length: usize,
    pub error_code: i32,
}

impl CompressionResult {
    pub fn failed(status: ZStatus) -> Self {
        Self {
            output: Vec::new(),
            length: 0,
            error_code: status.code(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error_code == status_codes::Z_OK
    }

    /// Decoded status, `None` for codes outside the zlib set.
    pub fn status(&self) -> Option<ZStatus> {
        ZStatus::try_from_primitive(self.error_code).ok()
    }

    /// Compressed bytes, only when the call succeeded.
    pub fn output(&self) -> Option<&[u8]> {
        if self.is_ok() {
            self.output.get(..self.length)
        } else {
            None
        }
    }
}

impl From<CompressedBuffer> for CompressionResult {
    fn from(buf: CompressedBuffer) -> Self {
        let length = buf.len();
        Self {
            output: buf.into_vec(),
            length,
            error_code: status_codes::Z_OK,
        }
    }
}

impl From<CompressionError> for CompressionResult {
    fn from(err: CompressionError) -> Self {
        CompressionResult::failed(err.status())
    }
}

impl From<Result<CompressedBuffer, CompressionError>> for CompressionResult {
    fn from(res: Result<CompressedBuffer, CompressionError>) -> Self {
        match res {
            Ok(buf) => buf.into(),
            Err(err) => err.into(),
        }
    }
}

impl fmt::Display for CompressionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "ok ({} bytes)", self.length);
        }
        match self.status() {
            Some(status) => write!(f, "failed: {}", status),
            None => write!(f, "failed: unknown status {}", self.error_code),
        }
    }
}
