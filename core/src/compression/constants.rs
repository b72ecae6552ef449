//! compression/constants.rs
//! zlib status values, level range and bound arithmetic.

/// zlib status codes (zlib.h). Surfaced verbatim as `error_code`.
pub mod status_codes {
    pub const Z_OK: i32            = 0;
    pub const Z_STREAM_END: i32    = 1;
    pub const Z_NEED_DICT: i32     = 2;
    pub const Z_ERRNO: i32         = -1;
    pub const Z_STREAM_ERROR: i32  = -2;
    pub const Z_DATA_ERROR: i32    = -3;
    pub const Z_MEM_ERROR: i32     = -4;
    pub const Z_BUF_ERROR: i32     = -5;
    pub const Z_VERSION_ERROR: i32 = -6;
}

/// Sentinel level meaning "library default".
pub const Z_DEFAULT_COMPRESSION: i32 = -1;

/// Level the default sentinel resolves to (balanced).
pub const DEFAULT_LEVEL: i32 = 6;
pub const MIN_LEVEL: i32 = 0;
pub const MAX_LEVEL: i32 = 9;

/// Fixed slack in the worst-case bound of the deflate backend (miniz).
pub const BOUND_BASE: usize = 128;

/// Input span after which the backend may close a stored block.
pub const RAW_BLOCK_SPAN: usize = 31 * 1024;

/// Framing bytes per stored block (header bits, LEN and NLEN).
pub const RAW_BLOCK_OVERHEAD: usize = 5;
