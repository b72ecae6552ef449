//! compression/bound.rs
//! Worst-case output size for a one-shot zlib stream.

use crate::compression::constants::{BOUND_BASE, RAW_BLOCK_OVERHEAD, RAW_BLOCK_SPAN};

/// Upper bound on the compressed size of `source_len` input bytes.
///
/// This is the bound of the deflate backend flate2 runs by default (miniz's
/// `mz_deflateBound`): `max(128 + n*110/100, 128 + n + (n/31744 + 1)*5)`.
/// Its fast levels can emit more than zlib's `compressBound` allows on
/// incompressible input, so the zlib formula is not a valid bound here.
/// `n*110/100` is computed as `n + n/10` so it cannot overflow; the sums
/// saturate at `usize::MAX`.
pub fn compress_bound(source_len: usize) -> usize {
    let expanded = BOUND_BASE
        .saturating_add(source_len)
        .saturating_add(source_len / 10);

    let blocks = source_len / RAW_BLOCK_SPAN + 1;
    let stored = BOUND_BASE
        .saturating_add(source_len)
        .saturating_add(blocks.saturating_mul(RAW_BLOCK_OVERHEAD));

    expanded.max(stored)
}
