//! ffi.rs
//! Python surface: `compress`, `compress_result`, `compress_bound`, and the
//! `CompressionResult` record.
//!
//! Compression runs with the GIL released; the input borrows an immutable
//! `bytes` object that the caller's frame keeps alive.

use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use pyo3::types::PyBytes;
use tracing::debug;

use compress_core::compression::{
    compress_bound as bound, status_codes, BufferCompressor, CompressionError, CompressionResult,
    CompressorConfig,
};

create_exception!(
    rust_compress,
    CompressionFailed,
    PyException,
    "zlib reported a non-success status. args = (message, error_code)."
);

#[pyclass(name = "CompressionResult", module = "rust_compress", frozen)]
pub struct PyCompressionResult {
    inner: CompressionResult,
}

#[pymethods]
impl PyCompressionResult {
    /// Compressed bytes; empty when `ok` is False.
    #[getter]
    fn output<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.inner.output().unwrap_or_default())
    }

    #[getter]
    fn length(&self) -> usize {
        self.inner.length
    }

    #[getter]
    fn error_code(&self) -> i32 {
        self.inner.error_code
    }

    #[getter]
    fn ok(&self) -> bool {
        self.inner.is_ok()
    }

    fn __repr__(&self) -> String {
        format!("CompressionResult({})", self.inner)
    }
}

fn compressor(level: Option<i32>) -> BufferCompressor {
    BufferCompressor::from_config(&CompressorConfig::with_level(level))
}

fn to_py_err(err: CompressionError) -> PyErr {
    debug!(code = err.error_code(), "raising CompressionFailed");
    CompressionFailed::new_err((err.to_string(), err.error_code()))
}

/// Compress `data` with zlib; raises `CompressionFailed` on error.
#[pyfunction]
#[pyo3(signature = (data, level=None))]
fn compress<'py>(py: Python<'py>, data: &[u8], level: Option<i32>) -> PyResult<Bound<'py, PyBytes>> {
    let compressor = compressor(level);
    let buf = py
        .allow_threads(|| compressor.compress(data))
        .map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, buf.as_bytes()))
}

/// Compress `data` and report the outcome as a status-code record.
#[pyfunction]
#[pyo3(signature = (data, level=None))]
fn compress_result(py: Python<'_>, data: &[u8], level: Option<i32>) -> PyCompressionResult {
    let compressor = compressor(level);
    let inner = py.allow_threads(|| compressor.compress_result(data));
    PyCompressionResult { inner }
}

/// Worst-case compressed size for `n` input bytes.
#[pyfunction]
fn compress_bound(n: usize) -> usize {
    bound(n)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCompressionResult>()?;
    m.add_function(wrap_pyfunction!(compress, m)?)?;
    m.add_function(wrap_pyfunction!(compress_result, m)?)?;
    m.add_function(wrap_pyfunction!(compress_bound, m)?)?;
    m.add("CompressionFailed", m.py().get_type_bound::<CompressionFailed>())?;

    m.add("Z_OK", status_codes::Z_OK)?;
    m.add("Z_STREAM_ERROR", status_codes::Z_STREAM_ERROR)?;
    m.add("Z_MEM_ERROR", status_codes::Z_MEM_ERROR)?;
    m.add("Z_BUF_ERROR", status_codes::Z_BUF_ERROR)?;
    Ok(())
}
