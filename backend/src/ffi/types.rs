//! Type conversion utilities for FFI boundary

use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::error::RngError;
use crate::registry::AlgorithmDescriptor;

/// Map a core error onto the matching Python exception
///
/// Storage failures become `OSError`; everything else is a bad value.
pub fn rng_error_to_py(err: RngError) -> PyErr {
    match err {
        RngError::Io(io) => PyOSError::new_err(io.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Descriptor as a plain dict
pub fn descriptor_to_py<'py>(
    py: Python<'py>,
    descriptor: &AlgorithmDescriptor,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("name", descriptor.name())?;
    dict.set_item("state_size", descriptor.state_size())?;
    dict.set_item("default_seed", descriptor.default_seed())?;
    dict.set_item("min", descriptor.min())?;
    dict.set_item("max", descriptor.max())?;
    Ok(dict)
}
