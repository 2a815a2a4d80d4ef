//! PyO3 wrapper for Generator
//!
//! # Example (from Python)
//!
//! ```python
//! from rngstate_core import Generator, load, registry_count
//!
//! rng = Generator("mt19937", 42)
//! first = [rng.next_int() for _ in range(5)]
//! rng.save("state.bin")
//!
//! other = Generator("mt19937")
//! other.restore(load("state.bin"))
//! assert other.next_int() == rng.next_int()
//! ```

use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use super::types::{descriptor_to_py, rng_error_to_py};
use crate::engine::Generator as RustGenerator;
use crate::persist;
use crate::registry;
use crate::state::{self, SerializedState};

/// Python wrapper for a Rust Generator
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: RustGenerator,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator for a registered algorithm
    ///
    /// Raises ValueError for an unknown algorithm name.
    #[new]
    #[pyo3(signature = (algorithm, seed=None))]
    fn new(algorithm: &str, seed: Option<u64>) -> PyResult<Self> {
        let inner = RustGenerator::create(algorithm, seed).map_err(rng_error_to_py)?;
        Ok(PyGenerator { inner })
    }

    fn next_int(&mut self) -> u64 {
        self.inner.next_int()
    }

    fn next_float(&mut self) -> f64 {
        self.inner.next_float()
    }

    fn uniform_pos(&mut self) -> PyResult<f64> {
        self.inner.uniform_pos().map_err(rng_error_to_py)
    }

    fn uniform_int(&mut self, n: u64) -> PyResult<u64> {
        self.inner.uniform_int(n).map_err(rng_error_to_py)
    }

    fn set_seed(&mut self, seed: u64) {
        self.inner.set_seed(seed);
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn min(&self) -> u64 {
        self.inner.min()
    }

    fn max(&self) -> u64 {
        self.inner.max()
    }

    /// Current state in the state file format
    fn dump<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &state::dump(&self.inner).encode())
    }

    /// Restore from bytes produced by `dump` or `load`
    ///
    /// Raises ValueError on mismatch or corrupt input; state is unchanged.
    fn restore(&mut self, data: &[u8]) -> PyResult<()> {
        let snapshot = SerializedState::decode(data).map_err(rng_error_to_py)?;
        state::restore(&mut self.inner, &snapshot).map_err(rng_error_to_py)
    }

    /// Write current state to `path`; raises OSError on storage failure
    fn save(&self, path: &str) -> PyResult<()> {
        persist::save(&self.inner, path).map_err(rng_error_to_py)
    }

    fn __repr__(&self) -> String {
        format!("Generator('{}', seed={})", self.inner.name(), self.inner.seed())
    }
}

/// Number of registered algorithms
#[pyfunction]
pub fn registry_count() -> usize {
    registry::count()
}

/// Descriptors of every registered algorithm, in registry order
#[pyfunction]
pub fn registry_list(py: Python<'_>) -> PyResult<Vec<Bound<'_, PyDict>>> {
    registry::list()
        .map(|descriptor| descriptor_to_py(py, descriptor))
        .collect()
}

/// Read a state file and return it as bytes for `Generator.restore`
#[pyfunction]
pub fn load<'py>(py: Python<'py>, path: &str) -> PyResult<Bound<'py, PyBytes>> {
    let snapshot = persist::load(path).map_err(rng_error_to_py)?;
    Ok(PyBytes::new_bound(py, &snapshot.encode()))
}
