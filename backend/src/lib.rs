//! RNG State Core - pluggable generators with persistent state
//!
//! Deterministic pseudo-random generators selected by name, whose complete
//! state can be dumped, written to storage and restored bit-exactly.
//!
//! # Architecture
//!
//! - **registry**: Fixed catalog of algorithm variants
//! - **rng**: The algorithms themselves
//! - **engine**: `Generator`, a handle bound to one variant
//! - **state**: Dump/restore and the state file format
//! - **persist**: Stream and file I/O for serialized state
//! - **config**: Serde config for building generators
//!
//! # Critical Invariants
//!
//! 1. Same algorithm + seed + call sequence → same outputs
//! 2. State for algorithm A never loads into a generator for B
//! 3. Failed operations leave every generator untouched
//!
//! # Example
//! ```
//! use rngstate_core::{dump, restore, Generator};
//!
//! let mut a = Generator::create("mt19937", Some(42)).unwrap();
//! a.fill_ints(5);
//! let snapshot = dump(&a);
//!
//! let mut b = Generator::create("mt19937", Some(0)).unwrap();
//! restore(&mut b, &snapshot).unwrap();
//! assert_eq!(a.fill_ints(5), b.fill_ints(5));
//! ```

// Module declarations
pub mod config;
pub mod engine;
pub mod error;
pub mod persist;
pub mod registry;
pub mod rng;
pub mod state;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use engine::Generator;
pub use error::{Result, RngError};
pub use persist::{load, read_state, restore_from_file, save, save_state, write_state};
pub use registry::{AlgorithmDescriptor, DEFAULT_ALGORITHM};
pub use state::{dump, restore, SerializedState};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn rngstate_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    m.add_function(wrap_pyfunction!(ffi::generator::registry_count, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::generator::registry_list, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::generator::load, m)?)?;
    Ok(())
}
