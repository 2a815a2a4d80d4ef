//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the generator core to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: registry queries, one `Generator` class, `load`
//! 2. **Simple types**: ints, floats, strings, dicts and `bytes` at the boundary
//! 3. **Safe errors**: every `RngError` becomes a Python exception
//! 4. **No references**: Python gets copies of state, never views into it

pub mod generator;
pub mod types;
