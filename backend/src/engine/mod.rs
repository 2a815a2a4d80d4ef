//! Generator engine
//!
//! A [`Generator`] binds one registry descriptor to an owned algorithm state.
//! Handles never share state: cloning copies it, and no operation on one
//! handle touches another.
//!
//! # Determinism
//!
//! Same algorithm + same seed + same call sequence → same outputs. This is
//! the property every other part of the crate relies on.
//!
//! # Concurrency
//!
//! A `Generator` is `Send` but takes `&mut self` to advance. Give each thread
//! its own handle or wrap a shared one in a `Mutex`.

use crate::error::{Result, RngError};
use crate::registry::{self, AlgorithmDescriptor};
use crate::rng::Algorithm;
use std::fmt;
use tracing::debug;

/// A seeded generator bound to one algorithm variant
///
/// # Example
/// ```
/// use rngstate_core::Generator;
///
/// let mut rng = Generator::create("mt19937", Some(42)).unwrap();
/// let value = rng.next_int();
/// let probability = rng.next_float();
/// assert!(value <= rng.max());
/// assert!((0.0..1.0).contains(&probability));
/// ```
#[derive(Clone)]
pub struct Generator {
    descriptor: &'static AlgorithmDescriptor,
    algorithm: Box<dyn Algorithm>,
    seed: u64,
}

impl Generator {
    /// Create a generator for the named algorithm
    ///
    /// `seed = None` uses the descriptor's default seed.
    ///
    /// # Errors
    /// `UnknownAlgorithm` if `name` is not registered.
    pub fn create(name: &str, seed: Option<u64>) -> Result<Self> {
        let descriptor = registry::lookup(name)?;
        Ok(Self::from_descriptor(descriptor, seed))
    }

    /// Create a generator from an already resolved descriptor
    pub fn from_descriptor(descriptor: &'static AlgorithmDescriptor, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| descriptor.default_seed());
        let mut algorithm = descriptor.instantiate();
        algorithm.set(seed);

        debug!(algorithm = descriptor.name(), seed, "generator created");

        Self {
            descriptor,
            algorithm,
            seed,
        }
    }

    /// Re-seed in place
    pub fn set_seed(&mut self, seed: u64) {
        self.algorithm.set(seed);
        self.seed = seed;
        debug!(algorithm = self.name(), seed, "generator reseeded");
    }

    /// Next raw output in `[min(), max()]`
    pub fn next_int(&mut self) -> u64 {
        self.algorithm.get()
    }

    /// Next double in `[0.0, 1.0)`
    pub fn next_float(&mut self) -> f64 {
        self.algorithm.get_double()
    }

    /// Next double in `(0.0, 1.0)`, skipping exact zeros
    ///
    /// # Errors
    /// `DegenerateState` if the generator is stuck at zero, i.e. a zero draw
    /// leaves the state exactly as the previous zero draw left it.
    pub fn uniform_pos(&mut self) -> Result<f64> {
        let mut after_zero: Option<Vec<u8>> = None;
        loop {
            let x = self.algorithm.get_double();
            if x != 0.0 {
                return Ok(x);
            }
            let state = self.state_bytes();
            if after_zero.as_ref() == Some(&state) {
                return Err(RngError::DegenerateState(format!(
                    "{} is stuck at zero (seed {})",
                    self.name(),
                    self.seed
                )));
            }
            after_zero = Some(state);
        }
    }

    /// Unbiased integer in `[0, n)`
    ///
    /// Outputs are scaled down by `(max - min) / n` and draws that land at
    /// or beyond `n` are rejected.
    ///
    /// # Errors
    /// `InvalidRange` if `n == 0` or `n` exceeds `max() - min()`.
    pub fn uniform_int(&mut self, n: u64) -> Result<u64> {
        let range = self.max() - self.min();
        if n == 0 || n > range {
            return Err(RngError::InvalidRange(format!(
                "n = {} must be in 1..={} for {}",
                n,
                range,
                self.name()
            )));
        }
        Ok(self.scaled_draw(n))
    }

    /// `count` raw outputs
    pub fn fill_ints(&mut self, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.next_int()).collect()
    }

    /// `count` doubles in `[0.0, 1.0)`
    pub fn fill_floats(&mut self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.next_float()).collect()
    }

    /// `count` integers in `[0, bound)`
    pub fn fill_uniform_ints(&mut self, bound: u64, count: usize) -> Result<Vec<u64>> {
        (0..count).map(|_| self.uniform_int(bound)).collect()
    }

    /// Overwrite this handle's state with a copy of `other`'s
    ///
    /// # Errors
    /// `AlgorithmMismatch` if the two handles use different algorithms; the
    /// target is left untouched.
    pub fn copy_from(&mut self, other: &Generator) -> Result<()> {
        if self.name() != other.name() {
            return Err(RngError::AlgorithmMismatch {
                expected: self.name().to_string(),
                found: other.name().to_string(),
            });
        }
        self.algorithm = other.algorithm.clone_box();
        self.seed = other.seed;
        Ok(())
    }

    /// Registry name of the bound algorithm
    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    pub fn min(&self) -> u64 {
        self.descriptor.min()
    }

    pub fn max(&self) -> u64 {
        self.descriptor.max()
    }

    /// Seed applied at creation or by the last `set_seed`
    ///
    /// Restoring a serialized state does not change this value.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn descriptor(&self) -> &'static AlgorithmDescriptor {
        self.descriptor
    }

    /// Current state image, exactly `state_size` bytes
    pub(crate) fn state_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.descriptor.state_size());
        self.algorithm.write_state(&mut out);
        out
    }

    /// Replace the state image; caller has checked the length
    pub(crate) fn load_state_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.algorithm.read_state(bytes)
    }

    fn scaled_draw(&mut self, n: u64) -> u64 {
        let offset = self.min();
        let scale = (self.max() - offset) / n;
        loop {
            // Some seeds pin an LCG at 0, below its declared minimum
            let k = self.algorithm.get().saturating_sub(offset) / scale;
            if k < n {
                return k;
            }
        }
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("algorithm", &self.name())
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Lets a `Generator` drive the `rand` ecosystem
///
/// Full-width 32-bit variants hand their output through directly. Every other
/// variant builds each 32-bit word from two unbiased 16-bit draws, since raw
/// outputs of 31-bit or offset generators do not cover every bit pattern.
impl rand::RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        if self.min() == 0 && self.max() == u64::from(u32::MAX) {
            return self.next_int() as u32;
        }
        let hi = self.scaled_draw(1 << 16) as u32;
        let lo = self.scaled_draw(1 << 16) as u32;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}
