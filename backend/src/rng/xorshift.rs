//! xorshift64* random number generator
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. Seed 0 is mapped to 1
//! because an all-zero state never leaves zero.

use super::{write_u64, Algorithm, StateReader};
use crate::error::{Result, RngError};

/// xorshift64* with a single 64-bit state word
#[derive(Debug, Clone)]
pub struct Xorshift64Star {
    state: u64,
}

impl Xorshift64Star {
    pub const STATE_SIZE: usize = 8;
    pub const DEFAULT_SEED: u64 = 1;
    pub const MIN: u64 = 1;
    pub const MAX: u64 = u64::MAX;

    /// Create a generator seeded with `seed`
    ///
    /// # Example
    /// ```
    /// use rngstate_core::rng::{Algorithm, Xorshift64Star};
    ///
    /// let mut rng = Xorshift64Star::new(12345);
    /// let value = rng.get();
    /// assert!(value >= Xorshift64Star::MIN);
    /// ```
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 1 };
        rng.set(seed);
        rng
    }
}

impl Default for Xorshift64Star {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl Algorithm for Xorshift64Star {
    fn set(&mut self, seed: u64) {
        // Ensure seed is never zero (xorshift requirement)
        self.state = if seed == 0 { 1 } else { seed };
    }

    fn get(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    fn get_double(&mut self) -> f64 {
        let value = self.get();
        // Top 53 bits scaled by 2^-53
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    fn write_state(&self, out: &mut Vec<u8>) {
        write_u64(out, self.state);
    }

    fn read_state(&mut self, bytes: &[u8]) -> Result<()> {
        let mut reader = StateReader::new(bytes);
        let state = reader.read_u64()?;
        reader.finish()?;
        if state == 0 {
            return Err(RngError::CorruptState(
                "xorshift64star state must be non-zero".to_string(),
            ));
        }
        self.state = state;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Algorithm> {
        Box::new(self.clone())
    }
}
