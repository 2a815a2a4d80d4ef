//! Pseudo-random generation algorithms
//!
//! Each variant implements [`Algorithm`]. A variant's serialized state is a
//! fixed-width little-endian image of its words, exactly as long as the
//! `STATE_SIZE` its registry descriptor declares.
//!
//! CRITICAL: Seeding must be bit-exact with the published definition of
//! each variant, including how it treats seed 0. Do not "fix" those quirks.

mod lcg;
mod mt19937;
mod r250;
mod taus;
mod xorshift;

pub use lcg::{Lecuyer21, Minstd, Rand, Randu, Transputer, Vax};
pub use mt19937::Mt19937;
pub use r250::R250;
pub use taus::{Taus, Taus2};
pub use xorshift::Xorshift64Star;

use crate::error::{Result, RngError};
use std::fmt;

/// A single pseudo-random algorithm and its mutable state
///
/// Implementations are plain state machines: `set` initializes the state
/// from a seed, `get` advances it by one step. They know nothing about
/// registry names or files.
pub trait Algorithm: fmt::Debug + Send {
    /// Re-initialize the state from `seed`, applying the variant's zero-seed rule
    fn set(&mut self, seed: u64);

    /// Advance the state and return the next raw output in `[min, max]`
    fn get(&mut self) -> u64;

    /// Advance the state and return a double in `[0.0, 1.0)`
    fn get_double(&mut self) -> f64;

    /// Append exactly `STATE_SIZE` bytes describing the current state
    fn write_state(&self, out: &mut Vec<u8>);

    /// Replace the state from `bytes`
    ///
    /// The caller guarantees `bytes.len() == STATE_SIZE`. Contents that
    /// decode to an impossible state return `CorruptState` and leave the
    /// current state untouched.
    fn read_state(&mut self, bytes: &[u8]) -> Result<()>;

    /// Independent copy of this algorithm and its state
    fn clone_box(&self) -> Box<dyn Algorithm>;
}

impl Clone for Box<dyn Algorithm> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Cursor over a state payload
pub(crate) struct StateReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> StateReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32> {
        let word = self.take::<4>()?;
        Ok(u32::from_le_bytes(word))
    }

    pub(crate) fn read_u64(&mut self) -> Result<u64> {
        let word = self.take::<8>()?;
        Ok(u64::from_le_bytes(word))
    }

    /// Fail unless every byte was consumed
    pub(crate) fn finish(self) -> Result<()> {
        if self.pos == self.bytes.len() {
            Ok(())
        } else {
            Err(RngError::CorruptState(format!(
                "{} unread bytes after state",
                self.bytes.len() - self.pos
            )))
        }
    }

    fn take<const W: usize>(&mut self) -> Result<[u8; W]> {
        let end = self.pos + W;
        let slice = self.bytes.get(self.pos..end).ok_or_else(|| {
            RngError::CorruptState(format!(
                "state ends at byte {}, expected at least {}",
                self.bytes.len(),
                end
            ))
        })?;
        let mut word = [0u8; W];
        word.copy_from_slice(slice);
        self.pos = end;
        Ok(word)
    }
}

pub(crate) fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub(crate) fn write_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Seeding LCG shared by the Tausworthe and R250 families
#[inline]
pub(crate) fn lcg69069(n: u32) -> u32 {
    69069u32.wrapping_mul(n)
}

/// 2^32 as f64, divisor for full-width 32-bit generators
pub(crate) const TWO_POW_32: f64 = 4_294_967_296.0;

/// 2^31 as f64, divisor for 31-bit generators
pub(crate) const TWO_POW_31: f64 = 2_147_483_648.0;
