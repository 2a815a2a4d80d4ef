//! MT19937 Mersenne Twister
//!
//! Matsumoto & Nishimura's 32-bit twister with the 2002 initialization
//! (Knuth multiplier 1812433253). Period 2^19937 - 1.
//!
//! Seed 0 is replaced by 4357, the historical default seed of this variant.

use super::{write_u32, Algorithm, StateReader, TWO_POW_32};
use crate::error::{Result, RngError};

const N: usize = 624;
const M: usize = 397;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const MATRIX_A: u32 = 0x9908_b0df;

/// Mersenne Twister state: 624 key words plus the read position
#[derive(Debug, Clone)]
pub struct Mt19937 {
    mt: Box<[u32; N]>,
    mti: usize,
}

impl Mt19937 {
    pub const STATE_SIZE: usize = N * 4 + 4;
    pub const DEFAULT_SEED: u64 = 4357;
    pub const MIN: u64 = 0;
    pub const MAX: u64 = u32::MAX as u64;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            mt: Box::new([0u32; N]),
            mti: N,
        };
        rng.set(seed);
        rng
    }

    /// Regenerate all N words of the key
    fn twist(&mut self) {
        for kk in 0..N {
            let y = (self.mt[kk] & UPPER_MASK) | (self.mt[(kk + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
            self.mt[kk] = self.mt[(kk + M) % N] ^ (y >> 1) ^ mag;
        }
        self.mti = 0;
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl Algorithm for Mt19937 {
    fn set(&mut self, seed: u64) {
        let s = if seed == 0 { Self::DEFAULT_SEED } else { seed };
        self.mt[0] = s as u32;
        for i in 1..N {
            let prev = self.mt[i - 1];
            self.mt[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.mti = N;
    }

    fn get(&mut self) -> u64 {
        if self.mti >= N {
            self.twist();
        }

        let mut y = self.mt[self.mti];
        self.mti += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;

        u64::from(y)
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO_POW_32
    }

    fn write_state(&self, out: &mut Vec<u8>) {
        for &word in self.mt.iter() {
            write_u32(out, word);
        }
        write_u32(out, self.mti as u32);
    }

    fn read_state(&mut self, bytes: &[u8]) -> Result<()> {
        let mut reader = StateReader::new(bytes);
        let mut mt = Box::new([0u32; N]);
        for word in mt.iter_mut() {
            *word = reader.read_u32()?;
        }
        let mti = reader.read_u32()? as usize;
        reader.finish()?;

        if mti > N {
            return Err(RngError::CorruptState(format!(
                "mt19937 position {} exceeds {}",
                mti, N
            )));
        }

        self.mt = mt;
        self.mti = mti;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Algorithm> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_first_output() {
        // Reference init_genrand(5489)
        let mut rng = Mt19937::new(5489);
        assert_eq!(rng.get(), 3_499_211_612);
    }

    #[test]
    fn test_zero_seed_is_default_seed() {
        let mut zero = Mt19937::new(0);
        let mut default = Mt19937::new(Mt19937::DEFAULT_SEED);
        for _ in 0..10 {
            assert_eq!(zero.get(), default.get());
        }
    }

    #[test]
    fn test_state_size_matches_declared() {
        let rng = Mt19937::new(42);
        let mut out = Vec::new();
        rng.write_state(&mut out);
        assert_eq!(out.len(), Mt19937::STATE_SIZE);
    }

    #[test]
    fn test_position_out_of_range_rejected() {
        let mut rng = Mt19937::new(42);
        let mut bytes = Vec::new();
        rng.write_state(&mut bytes);
        let tail = bytes.len() - 4;
        bytes[tail..].copy_from_slice(&(N as u32 + 1).to_le_bytes());

        let expected = rng.clone().get();
        assert!(matches!(rng.read_state(&bytes), Err(RngError::CorruptState(_))));
        assert_eq!(rng.get(), expected, "failed restore must not touch state");
    }
}
