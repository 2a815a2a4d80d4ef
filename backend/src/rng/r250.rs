//! R250 shift-register sequence (Kirkpatrick & Stoll)
//!
//! `x[n] = x[n-103] ^ x[n-250]` over a 250-word ring. The ring is filled by
//! the 69069 LCG and then 32 words get a diagonal of forced bits so the
//! vectors are linearly independent.

use super::{lcg69069, write_u32, Algorithm, StateReader, TWO_POW_32};
use crate::error::{Result, RngError};

const WORDS: usize = 250;

#[derive(Debug, Clone)]
pub struct R250 {
    i: usize,
    x: Box<[u32; WORDS]>,
}

impl R250 {
    pub const STATE_SIZE: usize = 4 + WORDS * 4;
    pub const DEFAULT_SEED: u64 = 1;
    pub const MIN: u64 = 0;
    pub const MAX: u64 = u32::MAX as u64;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            i: 0,
            x: Box::new([0u32; WORDS]),
        };
        rng.set(seed);
        rng
    }
}

impl Default for R250 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl Algorithm for R250 {
    fn set(&mut self, seed: u64) {
        let seed = if seed == 0 { 1 } else { seed };
        let mut s = seed as u32;
        self.i = 0;

        for word in self.x.iter_mut() {
            s = lcg69069(s);
            *word = s;
        }

        let mut msb = 0x8000_0000u32;
        let mut mask = 0xffff_ffffu32;
        for i in 0..32 {
            let k = 7 * i + 3;
            self.x[k] &= mask;
            self.x[k] |= msb;
            mask >>= 1;
            msb >>= 1;
        }
    }

    fn get(&mut self) -> u64 {
        let i = self.i;
        let j = if i >= 147 { i - 147 } else { i + 103 };

        let k = self.x[i] ^ self.x[j];
        self.x[i] = k;
        self.i = if i >= WORDS - 1 { 0 } else { i + 1 };

        u64::from(k)
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO_POW_32
    }

    fn write_state(&self, out: &mut Vec<u8>) {
        write_u32(out, self.i as u32);
        for &word in self.x.iter() {
            write_u32(out, word);
        }
    }

    fn read_state(&mut self, bytes: &[u8]) -> Result<()> {
        let mut reader = StateReader::new(bytes);
        let i = reader.read_u32()? as usize;
        let mut x = Box::new([0u32; WORDS]);
        for word in x.iter_mut() {
            *word = reader.read_u32()?;
        }
        reader.finish()?;

        if i >= WORDS {
            return Err(RngError::CorruptState(format!(
                "r250 index {} exceeds {}",
                i,
                WORDS - 1
            )));
        }

        self.i = i;
        self.x = x;
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
    fn test_index_wraps_after_full_ring() {
        let mut rng = R250::new(42);
        for _ in 0..WORDS {
            rng.get();
        }
        assert_eq!(rng.i, 0);
    }

    #[test]
    fn test_diagonal_bits_forced() {
        let rng = R250::new(42);
        for i in 0..32 {
            let msb = 0x8000_0000u32 >> i;
            assert_ne!(rng.x[7 * i + 3] & msb, 0, "bit not forced at word {}", 7 * i + 3);
        }
    }

    #[test]
    fn test_index_out_of_range_rejected() {
        let mut rng = R250::new(3);
        let mut bytes = Vec::new();
        rng.write_state(&mut bytes);
        bytes[..4].copy_from_slice(&(WORDS as u32).to_le_bytes());
        assert!(matches!(rng.read_state(&bytes), Err(RngError::CorruptState(_))));
    }
}
