//! Single-word linear congruential generators
//!
//! These are kept for reproducing historical sequences, not for quality:
//! `randu` in particular is famously bad. Each one's seeding rule is the
//! classic one, so seed 0 behaves differently across them.

use super::{write_u32, Algorithm, StateReader, TWO_POW_31, TWO_POW_32};
use crate::error::Result;

fn read_word(bytes: &[u8]) -> Result<u32> {
    let mut reader = StateReader::new(bytes);
    let x = reader.read_u32()?;
    reader.finish()?;
    Ok(x)
}

/// BSD `rand()`: `x = (1103515245 x + 12345) mod 2^31`
///
/// No zero-seed substitution; seed 0 is an ordinary seed.
#[derive(Debug, Clone, Default)]
pub struct Rand {
    x: u32,
}

impl Rand {
    pub const STATE_SIZE: usize = 4;
    pub const DEFAULT_SEED: u64 = 0;
    pub const MIN: u64 = 0;
    pub const MAX: u64 = 0x7fff_ffff;
}

impl Algorithm for Rand {
    fn set(&mut self, seed: u64) {
        self.x = seed as u32;
    }

    fn get(&mut self) -> u64 {
        self.x = 1_103_515_245u32.wrapping_mul(self.x).wrapping_add(12345) & 0x7fff_ffff;
        u64::from(self.x)
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO_POW_31
    }

    fn write_state(&self, out: &mut Vec<u8>) {
        write_u32(out, self.x);
    }

    fn read_state(&mut self, bytes: &[u8]) -> Result<()> {
        self.x = read_word(bytes)?;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Algorithm> {
        Box::new(self.clone())
    }
}

/// Park & Miller minimal standard: `x = 16807 x mod (2^31 - 1)`
#[derive(Debug, Clone)]
pub struct Minstd {
    x: u32,
}

impl Minstd {
    pub const STATE_SIZE: usize = 4;
    pub const DEFAULT_SEED: u64 = 1;
    pub const MIN: u64 = 1;
    pub const MAX: u64 = 2_147_483_646;
    const M: u64 = 2_147_483_647;
}

impl Default for Minstd {
    fn default() -> Self {
        Self { x: 1 }
    }
}

impl Algorithm for Minstd {
    fn set(&mut self, seed: u64) {
        let s = if seed == 0 { 1 } else { seed };
        self.x = (s & Self::M) as u32;
    }

    fn get(&mut self) -> u64 {
        self.x = ((16807 * u64::from(self.x)) % Self::M) as u32;
        u64::from(self.x)
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / 2_147_483_647.0
    }

    fn write_state(&self, out: &mut Vec<u8>) {
        write_u32(out, self.x);
    }

    fn read_state(&mut self, bytes: &[u8]) -> Result<()> {
        self.x = read_word(bytes)?;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Algorithm> {
        Box::new(self.clone())
    }
}

/// L'Ecuyer's 1988 multiplicative generator: `x = 40692 x mod 2147483399`
#[derive(Debug, Clone)]
pub struct Lecuyer21 {
    x: u32,
}

impl Lecuyer21 {
    pub const STATE_SIZE: usize = 4;
    pub const DEFAULT_SEED: u64 = 1;
    pub const MIN: u64 = 1;
    pub const MAX: u64 = 2_147_483_398;
    const M: u64 = 2_147_483_399;
}

impl Default for Lecuyer21 {
    fn default() -> Self {
        Self { x: 1 }
    }
}

impl Algorithm for Lecuyer21 {
    fn set(&mut self, seed: u64) {
        // Any multiple of the modulus would pin the state at zero
        let s = if seed % Self::M == 0 { 1 } else { seed };
        self.x = (s % Self::M) as u32;
    }

    fn get(&mut self) -> u64 {
        self.x = ((40692 * u64::from(self.x)) % Self::M) as u32;
        u64::from(self.x)
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / 2_147_483_399.0
    }

    fn write_state(&self, out: &mut Vec<u8>) {
        write_u32(out, self.x);
    }

    fn read_state(&mut self, bytes: &[u8]) -> Result<()> {
        self.x = read_word(bytes)?;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Algorithm> {
        Box::new(self.clone())
    }
}

/// VAX `MTH$RANDOM`: `x = (69069 x + 1) mod 2^32`
#[derive(Debug, Clone, Default)]
pub struct Vax {
    x: u32,
}

impl Vax {
    pub const STATE_SIZE: usize = 4;
    pub const DEFAULT_SEED: u64 = 0;
    pub const MIN: u64 = 0;
    pub const MAX: u64 = u32::MAX as u64;
}

impl Algorithm for Vax {
    fn set(&mut self, seed: u64) {
        self.x = seed as u32;
    }

    fn get(&mut self) -> u64 {
        self.x = 69069u32.wrapping_mul(self.x).wrapping_add(1);
        u64::from(self.x)
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO_POW_32
    }

    fn write_state(&self, out: &mut Vec<u8>) {
        write_u32(out, self.x);
    }

    fn read_state(&mut self, bytes: &[u8]) -> Result<()> {
        self.x = read_word(bytes)?;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Algorithm> {
        Box::new(self.clone())
    }
}

/// INMOS Transputer generator: `x = 1664525 x mod 2^32`
#[derive(Debug, Clone)]
pub struct Transputer {
    x: u32,
}

impl Transputer {
    pub const STATE_SIZE: usize = 4;
    pub const DEFAULT_SEED: u64 = 1;
    pub const MIN: u64 = 1;
    pub const MAX: u64 = u32::MAX as u64;
}

impl Default for Transputer {
    fn default() -> Self {
        Self { x: 1 }
    }
}

impl Algorithm for Transputer {
    fn set(&mut self, seed: u64) {
        let s = if seed == 0 { 1 } else { seed };
        self.x = s as u32;
    }

    fn get(&mut self) -> u64 {
        self.x = 1_664_525u32.wrapping_mul(self.x);
        u64::from(self.x)
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO_POW_32
    }

    fn write_state(&self, out: &mut Vec<u8>) {
        write_u32(out, self.x);
    }

    fn read_state(&mut self, bytes: &[u8]) -> Result<()> {
        self.x = read_word(bytes)?;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Algorithm> {
        Box::new(self.clone())
    }
}

/// IBM RANDU: `x = 65539 x mod 2^31`
#[derive(Debug, Clone)]
pub struct Randu {
    x: u32,
}

impl Randu {
    pub const STATE_SIZE: usize = 4;
    pub const DEFAULT_SEED: u64 = 1;
    pub const MIN: u64 = 1;
    pub const MAX: u64 = 0x7fff_ffff;
}

impl Default for Randu {
    fn default() -> Self {
        Self { x: 1 }
    }
}

impl Algorithm for Randu {
    fn set(&mut self, seed: u64) {
        let s = if seed == 0 { 1 } else { seed };
        self.x = (s & 0x7fff_ffff) as u32;
    }

    fn get(&mut self) -> u64 {
        self.x = 65539u32.wrapping_mul(self.x) & 0x7fff_ffff;
        u64::from(self.x)
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO_POW_31
    }

    fn write_state(&self, out: &mut Vec<u8>) {
        write_u32(out, self.x);
    }

    fn read_state(&mut self, bytes: &[u8]) -> Result<()> {
        self.x = read_word(bytes)?;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Algorithm> {
        Box::new(self.clone())
    }
}
