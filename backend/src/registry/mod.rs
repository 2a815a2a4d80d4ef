//! Algorithm registry
//!
//! A fixed catalog of generator variants, built at compile time and never
//! mutated. `count()` and `list()` read the same table, so they cannot drift.
//!
//! Definition order is the catalog order below. It is stable for the life of
//! the process but is not alphabetical.

use crate::error::{Result, RngError};
use crate::rng::{
    Algorithm, Lecuyer21, Minstd, Mt19937, Rand, Randu, R250, Taus, Taus2, Transputer, Vax,
    Xorshift64Star,
};
use std::slice;

/// Algorithm used when a caller does not name one
pub const DEFAULT_ALGORITHM: &str = "mt19937";

/// Immutable description of one registered algorithm variant
#[derive(Debug)]
pub struct AlgorithmDescriptor {
    name: &'static str,
    state_size: usize,
    default_seed: u64,
    min: u64,
    max: u64,
    factory: fn() -> Box<dyn Algorithm>,
}

impl AlgorithmDescriptor {
    /// Unique registry name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Exact length in bytes of this variant's serialized state
    pub fn state_size(&self) -> usize {
        self.state_size
    }

    /// Seed used when none is supplied; seeding with 0 is equivalent
    pub fn default_seed(&self) -> u64 {
        self.default_seed
    }

    /// Smallest value `next_int` can return
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Largest value `next_int` can return
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Fresh algorithm instance in its default-seeded state
    pub(crate) fn instantiate(&self) -> Box<dyn Algorithm> {
        (self.factory)()
    }
}

fn boxed<A: Algorithm + Default + 'static>() -> Box<dyn Algorithm> {
    Box::new(A::default())
}

static CATALOG: [AlgorithmDescriptor; 11] = [
    AlgorithmDescriptor {
        name: "mt19937",
        state_size: Mt19937::STATE_SIZE,
        default_seed: Mt19937::DEFAULT_SEED,
        min: Mt19937::MIN,
        max: Mt19937::MAX,
        factory: boxed::<Mt19937>,
    },
    AlgorithmDescriptor {
        name: "taus",
        state_size: Taus::STATE_SIZE,
        default_seed: Taus::DEFAULT_SEED,
        min: Taus::MIN,
        max: Taus::MAX,
        factory: boxed::<Taus>,
    },
    AlgorithmDescriptor {
        name: "taus2",
        state_size: Taus2::STATE_SIZE,
        default_seed: Taus2::DEFAULT_SEED,
        min: Taus2::MIN,
        max: Taus2::MAX,
        factory: boxed::<Taus2>,
    },
    AlgorithmDescriptor {
        name: "r250",
        state_size: R250::STATE_SIZE,
        default_seed: R250::DEFAULT_SEED,
        min: R250::MIN,
        max: R250::MAX,
        factory: boxed::<R250>,
    },
    AlgorithmDescriptor {
        name: "rand",
        state_size: Rand::STATE_SIZE,
        default_seed: Rand::DEFAULT_SEED,
        min: Rand::MIN,
        max: Rand::MAX,
        factory: boxed::<Rand>,
    },
    AlgorithmDescriptor {
        name: "minstd",
        state_size: Minstd::STATE_SIZE,
        default_seed: Minstd::DEFAULT_SEED,
        min: Minstd::MIN,
        max: Minstd::MAX,
        factory: boxed::<Minstd>,
    },
    AlgorithmDescriptor {
        name: "lecuyer21",
        state_size: Lecuyer21::STATE_SIZE,
        default_seed: Lecuyer21::DEFAULT_SEED,
        min: Lecuyer21::MIN,
        max: Lecuyer21::MAX,
        factory: boxed::<Lecuyer21>,
    },
    AlgorithmDescriptor {
        name: "vax",
        state_size: Vax::STATE_SIZE,
        default_seed: Vax::DEFAULT_SEED,
        min: Vax::MIN,
        max: Vax::MAX,
        factory: boxed::<Vax>,
    },
    AlgorithmDescriptor {
        name: "transputer",
        state_size: Transputer::STATE_SIZE,
        default_seed: Transputer::DEFAULT_SEED,
        min: Transputer::MIN,
        max: Transputer::MAX,
        factory: boxed::<Transputer>,
    },
    AlgorithmDescriptor {
        name: "randu",
        state_size: Randu::STATE_SIZE,
        default_seed: Randu::DEFAULT_SEED,
        min: Randu::MIN,
        max: Randu::MAX,
        factory: boxed::<Randu>,
    },
    AlgorithmDescriptor {
        name: "xorshift64star",
        state_size: Xorshift64Star::STATE_SIZE,
        default_seed: Xorshift64Star::DEFAULT_SEED,
        min: Xorshift64Star::MIN,
        max: Xorshift64Star::MAX,
        factory: boxed::<Xorshift64Star>,
    },
];

/// Number of registered algorithm variants
pub fn count() -> usize {
    CATALOG.len()
}

/// All descriptors in definition order
///
/// The iterator is finite and cheap; call again to restart.
///
/// # Example
/// ```
/// use rngstate_core::registry;
///
/// let names: Vec<_> = registry::list().map(|d| d.name()).collect();
/// assert_eq!(names.len(), registry::count());
/// assert_eq!(names[0], "mt19937");
/// ```
pub fn list() -> slice::Iter<'static, AlgorithmDescriptor> {
    CATALOG.iter()
}

/// Find a descriptor by exact name
pub fn lookup(name: &str) -> Result<&'static AlgorithmDescriptor> {
    CATALOG
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| RngError::UnknownAlgorithm(name.to_string()))
}

/// Descriptor for [`DEFAULT_ALGORITHM`]
pub fn default_descriptor() -> &'static AlgorithmDescriptor {
    &CATALOG[0]
}

/// Largest state size of any registered variant
pub fn max_state_size() -> usize {
    CATALOG.iter().map(|d| d.state_size).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let names: HashSet<_> = list().map(|d| d.name()).collect();
        assert_eq!(names.len(), count());
    }

    #[test]
    fn test_default_descriptor_is_default_algorithm() {
        assert_eq!(default_descriptor().name(), DEFAULT_ALGORITHM);
    }

    #[test]
    fn test_instantiated_state_matches_declared_size() {
        for descriptor in list() {
            let algorithm = descriptor.instantiate();
            let mut out = Vec::new();
            algorithm.write_state(&mut out);
            assert_eq!(
                out.len(),
                descriptor.state_size(),
                "{} wrote {} bytes, declared {}",
                descriptor.name(),
                out.len(),
                descriptor.state_size()
            );
        }
    }

    #[test]
    fn test_ranges_support_sixteen_bit_draws() {
        // Generator::next_u32 assembles words from 16-bit scaled draws
        for descriptor in list() {
            assert!(descriptor.max() - descriptor.min() >= 1 << 16, "{}", descriptor.name());
        }
    }

    #[test]
    fn test_max_state_size_is_mt19937() {
        assert_eq!(max_state_size(), Mt19937::STATE_SIZE);
    }
}
