#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod rand_util;

use core::any::Any;

/// A pseudo-random number generator that can be deterministically "replayed" from its seed.
///
/// Every random decision in a battle (stat rolls, move draws, damage jitter) is pulled from a
/// single generator, so two battles created with the same seed play out identically given the
/// same choices.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// Returns the initial seed the generator was created with.
    fn initial_seed(&self) -> u64;

    /// Returns the next integer in the sequence.
    ///
    /// Only the lower 32 bits are guaranteed to carry randomness.
    fn next(&mut self) -> u64;

    /// Mutable cast to [`Any`] for testing.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A real implementation of [`PseudoRandomNumberGenerator`].
#[derive(Debug, Clone)]
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    seed: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Creates a new random number generator.
    ///
    /// If two random number generators are created with the same seed, their output is exactly
    /// the same. A seed is generated when none is given.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(Self::generate_seed);
        Self {
            initial_seed: seed,
            seed,
        }
    }

    #[cfg(feature = "std")]
    fn generate_seed() -> u64 {
        use rand::Rng;
        rand::rng().random()
    }

    #[cfg(not(feature = "std"))]
    fn generate_seed() -> u64 {
        0x2545F4914F6CDD1D
    }

    /// Linear Congruential Generator (LCRNG).
    fn next_seed(seed: u64) -> u64 {
        const A: u64 = 0x5D588B656C078965;
        const C: u64 = 0x0000000000269EC3;
        seed.wrapping_mul(A).wrapping_add(C)
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.seed = Self::next_seed(self.seed);
        // The lower bits of an LCG are predictable.
        self.seed >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
