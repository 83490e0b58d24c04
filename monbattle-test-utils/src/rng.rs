use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use monbattle::{
    Battle,
    rng::{
        PseudoRandomNumberGenerator,
        RealPseudoRandomNumberGenerator,
    },
};

/// A controlled random number generator, for tests that need fine-grained control over battle RNG.
///
/// The underlying generator is always advanced, so faking a value never shifts the rest of the
/// sequence.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }

    /// The number of values generated so far.
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    /// Forces the value at the given (1-based) position of the sequence.
    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(iterable);
    }

    /// Forces upcoming values, where position 1 is the next value generated.
    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let count = self.count;
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(offset, value)| (offset + count, value)),
        );
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(entry) => entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Returns the battle's random number generator if it is a [`ControlledRandomNumberGenerator`].
pub fn get_controlled_rng_for_battle(
    battle: &mut Battle,
) -> Option<&mut ControlledRandomNumberGenerator> {
    battle
        .prng_mut()
        .as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}
