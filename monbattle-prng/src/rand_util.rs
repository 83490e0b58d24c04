use crate::PseudoRandomNumberGenerator;

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random floating point value in the closed range `[0, 1]`.
pub fn unit_interval(prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
    let value = prng.next() & u32::MAX as u64;
    value as f64 / u32::MAX as f64
}

/// Returns a random element from the given slice.
///
/// A slice of length one is returned without advancing the generator.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    if slice.len() <= 1 {
        return slice.first();
    }
    let index = range(prng, 0, slice.len() as u64);
    slice.get(index as usize)
}
