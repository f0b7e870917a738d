//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct provides a simple interface for
//! generating random floating-point numbers within a specified range using
//! the `rand` crate. The generator is threaded explicitly through candidate
//! construction and mutation, so a seeded instance makes an entire search
//! reproducible.
//!
//! ## Example
//!
//! ```rust
//! use evoline::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let draw = rng.uniform(0.0, 1.0);
//!
//! assert!((0.0..=1.0).contains(&draw));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// A wrapper around the `rand` crate's `StdRng` that provides methods for
/// generating random numbers within a specified range.
#[derive(Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible searches, tests, and benchmarks.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed to use for the random number generator.
    ///
    /// # Returns
    ///
    /// A new `RandomNumberGenerator` instance.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a single random floating-point number in `[from, to]`.
    ///
    /// The range is inclusive on both ends, matching the closed intervals
    /// used for candidate initialization and mutation.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..=to)
    }

    /// Generates a specified number of random floating-point numbers within
    /// the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (inclusive).
    /// - `num`: The number of random numbers to generate.
    ///
    /// # Returns
    ///
    /// A `VecDeque` containing the generated random numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evoline::rng::RandomNumberGenerator;
    ///
    /// let mut rng = RandomNumberGenerator::new();
    /// let random_numbers = rng.fetch_uniform(0.0, 1.0, 5);
    ///
    /// for number in random_numbers {
    ///     println!("Random Number: {}", number);
    /// }
    /// ```
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..=to)));
        uniform_numbers
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = RandomNumberGenerator::new();

        for _ in 0..100 {
            let draw = rng.uniform(-0.2, 0.2);
            assert!((-0.2..=0.2).contains(&draw));
        }
    }

    #[test]
    fn test_fetch_uniform_with_positive_range() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(0.0, 1.0, 5);

        assert_eq!(result.len(), 5);

        for &num in result.iter() {
            assert!((0.0..=1.0).contains(&num));
        }
    }

    #[test]
    fn test_fetch_uniform_with_negative_range() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(-1.0, 1.0, 3);

        assert_eq!(result.len(), 3);

        for &num in result.iter() {
            assert!((-1.0..=1.0).contains(&num));
        }
    }

    #[test]
    fn test_fetch_uniform_with_empty_result() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(1.0, 2.0, 0);

        assert!(result.is_empty());
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = RandomNumberGenerator::from_seed(42);

        let nums1 = rng1.fetch_uniform(0.0, 1.0, 5);
        let nums2 = rng2.fetch_uniform(0.0, 1.0, 5);

        assert_eq!(nums1, nums2);
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        // Both RNGs should generate the same sequence after cloning
        let nums1 = rng1.fetch_uniform(0.0, 1.0, 5);
        let nums2 = rng2.fetch_uniform(0.0, 1.0, 5);

        assert_eq!(nums1, nums2);
    }
}
