//! # TruncationStrategy
//!
//! The `TruncationStrategy` struct carries one population to the next: the
//! fitter half survives unchanged, and each survivor contributes one
//! offspring. Offspring are recombined in disjoint adjacent pairs (both
//! members of a pair receive the pair's mean slope and mean intercept) and
//! then mutated independently, which re-diverges the momentarily identical
//! siblings.
//!
//! ## Example
//!
//! ```rust
//! use evoline::breeding::TruncationStrategy;
//! use evoline::candidate::{Candidate, InitRange};
//! use evoline::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let range = InitRange::new(-2.0, 2.0);
//! let population: Vec<Candidate> = (0..4).map(|_| Candidate::random(range, &mut rng)).collect();
//!
//! let strategy = TruncationStrategy::default();
//! let next = strategy.advance(&population, &mut rng).unwrap();
//!
//! assert_eq!(next.len(), population.len());
//! ```

use std::cmp::Ordering;

use tracing::trace;

use crate::candidate::Candidate;
use crate::error::{RegressionError, Result};
use crate::rng::RandomNumberGenerator;

/// Default half-width of the uniform mutation applied to progeny parameters.
pub const DEFAULT_MUTATION_STEP: f64 = 0.2;

/// Truncation selection plus pairwise-mean recombination and uniform mutation.
#[derive(Debug, Clone)]
pub struct TruncationStrategy {
    mutation_step: f64,
}

impl TruncationStrategy {
    /// Creates a strategy with a custom mutation half-width.
    pub fn new(mutation_step: f64) -> Self {
        Self { mutation_step }
    }

    pub fn mutation_step(&self) -> f64 {
        self.mutation_step
    }

    /// Produces the next generation from an evaluated population.
    ///
    /// The input is not modified. Survivors keep their evaluated `error`;
    /// progeny come back unevaluated. The returned population has the same
    /// size as the input.
    ///
    /// # Errors
    ///
    /// Returns `RegressionError::EmptyPopulation` for an empty population and
    /// `RegressionError::Configuration` when the population size is odd,
    /// below 2, or leaves an elite half that cannot be paired.
    pub fn advance(
        &self,
        population: &[Candidate],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Candidate>> {
        if population.is_empty() {
            return Err(RegressionError::EmptyPopulation);
        }

        if population.len() < 2 || population.len() % 2 != 0 {
            return Err(RegressionError::Configuration(format!(
                "population size must be even and at least 2, got {}",
                population.len()
            )));
        }

        let elite_size = population.len() / 2;
        if elite_size % 2 != 0 {
            return Err(RegressionError::Configuration(format!(
                "elite half must pair evenly for recombination, got {} survivors",
                elite_size
            )));
        }

        let mut elite = population.to_vec();
        elite.sort_by(compare_by_error);
        elite.truncate(elite_size);

        let mut progeny: Vec<Candidate> = elite.iter().map(Candidate::offspring).collect();

        for pair in progeny.chunks_exact_mut(2) {
            let slope = (pair[0].slope() + pair[1].slope()) / 2.0;
            let intercept = (pair[0].intercept() + pair[1].intercept()) / 2.0;
            pair[0].set_line(slope, intercept);
            pair[1].set_line(slope, intercept);
        }

        for child in &mut progeny {
            child.mutate(self.mutation_step, rng);
        }

        trace!(
            elite = elite.len(),
            progeny = progeny.len(),
            "population advanced"
        );

        elite.extend(progeny);
        Ok(elite)
    }
}

impl Default for TruncationStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MUTATION_STEP)
    }
}

/// Ascending by error. NaN orders last so it can never enter the elite; ties
/// keep their original order because the sort is stable.
pub(crate) fn compare_by_error(a: &Candidate, b: &Candidate) -> Ordering {
    a.error().partial_cmp(&b.error()).unwrap_or_else(|| {
        if a.error().is_nan() {
            Ordering::Greater
        } else if b.error().is_nan() {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}
