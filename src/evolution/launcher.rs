//! # SearchLauncher
//!
//! Drives the full search: for each independent run, a fresh random
//! population is evolved for a fixed number of generations, re-evaluated one
//! final time, and its best candidate compared against the best seen so far.
//! Restarting from scratch several times reduces the chance that the
//! truncation-and-averaging dynamics settle on a poor local optimum.
//!
//! ## Example
//!
//! ```rust
//! use evoline::breeding::TruncationStrategy;
//! use evoline::dataset::{DataPoint, Dataset};
//! use evoline::evolution::{SearchLauncher, SearchOptions};
//! use evoline::fitness::AbsoluteResidual;
//! use evoline::rng::RandomNumberGenerator;
//!
//! let dataset = Dataset::from_points(vec![
//!     DataPoint { x: 0.0, y: 1.0 },
//!     DataPoint { x: 1.0, y: 3.0 },
//! ]);
//! let options = SearchOptions::builder()
//!     .population_size(4)
//!     .num_runs(2)
//!     .num_generations(25)
//!     .build();
//! let launcher = SearchLauncher::new(
//!     TruncationStrategy::default(),
//!     AbsoluteResidual::new(&dataset),
//! );
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let outcome = launcher.search(&options, &mut rng).unwrap();
//! assert!(outcome.error.is_finite());
//! ```

use std::fmt;

use tracing::{debug, info, trace};

use super::options::SearchOptions;
use crate::breeding::{compare_by_error, TruncationStrategy};
use crate::candidate::Candidate;
use crate::error::{OptionExt, RegressionError, Result};
use crate::fitness::{evaluate, Challenge};
use crate::rng::RandomNumberGenerator;

/// The best line found by a search, in report form.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Sum of absolute residuals of the best line.
    pub error: f64,
    pub slope: f64,
    pub intercept: f64,
}

impl fmt::Display for SearchOutcome {
    /// Renders the report of the search, each value to two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: {:.2}\nm: {:.2}\nb: {:.2}",
            self.error, self.slope, self.intercept
        )
    }
}

/// Manages the multi-run evolutionary search using a breeding strategy and a
/// scoring challenge.
#[derive(Debug, Clone)]
pub struct SearchLauncher<C>
where
    C: Challenge,
{
    strategy: TruncationStrategy,
    challenge: C,
}

impl<C> SearchLauncher<C>
where
    C: Challenge,
{
    /// Creates a new `SearchLauncher` from a breeding strategy and the
    /// challenge used to score candidates.
    pub fn new(strategy: TruncationStrategy, challenge: C) -> Self {
        Self {
            strategy,
            challenge,
        }
    }

    /// Runs the configured number of independent searches and returns the
    /// best line found across all of them.
    ///
    /// Each run starts from a fresh random population, evolves it for the
    /// configured number of generations, and is scored by one explicit final
    /// evaluation pass, so the reading always reflects the population that
    /// the last advance produced. The cross-run comparison uses strict
    /// less-than; ties keep the earlier run's representative.
    ///
    /// All randomness is drawn from `rng`, so a seeded generator makes the
    /// whole search reproducible.
    ///
    /// # Errors
    ///
    /// Returns `RegressionError::Configuration` if the options fail
    /// validation and `RegressionError::FitnessCalculation` if scoring
    /// produces a non-finite value.
    pub fn search(
        &self,
        options: &SearchOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<SearchOutcome> {
        options.validate()?;

        let mut best: Option<SearchOutcome> = None;

        for run in 0..options.num_runs() {
            let mut population: Vec<Candidate> = (0..options.population_size())
                .map(|_| Candidate::random(options.init_range(), rng))
                .collect();

            self.run_generations(&mut population, options, rng)?;

            // The last advance left the progeny unscored.
            evaluate(&mut population, &self.challenge, options.parallel_threshold())?;

            let run_best = best_of(&population)?;
            debug!(run, error = run_best.error(), "run complete");

            let improved = best
                .as_ref()
                .map_or(true, |current| run_best.error() < current.error);
            if improved {
                best = Some(SearchOutcome {
                    error: run_best.error(),
                    slope: run_best.slope(),
                    intercept: run_best.intercept(),
                });
            }
        }

        let outcome = best.ok_or_else_regression(|| RegressionError::EmptyPopulation)?;
        info!(
            error = outcome.error,
            slope = outcome.slope,
            intercept = outcome.intercept,
            "search complete"
        );
        Ok(outcome)
    }

    /// One full run: a fixed number of evaluate-then-advance generations,
    /// with no early exit.
    fn run_generations(
        &self,
        population: &mut Vec<Candidate>,
        options: &SearchOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        for generation in 0..options.num_generations() {
            evaluate(population, &self.challenge, options.parallel_threshold())?;
            *population = self.strategy.advance(population, rng)?;
            trace!(generation, "generation advanced");
        }

        Ok(())
    }
}

/// The minimum-error candidate of a population.
fn best_of(population: &[Candidate]) -> Result<&Candidate> {
    population
        .iter()
        .min_by(|a, b| compare_by_error(a, b))
        .ok_or_else_regression(|| RegressionError::EmptyPopulation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::InitRange;
    use crate::dataset::{DataPoint, Dataset};
    use crate::fitness::AbsoluteResidual;

    fn line_dataset() -> Dataset {
        Dataset::from_points(vec![
            DataPoint { x: 0.0, y: 1.0 },
            DataPoint { x: 1.0, y: 3.0 },
            DataPoint { x: 2.0, y: 5.0 },
        ])
    }

    #[test]
    fn test_search_validates_options_before_running() {
        let dataset = line_dataset();
        let launcher = SearchLauncher::new(
            TruncationStrategy::default(),
            AbsoluteResidual::new(&dataset),
        );
        let options = SearchOptions::builder().population_size(5).build();
        let mut rng = RandomNumberGenerator::from_seed(0);

        let result = launcher.search(&options, &mut rng);

        assert!(matches!(result, Err(RegressionError::Configuration(_))));
    }

    #[test]
    fn test_search_returns_a_finite_outcome() {
        let dataset = line_dataset();
        let launcher = SearchLauncher::new(
            TruncationStrategy::default(),
            AbsoluteResidual::new(&dataset),
        );
        let options = SearchOptions::builder()
            .population_size(8)
            .num_runs(2)
            .num_generations(30)
            .init_range(InitRange::new(-2.0, 2.0))
            .build();
        let mut rng = RandomNumberGenerator::from_seed(17);

        let outcome = launcher.search(&options, &mut rng).unwrap();

        assert!(outcome.error.is_finite());
        assert!(outcome.error >= 0.0);
    }

    #[test]
    fn test_best_of_prefers_smallest_error() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let mut population: Vec<Candidate> = (0..4)
            .map(|i| {
                let mut c = Candidate::new(
                    Some(i as f64),
                    Some(0.0),
                    InitRange::default(),
                    &mut rng,
                );
                c.set_error(10.0 - i as f64);
                c
            })
            .collect();
        population[2].set_error(0.5);

        let best = best_of(&population).unwrap();

        assert_eq!(best.slope(), 2.0);
        assert_eq!(best.error(), 0.5);
    }

    #[test]
    fn test_report_renders_two_decimal_places() {
        let outcome = SearchOutcome {
            error: 1.5,
            slope: 2.0,
            intercept: -0.25,
        };

        assert_eq!(outcome.to_string(), "Error: 1.50\nm: 2.00\nb: -0.25");
    }
}
