//! # SearchOptions
//!
//! The `SearchOptions` struct represents the configuration of an evolutionary
//! regression search: population size, number of independent runs, number of
//! generations per run, and the initial parameter sampling bounds.
//!
//! Validation is eager: a configuration the breeding step could not process
//! (odd population, unpairable elite half, zero runs or generations) is
//! rejected before any run starts instead of failing mid-search.
//!
//! ## Example
//!
//! ```rust
//! use evoline::candidate::InitRange;
//! use evoline::evolution::SearchOptions;
//!
//! let options = SearchOptions::builder()
//!     .population_size(12)
//!     .num_runs(10)
//!     .num_generations(500)
//!     .init_range(InitRange::new(-2.0, 2.0))
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```

use crate::candidate::InitRange;
use crate::error::{RegressionError, Result};

#[derive(Debug, Clone)]
pub struct SearchOptions {
    population_size: usize,
    num_runs: usize,
    num_generations: usize,
    init_range: InitRange,
    /// Minimum population size evaluated in parallel.
    parallel_threshold: usize,
}

impl SearchOptions {
    pub fn new(
        population_size: usize,
        num_runs: usize,
        num_generations: usize,
        init_range: InitRange,
    ) -> Self {
        Self {
            population_size,
            num_runs,
            num_generations,
            init_range,
            parallel_threshold: 1000,
        }
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn num_runs(&self) -> usize {
        self.num_runs
    }

    pub fn num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn init_range(&self) -> InitRange {
        self.init_range
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Checks the configuration against the preconditions of the search.
    ///
    /// # Errors
    ///
    /// Returns `RegressionError::Configuration` when the population size is
    /// below 2 or odd, when the elite half cannot be paired for
    /// recombination, when the run or generation count is zero, or when the
    /// initialization range is empty or non-finite.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(RegressionError::Configuration(format!(
                "population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if self.population_size % 2 != 0 {
            return Err(RegressionError::Configuration(format!(
                "population size must be even, got {}",
                self.population_size
            )));
        }

        if (self.population_size / 2) % 2 != 0 {
            return Err(RegressionError::Configuration(format!(
                "population size {} leaves an elite half of {} that cannot pair for recombination",
                self.population_size,
                self.population_size / 2
            )));
        }

        if self.num_runs == 0 {
            return Err(RegressionError::Configuration(
                "number of runs must be positive".to_string(),
            ));
        }

        if self.num_generations == 0 {
            return Err(RegressionError::Configuration(
                "number of generations must be positive".to_string(),
            ));
        }

        let (lower, upper) = (self.init_range.lower(), self.init_range.upper());
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(RegressionError::Configuration(format!(
                "initialization range must satisfy lower < upper, got [{}, {}]",
                lower, upper
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating a `SearchOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use evoline::evolution::SearchOptions;
    ///
    /// let options = SearchOptions::builder()
    ///     .population_size(8)
    ///     .num_runs(3)
    ///     .num_generations(100)
    ///     .parallel_threshold(500)
    ///     .build();
    /// ```
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }
}

impl Default for SearchOptions {
    /// A population of 12 lines, 10 independent runs of 2000 generations
    /// each, parameters initialized from [-2, 2].
    fn default() -> Self {
        Self {
            population_size: 12,
            num_runs: 10,
            num_generations: 2000,
            init_range: InitRange::default(),
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `SearchOptions`.
///
/// Provides a fluent interface for constructing `SearchOptions` instances.
/// Unset fields fall back to the defaults of [`SearchOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct SearchOptionsBuilder {
    population_size: Option<usize>,
    num_runs: Option<usize>,
    num_generations: Option<usize>,
    init_range: Option<InitRange>,
    parallel_threshold: Option<usize>,
}

impl SearchOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of independent runs.
    pub fn num_runs(mut self, value: usize) -> Self {
        self.num_runs = Some(value);
        self
    }

    /// Sets the number of generations per run.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the initialization range.
    pub fn init_range(mut self, value: InitRange) -> Self {
        self.init_range = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `SearchOptions` instance.
    pub fn build(self) -> SearchOptions {
        let defaults = SearchOptions::default();

        SearchOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_runs: self.num_runs.unwrap_or(defaults.num_runs),
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            init_range: self.init_range.unwrap_or(defaults.init_range),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}
