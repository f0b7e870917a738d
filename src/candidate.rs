//! # Candidate
//!
//! A `Candidate` is a single line hypothesis `y = slope * x + intercept`
//! together with its fitness score. Candidates are created either with
//! explicit parameters or by drawing them uniformly from an [`InitRange`],
//! and are refined by the breeding strategy through recombination and
//! mutation.
//!
//! ## Example
//!
//! ```rust
//! use evoline::candidate::{Candidate, InitRange};
//! use evoline::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let candidate = Candidate::new(Some(2.0), Some(1.0), InitRange::new(-2.0, 2.0), &mut rng);
//!
//! assert_eq!(candidate.predict(3.0), 7.0);
//! assert!(candidate.error().is_infinite());
//! ```

use crate::rng::RandomNumberGenerator;

/// Bounds used when drawing the initial parameters of a candidate.
///
/// The slope is drawn from `[lower, upper]`; the intercept is drawn from the
/// doubled interval `[2 * lower, 2 * upper]`. The range is retained on each
/// candidate for traceability but is never consulted after construction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitRange {
    lower: f64,
    upper: f64,
}

impl InitRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Sampling interval for the slope.
    pub fn slope_bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Sampling interval for the intercept, twice as wide as the slope interval.
    pub fn intercept_bounds(&self) -> (f64, f64) {
        (2.0 * self.lower, 2.0 * self.upper)
    }
}

impl Default for InitRange {
    fn default() -> Self {
        Self {
            lower: -2.0,
            upper: 2.0,
        }
    }
}

/// A single line model with an associated fitness score.
///
/// `error` starts at infinity and is only meaningful immediately after an
/// evaluation pass. Every structural change to the parameters (recombination
/// or mutation) resets it to infinity until the next evaluation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Candidate {
    slope: f64,
    intercept: f64,
    init_range: InitRange,
    error: f64,
}

impl Candidate {
    /// Creates a candidate from explicit parameters, drawing any omitted one
    /// uniformly at random from the initialization range.
    pub fn new(
        slope: Option<f64>,
        intercept: Option<f64>,
        init_range: InitRange,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let (slope_lo, slope_hi) = init_range.slope_bounds();
        let (intercept_lo, intercept_hi) = init_range.intercept_bounds();

        Self {
            slope: slope.unwrap_or_else(|| rng.uniform(slope_lo, slope_hi)),
            intercept: intercept.unwrap_or_else(|| rng.uniform(intercept_lo, intercept_hi)),
            init_range,
            error: f64::INFINITY,
        }
    }

    /// Creates a fully random candidate.
    pub fn random(init_range: InitRange, rng: &mut RandomNumberGenerator) -> Self {
        Self::new(None, None, init_range, rng)
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn init_range(&self) -> InitRange {
        self.init_range
    }

    /// The fitness score set by the most recent evaluation pass; smaller is
    /// better. Infinite until the candidate has been evaluated.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// The predicted y value for the given x.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Clones this candidate into a fresh, unevaluated offspring.
    pub fn offspring(&self) -> Candidate {
        Self {
            error: f64::INFINITY,
            ..self.clone()
        }
    }

    /// Adds an independent uniform draw from `[-step, step]` to the slope and
    /// another to the intercept.
    pub fn mutate(&mut self, step: f64, rng: &mut RandomNumberGenerator) {
        let slope_delta = rng.uniform(-step, step);
        self.slope += slope_delta;
        let intercept_delta = rng.uniform(-step, step);
        self.intercept += intercept_delta;
        self.error = f64::INFINITY;
    }

    pub(crate) fn set_line(&mut self, slope: f64, intercept: f64) {
        self.slope = slope;
        self.intercept = intercept;
        self.error = f64::INFINITY;
    }

    pub(crate) fn set_error(&mut self, error: f64) {
        self.error = error;
    }
}
