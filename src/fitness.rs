//! # Fitness Evaluation
//!
//! The `Challenge` trait defines how a candidate is scored; the shipped
//! [`AbsoluteResidual`] challenge sums the absolute residuals between the
//! candidate's predictions and the dataset. [`evaluate`] applies a challenge
//! to a whole population in place, in parallel when the population is large
//! enough to make that worthwhile.

use rayon::prelude::*;

use crate::candidate::Candidate;
use crate::dataset::Dataset;
use crate::error::{RegressionError, Result};

/// Scores a candidate against a problem; smaller is better.
///
/// Implementations must be pure with respect to the candidate: evaluation
/// draws no randomness, which keeps seeded searches deterministic whether the
/// evaluation pass runs sequentially or in parallel.
pub trait Challenge: Sync {
    fn score(&self, candidate: &Candidate) -> f64;
}

/// Sum of absolute residuals `|y - (slope * x + intercept)|` over a dataset.
///
/// ## Example
///
/// ```rust
/// use evoline::candidate::{Candidate, InitRange};
/// use evoline::dataset::{DataPoint, Dataset};
/// use evoline::fitness::{AbsoluteResidual, Challenge};
/// use evoline::rng::RandomNumberGenerator;
///
/// let dataset = Dataset::from_points(vec![
///     DataPoint { x: 0.0, y: 1.0 },
///     DataPoint { x: 1.0, y: 3.0 },
/// ]);
/// let mut rng = RandomNumberGenerator::from_seed(0);
/// let exact = Candidate::new(Some(2.0), Some(1.0), InitRange::default(), &mut rng);
///
/// assert_eq!(AbsoluteResidual::new(&dataset).score(&exact), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct AbsoluteResidual<'a> {
    dataset: &'a Dataset,
}

impl<'a> AbsoluteResidual<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }
}

impl Challenge for AbsoluteResidual<'_> {
    fn score(&self, candidate: &Candidate) -> f64 {
        self.dataset
            .points()
            .iter()
            .map(|point| (point.y - candidate.predict(point.x)).abs())
            .sum()
    }
}

/// Scores every candidate in place, writing each score to the candidate's
/// `error` field.
///
/// Populations at or above `parallel_threshold` are scored in parallel;
/// smaller ones sequentially. Cost is O(|population| * |dataset|) for the
/// absolute-residual challenge.
///
/// # Errors
///
/// Returns `RegressionError::FitnessCalculation` if any score is non-finite.
pub fn evaluate<C>(
    population: &mut [Candidate],
    challenge: &C,
    parallel_threshold: usize,
) -> Result<()>
where
    C: Challenge,
{
    let score_one = |candidate: &mut Candidate| -> Result<()> {
        let score = challenge.score(candidate);

        if !score.is_finite() {
            return Err(RegressionError::FitnessCalculation(format!(
                "non-finite fitness score encountered: {}",
                score
            )));
        }

        candidate.set_error(score);
        Ok(())
    };

    if population.len() >= parallel_threshold {
        population.par_iter_mut().try_for_each(score_one)
    } else {
        population.iter_mut().try_for_each(score_one)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::InitRange;
    use crate::dataset::DataPoint;
    use crate::rng::RandomNumberGenerator;

    fn sample_dataset() -> Dataset {
        Dataset::from_points(vec![
            DataPoint { x: 0.0, y: 1.0 },
            DataPoint { x: 1.0, y: 3.0 },
            DataPoint { x: 2.0, y: 5.0 },
            DataPoint { x: 3.0, y: 7.0 },
        ])
    }

    fn candidate(slope: f64, intercept: f64) -> Candidate {
        let mut rng = RandomNumberGenerator::from_seed(0);
        Candidate::new(Some(slope), Some(intercept), InitRange::default(), &mut rng)
    }

    #[test]
    fn test_exact_fit_scores_zero() {
        let dataset = sample_dataset();
        let challenge = AbsoluteResidual::new(&dataset);

        assert_eq!(challenge.score(&candidate(2.0, 1.0)), 0.0);
    }

    #[test]
    fn test_score_is_sum_of_absolute_residuals() {
        let dataset = sample_dataset();
        let challenge = AbsoluteResidual::new(&dataset);

        // y = 2x: residual is 1 at every one of the four points.
        assert!((challenge.score(&candidate(2.0, 0.0)) - 4.0).abs() < 1e-12);
        // Residuals below and above the data count the same.
        assert!((challenge.score(&candidate(2.0, 2.0)) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_writes_every_error_in_place() {
        let dataset = sample_dataset();
        let challenge = AbsoluteResidual::new(&dataset);
        let mut population = vec![candidate(2.0, 1.0), candidate(0.0, 0.0), candidate(-1.0, 4.0)];

        evaluate(&mut population, &challenge, 1000).unwrap();

        for member in &population {
            assert!(member.error().is_finite());
            assert!(member.error() >= 0.0);
        }
        assert_eq!(population[0].error(), 0.0);
    }

    #[test]
    fn test_parallel_and_sequential_paths_agree() {
        let dataset = sample_dataset();
        let challenge = AbsoluteResidual::new(&dataset);
        let mut sequential = vec![candidate(1.0, 0.5), candidate(-0.5, 2.0)];
        let mut parallel = sequential.clone();

        evaluate(&mut sequential, &challenge, usize::MAX).unwrap();
        evaluate(&mut parallel, &challenge, 0).unwrap();

        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(a.error().to_bits(), b.error().to_bits());
        }
    }

    #[test]
    fn test_non_finite_score_is_rejected() {
        let dataset = sample_dataset();
        let challenge = AbsoluteResidual::new(&dataset);
        let mut population = vec![candidate(f64::INFINITY, 0.0)];

        let result = evaluate(&mut population, &challenge, 1000);

        assert!(matches!(
            result,
            Err(RegressionError::FitnessCalculation(_))
        ));
    }
}
