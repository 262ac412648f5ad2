use tracing::debug;

use super::{HeightEstimate, HeightParams, IndexSampler};
use crate::error::{EstimationError, Result};
use crate::math::Point3;

/// Finds the most supported z value among `points`.
///
/// Every iteration samples one point and counts the points whose z lies
/// strictly within `threshold` of it. The first hypothesis with the highest
/// count wins; inliers are never averaged.
pub struct RobustHeightEstimator {
    params: HeightParams,
}

impl RobustHeightEstimator {
    /// Creates a new `RobustHeightEstimator`.
    #[must_use]
    pub fn new(params: HeightParams) -> Self {
        Self { params }
    }

    /// Runs the search, drawing indices from `sampler`.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::EmptyInput` if `points` is empty and
    /// `EstimationError::InvalidParameters` if `iterations` is zero, the
    /// threshold is not positive, or the sampler yields an index out of range.
    pub fn estimate<S: IndexSampler + ?Sized>(
        &self,
        points: &[Point3],
        sampler: &mut S,
    ) -> Result<HeightEstimate> {
        let HeightParams {
            iterations,
            threshold,
        } = self.params;
        if points.is_empty() {
            return Err(EstimationError::EmptyInput.into());
        }
        if iterations == 0 {
            return Err(EstimationError::InvalidParameters("zero iterations".into()).into());
        }
        if threshold.is_nan() || threshold <= 0.0 {
            return Err(EstimationError::InvalidParameters(format!(
                "threshold must be positive, got {threshold}"
            ))
            .into());
        }

        let mut best: Option<HeightEstimate> = None;
        for _ in 0..iterations {
            let index = sampler.sample_index(points.len());
            let Some(sample) = points.get(index) else {
                return Err(EstimationError::InvalidParameters(format!(
                    "sampler returned index {index} for {} points",
                    points.len()
                ))
                .into());
            };
            let z = sample.z;
            let inliers = points
                .iter()
                .filter(|p| (p.z - z).abs() < threshold)
                .count();
            if best.is_none_or(|b| inliers > b.inliers) {
                best = Some(HeightEstimate { z, inliers });
            }
        }

        let best = best.ok_or(EstimationError::EmptyInput)?;
        debug!(
            z = best.z,
            inliers = best.inliers,
            points = points.len(),
            iterations,
            "estimated height"
        );
        Ok(best)
    }
}

/// Runs a [`RobustHeightEstimator`] with the given iteration count and threshold.
///
/// # Errors
///
/// See [`RobustHeightEstimator::estimate`].
pub fn estimate<S: IndexSampler + ?Sized>(
    points: &[Point3],
    iterations: usize,
    threshold: f64,
    sampler: &mut S,
) -> Result<HeightEstimate> {
    RobustHeightEstimator::new(HeightParams {
        iterations,
        threshold,
    })
    .estimate(points, sampler)
}
