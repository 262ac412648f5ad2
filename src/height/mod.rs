//! Floor and ceiling height estimation by single-sample consensus.

mod consensus;
mod split;

pub use consensus::{estimate, RobustHeightEstimator};
pub use split::split_at_median;

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Parameters of the consensus search.
#[derive(Debug, Clone, Copy)]
pub struct HeightParams {
    /// Number of sampled hypotheses.
    pub iterations: usize,
    /// A point is an inlier when `|z - z_sample| < threshold`.
    pub threshold: f64,
}

impl Default for HeightParams {
    fn default() -> Self {
        Self {
            iterations: 100,
            threshold: 0.5,
        }
    }
}

/// Best hypothesis found by the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightEstimate {
    pub z: f64,
    pub inliers: usize,
}

/// Source of uniformly drawn sample indices.
///
/// Implemented for the `rand` generators; tests implement it with scripted
/// index sequences.
pub trait IndexSampler {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn sample_index(&mut self, len: usize) -> usize;
}

impl IndexSampler for StdRng {
    fn sample_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

impl IndexSampler for ThreadRng {
    fn sample_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

impl<S: IndexSampler + ?Sized> IndexSampler for &mut S {
    fn sample_index(&mut self, len: usize) -> usize {
        (**self).sample_index(len)
    }
}
