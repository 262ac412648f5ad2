use std::ops::Range;

use tracing::debug;

use super::{SegmentFitCache, MIN_SEGMENT_LEN};
use crate::error::{Result, SegmentationError};

/// Best cumulative residual and predecessor for "the first `length`
/// segments end exactly at `end`", for `end in 0..=n`, `length in 0..=k`.
struct PartitionTable {
    width: usize,
    cost: Vec<f64>,
    pred: Vec<Option<usize>>,
}

impl PartitionTable {
    fn new(n: usize, k: usize) -> Self {
        let width = k + 1;
        let cells = (n + 1) * width;
        let mut table = Self {
            width,
            cost: vec![f64::INFINITY; cells],
            pred: vec![None; cells],
        };
        table.cost[0] = 0.0;
        table
    }

    fn index(&self, end: usize, length: usize) -> usize {
        end * self.width + length
    }

    fn cost(&self, end: usize, length: usize) -> f64 {
        self.cost[self.index(end, length)]
    }

    fn pred(&self, end: usize, length: usize) -> Option<usize> {
        self.pred[self.index(end, length)]
    }

    fn set(&mut self, end: usize, length: usize, cost: f64, pred: Option<usize>) {
        let i = self.index(end, length);
        self.cost[i] = cost;
        self.pred[i] = pred;
    }
}

/// An optimal split of a signal of length `n` into `k` contiguous segments.
///
/// Stored as the `k + 1` bounds `0 = b0 < b1 < ... < bk = n`; segment `i`
/// covers `[b_i, b_{i+1})`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    bounds: Vec<usize>,
    total_residual: f64,
}

impl Path {
    /// All segment bounds, including the leading 0 and trailing `n`.
    #[must_use]
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// The `k - 1` interior breakpoints.
    #[must_use]
    pub fn breakpoints(&self) -> &[usize] {
        &self.bounds[1..self.bounds.len() - 1]
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Index ranges of the segments in order.
    pub fn segments(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.bounds.windows(2).map(|w| w[0]..w[1])
    }

    /// Last index of every segment, ascending.
    ///
    /// On a closed outline these are the samples where one wall's curve hands
    /// over to the next; the final entry `n - 1` closes the loop back to 0.
    #[must_use]
    pub fn corner_indices(&self) -> Vec<usize> {
        self.bounds[1..].iter().map(|b| b - 1).collect()
    }

    /// Sum of the segment residuals of this split.
    #[must_use]
    pub fn total_residual(&self) -> f64 {
        self.total_residual
    }
}

/// Splits a signal into a fixed number of quadratic segments with the
/// smallest total residual.
pub struct OptimalPartition {
    segments: usize,
}

impl OptimalPartition {
    /// Creates a new `OptimalPartition` operation.
    #[must_use]
    pub fn new(segments: usize) -> Self {
        Self { segments }
    }

    /// Runs the dynamic program over `signal`.
    ///
    /// Every start leaving at least three samples in the last segment is a
    /// candidate. Candidates are scanned in ascending order and only a strictly
    /// smaller cost replaces the current best, so ties resolve to the
    /// earliest start.
    ///
    /// # Errors
    ///
    /// Returns `SegmentationError::EmptyInput` for an empty signal,
    /// `SegmentationError::PartitionInfeasible` if `k` is zero or the signal
    /// is shorter than `3 * k`, and `SegmentationError::Degenerate` if a
    /// segment fit fails.
    pub fn execute(&self, signal: &[f64]) -> Result<Path> {
        let n = signal.len();
        let k = self.segments;
        if n == 0 {
            return Err(SegmentationError::EmptyInput.into());
        }
        let infeasible = || SegmentationError::PartitionInfeasible { n, k };
        if k == 0 || k.checked_mul(MIN_SEGMENT_LEN).is_none_or(|min| n < min) {
            return Err(infeasible().into());
        }

        let mut cache = SegmentFitCache::new();
        let mut table = PartitionTable::new(n, k);

        for length in 1..=k {
            for end in length..=n {
                let mut best = f64::INFINITY;
                let mut best_start = None;
                for start in 0..(end + 1).saturating_sub(MIN_SEGMENT_LEN) {
                    let prior = table.cost(start, length - 1);
                    if !prior.is_finite() {
                        continue;
                    }
                    let (_, residual) = cache.evaluate(start, end, signal)?;
                    let candidate = prior + residual;
                    if candidate < best {
                        best = candidate;
                        best_start = Some(start);
                    }
                }
                table.set(end, length, best, best_start);
            }
        }

        let total_residual = table.cost(n, k);
        if !total_residual.is_finite() {
            return Err(infeasible().into());
        }

        let mut bounds = Vec::with_capacity(k + 1);
        bounds.push(n);
        let mut end = n;
        for length in (1..=k).rev() {
            let start = table.pred(end, length).ok_or_else(infeasible)?;
            bounds.push(start);
            end = start;
        }
        bounds.reverse();

        let stats = cache.stats();
        debug!(
            n,
            k,
            total_residual,
            cached_fits = cache.len(),
            hits = stats.hits,
            misses = stats.misses,
            "partitioned signal"
        );

        Ok(Path {
            bounds,
            total_residual,
        })
    }
}

/// Splits the first `n` samples of `signal` into `k` segments.
///
/// # Errors
///
/// Returns `SegmentationError::InvalidRange` if `n` differs from the signal
/// length, otherwise the errors of [`OptimalPartition::execute`].
pub fn segment(n: usize, k: usize, signal: &[f64]) -> Result<Path> {
    if n != signal.len() {
        return Err(SegmentationError::InvalidRange {
            start: 0,
            end: n,
            len: signal.len(),
        }
        .into());
    }
    OptimalPartition::new(k).execute(signal)
}
