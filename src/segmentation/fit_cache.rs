use std::collections::HashMap;

use tracing::trace;

use super::MIN_SEGMENT_LEN;
use crate::error::{Result, SegmentationError};
use crate::math::polyfit::QuadraticFit;

/// Half-open index range `[start, end)` of the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentKey {
    pub start: usize,
    pub end: usize,
}

impl SegmentKey {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of samples covered. Zero for inverted keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(self, signal_len: usize) -> Result<()> {
        if self.start >= self.end || self.end > signal_len || self.len() < MIN_SEGMENT_LEN {
            return Err(SegmentationError::InvalidRange {
                start: self.start,
                end: self.end,
                len: signal_len,
            }
            .into());
        }
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn abscissae(self) -> Vec<f64> {
        (self.start..self.end).map(|i| i as f64).collect()
    }
}

/// Lookup counters of a [`SegmentFitCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Memoised quadratic fits and residuals keyed by [`SegmentKey`].
///
/// Entries are keyed by index range only, so an instance must only ever see
/// one signal. Create one per partitioning run and drop it afterwards.
#[derive(Debug, Default)]
pub struct SegmentFitCache {
    fits: HashMap<SegmentKey, QuadraticFit>,
    residuals: HashMap<SegmentKey, f64>,
    stats: CacheStats,
}

impl SegmentFitCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Least-squares quadratic over `signal[start..end]`, in absolute indices.
    ///
    /// # Errors
    ///
    /// Returns `SegmentationError::InvalidRange` if the range is out of bounds
    /// or shorter than [`MIN_SEGMENT_LEN`], and `SegmentationError::Degenerate`
    /// if the solve fails.
    pub fn fit(&mut self, start: usize, end: usize, signal: &[f64]) -> Result<QuadraticFit> {
        let key = SegmentKey::new(start, end);
        key.check(signal.len())?;

        if let Some(fit) = self.fits.get(&key) {
            self.stats.hits += 1;
            return Ok(*fit);
        }
        self.stats.misses += 1;

        let fit = QuadraticFit::least_squares(&key.abscissae(), &signal[start..end])?;
        trace!(start, end, a = fit.a, b = fit.b, c = fit.c, "fitted segment");
        self.fits.insert(key, fit);
        Ok(fit)
    }

    /// Sum of squared deviations of `signal[start..end]` from `fit`.
    ///
    /// The first call for a key stores the value; later calls return it
    /// unchanged, so callers should pass the fit obtained from [`Self::fit`].
    ///
    /// # Errors
    ///
    /// Returns `SegmentationError::InvalidRange` under the same conditions as
    /// [`Self::fit`].
    pub fn residual(
        &mut self,
        start: usize,
        end: usize,
        signal: &[f64],
        fit: &QuadraticFit,
    ) -> Result<f64> {
        let key = SegmentKey::new(start, end);
        key.check(signal.len())?;

        if let Some(residual) = self.residuals.get(&key) {
            return Ok(*residual);
        }
        let residual = fit.sum_squared_residuals(&key.abscissae(), &signal[start..end]);
        self.residuals.insert(key, residual);
        Ok(residual)
    }

    /// Fit and residual for one range.
    ///
    /// # Errors
    ///
    /// See [`Self::fit`].
    pub fn evaluate(
        &mut self,
        start: usize,
        end: usize,
        signal: &[f64],
    ) -> Result<(QuadraticFit, f64)> {
        let fit = self.fit(start, end, signal)?;
        let residual = self.residual(start, end, signal, &fit)?;
        Ok((fit, residual))
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Number of cached fits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fits.is_empty()
    }
}
