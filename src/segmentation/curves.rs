use std::ops::Range;

use super::{Path, SegmentFitCache};
use crate::error::Result;
use crate::math::polyfit::QuadraticFit;

/// The fitted parabola of one segment, sampled at its indices for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentCurve {
    pub range: Range<usize>,
    pub fit: QuadraticFit,
    /// `(index, fitted value)` for every index in `range`.
    pub samples: Vec<(usize, f64)>,
}

/// Samples the quadratic fit of every segment of `path` over `signal`.
///
/// # Errors
///
/// Returns `SegmentationError::InvalidRange` if the path does not fit the
/// signal.
#[allow(clippy::cast_precision_loss)]
pub fn segment_curves(signal: &[f64], path: &Path) -> Result<Vec<SegmentCurve>> {
    let mut cache = SegmentFitCache::new();
    path.segments()
        .map(|range| {
            let fit = cache.fit(range.start, range.end, signal)?;
            let samples = range.clone().map(|i| (i, fit.eval(i as f64))).collect();
            Ok(SegmentCurve {
                range,
                fit,
                samples,
            })
        })
        .collect()
}
