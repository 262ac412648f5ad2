//! Piecewise-quadratic segmentation of the radial distance signal.
//!
//! The ordered room outline is turned into a [`DistanceSignal`], which
//! [`OptimalPartition`] splits into `k` contiguous segments with the smallest
//! total least-squares residual. Each call owns its own [`SegmentFitCache`].

mod curves;
mod fit_cache;
mod partition;
mod signal;

pub use curves::{segment_curves, SegmentCurve};
pub use fit_cache::{CacheStats, SegmentFitCache, SegmentKey};
pub use partition::{segment, OptimalPartition, Path};
pub use signal::DistanceSignal;

/// Minimum number of samples in a segment. A quadratic needs three.
pub const MIN_SEGMENT_LEN: usize = 3;
