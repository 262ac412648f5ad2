use tracing::info;

use super::bounding_box::{BoundingBox3D, BuildBoundingBox};
use crate::error::Result;
use crate::height::{
    split_at_median, HeightEstimate, HeightParams, IndexSampler, RobustHeightEstimator,
};
use crate::math::Point3;
use crate::segmentation::{DistanceSignal, OptimalPartition, Path};

/// Parameters of the full room estimation.
#[derive(Debug, Clone, Copy)]
pub struct EstimatorParams {
    /// Number of wall segments. The box builder needs 4.
    pub segments: usize,
    /// Consensus search settings for both floor and ceiling.
    pub height: HeightParams,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            segments: 4,
            height: HeightParams::default(),
        }
    }
}

/// Everything the estimation produced, for callers that display or inspect it.
#[derive(Debug, Clone)]
pub struct RoomEstimate {
    pub bounding_box: BoundingBox3D,
    pub path: Path,
    pub signal: DistanceSignal,
    pub floor: HeightEstimate,
    pub ceiling: HeightEstimate,
}

/// Estimates a room box from an angularly ordered point cloud.
pub struct EstimateRoom {
    params: EstimatorParams,
}

impl EstimateRoom {
    /// Creates a new `EstimateRoom` operation.
    #[must_use]
    pub fn new(params: EstimatorParams) -> Self {
        Self { params }
    }

    /// Executes the estimation.
    ///
    /// The footprint comes from segmenting the distance signal of `points`,
    /// the floor from the points below the median z, and the ceiling from
    /// the points above it.
    ///
    /// # Errors
    ///
    /// Returns the segmentation error if the signal cannot be partitioned,
    /// `EstimationError::EmptyInput` if either median half is empty, and
    /// `BoxError::InvalidPathLength` if `segments` is not 4.
    pub fn execute<S: IndexSampler + ?Sized>(
        &self,
        points: &[Point3],
        sampler: &mut S,
    ) -> Result<RoomEstimate> {
        let signal = DistanceSignal::from_points(points);
        let path = OptimalPartition::new(self.params.segments).execute(signal.values())?;

        let (below, above) = split_at_median(points);
        let estimator = RobustHeightEstimator::new(self.params.height);
        let floor = estimator.estimate(&below, sampler)?;
        let ceiling = estimator.estimate(&above, sampler)?;

        let bounding_box = BuildBoundingBox::new(floor.z, ceiling.z).execute(points, &path)?;
        info!(
            points = points.len(),
            floor = floor.z,
            ceiling = ceiling.z,
            residual = path.total_residual(),
            "estimated room"
        );

        Ok(RoomEstimate {
            bounding_box,
            path,
            signal,
            floor,
            ceiling,
        })
    }
}
