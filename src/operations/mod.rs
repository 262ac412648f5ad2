mod bounding_box;
mod estimate_room;

pub use bounding_box::{build, BoundingBox3D, BuildBoundingBox};
pub use estimate_room::{EstimateRoom, EstimatorParams, RoomEstimate};
