use crate::error::{BoxError, Result};
use crate::math::{Point2, Point3};
use crate::segmentation::Path;

/// A room volume: one footprint at two heights.
///
/// Vertices `0..4` lie at the floor and `4..8` at the ceiling; vertex `i` and
/// `i + 4` share their XY coordinates. Corners run lower-left, lower-right,
/// upper-right, upper-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox3D {
    pub vertices: [Point3; 8],
}

impl BoundingBox3D {
    /// Extrudes a footprint between two heights.
    #[must_use]
    pub fn from_footprint(footprint: [Point2; 4], floor_z: f64, ceiling_z: f64) -> Self {
        let at = |i: usize, z: f64| Point3::new(footprint[i % 4].x, footprint[i % 4].y, z);
        let vertices = std::array::from_fn(|i| at(i, if i < 4 { floor_z } else { ceiling_z }));
        Self { vertices }
    }

    #[must_use]
    pub fn floor(&self) -> &[Point3] {
        &self.vertices[..4]
    }

    #[must_use]
    pub fn ceiling(&self) -> &[Point3] {
        &self.vertices[4..]
    }

    /// The XY corners shared by floor and ceiling.
    #[must_use]
    pub fn footprint(&self) -> [Point2; 4] {
        std::array::from_fn(|i| self.vertices[i].xy())
    }
}

/// Builds the room box from the corner samples of a 4-segment [`Path`].
///
/// The footprint is axis-aligned: the two smallest corner x values are
/// averaged into the left edge, the two largest into the right edge, and the
/// same independently in y. It does not pass through the corner samples and
/// does not follow a rotated room.
pub struct BuildBoundingBox {
    floor_z: f64,
    ceiling_z: f64,
}

impl BuildBoundingBox {
    /// Creates a new `BuildBoundingBox` operation.
    #[must_use]
    pub fn new(floor_z: f64, ceiling_z: f64) -> Self {
        Self { floor_z, ceiling_z }
    }

    /// Executes the operation using the path's corner indices.
    ///
    /// # Errors
    ///
    /// Returns `BoxError::InvalidPathLength` unless the path has exactly 4
    /// segments, and `BoxError::IndexOutOfBounds` if a corner index is not a
    /// valid point index.
    pub fn execute(&self, points: &[Point3], path: &Path) -> Result<BoundingBox3D> {
        self.execute_indices(points, &path.corner_indices())
    }

    /// Executes the operation with explicit corner indices.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn execute_indices(&self, points: &[Point3], indices: &[usize]) -> Result<BoundingBox3D> {
        if indices.len() != 4 {
            return Err(BoxError::InvalidPathLength { len: indices.len() }.into());
        }
        let mut corners = [Point3::origin(); 4];
        for (slot, &index) in corners.iter_mut().zip(indices) {
            *slot = *points.get(index).ok_or(BoxError::IndexOutOfBounds {
                index,
                len: points.len(),
            })?;
        }
        Ok(BoundingBox3D::from_footprint(
            axis_aligned_footprint(corners),
            self.floor_z,
            self.ceiling_z,
        ))
    }
}

/// Builds the room box for `path` over `points` between two heights.
///
/// # Errors
///
/// See [`BuildBoundingBox::execute`].
pub fn build(
    points: &[Point3],
    path: &Path,
    floor_z: f64,
    ceiling_z: f64,
) -> Result<BoundingBox3D> {
    BuildBoundingBox::new(floor_z, ceiling_z).execute(points, path)
}

fn axis_aligned_footprint(corners: [Point3; 4]) -> [Point2; 4] {
    let mut by_x = corners;
    by_x.sort_by(|a, b| a.x.total_cmp(&b.x));
    let mut by_y = corners;
    by_y.sort_by(|a, b| a.y.total_cmp(&b.y));

    let left = 0.5 * (by_x[0].x + by_x[1].x);
    let right = 0.5 * (by_x[2].x + by_x[3].x);
    let bottom = 0.5 * (by_y[0].y + by_y[1].y);
    let top = 0.5 * (by_y[2].y + by_y[3].y);

    [
        Point2::new(left, bottom),
        Point2::new(right, bottom),
        Point2::new(right, top),
        Point2::new(left, top),
    ]
}
