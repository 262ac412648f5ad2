pub mod polyfit;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the mean of the XY coordinates of `points`, or `None` if empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid_xy(points: &[Point3]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;
    Some(Point2::new(sx / n, sy / n))
}

/// Squared Euclidean distance between the XY projection of `p` and `q`.
#[must_use]
pub fn distance_xy_squared(p: &Point3, q: &Point2) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    dx * dx + dy * dy
}
