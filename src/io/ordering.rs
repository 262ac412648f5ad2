use crate::math::{centroid_xy, distance_xy_squared, Point2, Point3};

/// Which point becomes index 0 after angular sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StartPolicy {
    /// The point farthest from the XY centroid. On a rectangular outline this
    /// is a corner, so every wall maps to one contiguous segment.
    #[default]
    FarthestFromCentroid,
    /// The point just before the one whose x is nearest the mean x. This
    /// usually starts mid-wall, splitting that wall across both ends.
    ///
    /// This is the legacy ordering of the pandas-based estimator; choose it
    /// when corner indices must line up with results produced by that tool.
    NearestMeanX,
}

/// Sorts `points` by angle around their XY centroid, then rotates the
/// sequence according to `start`.
///
/// The sort is stable, so points at equal angles keep their input order.
#[must_use]
pub fn order_points(points: &[Point3], start: StartPolicy) -> Vec<Point3> {
    let Some(center) = centroid_xy(points) else {
        return Vec::new();
    };
    let angle = |p: &Point3| (p.y - center.y).atan2(p.x - center.x);

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| angle(a).total_cmp(&angle(b)));

    let n = sorted.len();
    let offset = match start {
        StartPolicy::FarthestFromCentroid => farthest_from(&sorted, &center),
        StartPolicy::NearestMeanX => (nearest_x(&sorted, center.x) + n - 1) % n,
    };
    sorted.rotate_left(offset);
    sorted
}

fn farthest_from(points: &[Point3], center: &Point2) -> usize {
    let mut best = 0;
    let mut best_dist = f64::NEG_INFINITY;
    for (i, p) in points.iter().enumerate() {
        let d = distance_xy_squared(p, center);
        if d > best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

fn nearest_x(points: &[Point3], x: f64) -> usize {
    let mut best = 0;
    let mut best_gap = f64::INFINITY;
    for (i, p) in points.iter().enumerate() {
        let gap = (p.x - x).abs();
        if gap < best_gap {
            best = i;
            best_gap = gap;
        }
    }
    best
}
