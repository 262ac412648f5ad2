use crate::math::{centroid_xy, distance_xy_squared, Point3};

/// Squared XY distance from each ordered point to the centroid of the set.
///
/// Index-aligned with the point sequence it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceSignal {
    values: Vec<f64>,
}

impl DistanceSignal {
    /// Builds the signal for an ordered point set. Empty input gives an empty signal.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Self {
        let Some(center) = centroid_xy(points) else {
            return Self::default();
        };
        let values = points
            .iter()
            .map(|p| distance_xy_squared(p, &center))
            .collect();
        Self { values }
    }

    /// Wraps precomputed values.
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn square_corners_are_equidistant() {
        let pts = [
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
        ];
        let signal = DistanceSignal::from_points(&pts);
        assert_eq!(signal.len(), 4);
        assert!(signal.values().iter().all(|d| (d - 2.0).abs() < TOLERANCE));
    }

    #[test]
    fn centroid_is_not_the_origin() {
        let pts = [
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(12.0, 0.0, 0.0),
            Point3::new(14.0, 0.0, 0.0),
        ];
        let signal = DistanceSignal::from_points(&pts);
        assert!((signal.values()[0] - 4.0).abs() < TOLERANCE);
        assert!(signal.values()[1].abs() < TOLERANCE);
        assert!((signal.values()[2] - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn empty_points() {
        assert!(DistanceSignal::from_points(&[]).is_empty());
    }
}
