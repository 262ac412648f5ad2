use crate::math::Point3;

/// Splits `points` into those strictly below and strictly above the median z.
///
/// For an even count the median is the mean of the two middle values.
/// Points exactly at the median go to neither side.
#[must_use]
pub fn split_at_median(points: &[Point3]) -> (Vec<Point3>, Vec<Point3>) {
    let Some(median) = median_z(points) else {
        return (Vec::new(), Vec::new());
    };
    let below = points.iter().filter(|p| p.z < median).copied().collect();
    let above = points.iter().filter(|p| p.z > median).copied().collect();
    (below, above)
}

fn median_z(points: &[Point3]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let mut zs: Vec<f64> = points.iter().map(|p| p.z).collect();
    zs.sort_by(f64::total_cmp);
    let mid = zs.len() / 2;
    if zs.len() % 2 == 1 {
        Some(zs[mid])
    } else {
        Some(0.5 * (zs[mid - 1] + zs[mid]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zs(points: &[Point3]) -> Vec<f64> {
        points.iter().map(|p| p.z).collect()
    }

    fn column(values: &[f64]) -> Vec<Point3> {
        values.iter().map(|&z| Point3::new(0.0, 0.0, z)).collect()
    }

    #[test]
    fn odd_count_drops_the_median() {
        let (below, above) = split_at_median(&column(&[3.0, 1.0, 2.0, 5.0, 4.0]));
        assert_eq!(zs(&below), vec![1.0, 2.0]);
        assert_eq!(zs(&above), vec![5.0, 4.0]);
    }

    #[test]
    fn even_count_uses_midpoint() {
        let (below, above) = split_at_median(&column(&[0.0, 0.0, 3.0, 3.0]));
        assert_eq!(zs(&below), vec![0.0, 0.0]);
        assert_eq!(zs(&above), vec![3.0, 3.0]);
    }

    #[test]
    fn flat_cloud_has_empty_halves() {
        let (below, above) = split_at_median(&column(&[2.0; 6]));
        assert!(below.is_empty());
        assert!(above.is_empty());
    }

    #[test]
    fn empty_input() {
        let (below, above) = split_at_median(&[]);
        assert!(below.is_empty() && above.is_empty());
    }
}
