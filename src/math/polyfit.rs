use nalgebra::{DMatrix, DVector};

use crate::error::{Result, SegmentationError};

/// A degree-2 polynomial `y = a*x^2 + b*x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticFit {
    /// Creates a polynomial from its coefficients, highest degree first.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Ordinary least-squares fit through the samples `(xs[i], ys[i])`.
    ///
    /// The Vandermonde columns are scaled to unit norm before an SVD solve.
    /// Singular values below `len * eps * sigma_max` are treated as zero.
    ///
    /// # Errors
    ///
    /// Returns `SegmentationError::Degenerate` if fewer than 3 samples are
    /// given, the slices differ in length, a sample is not finite, or the
    /// solve fails.
    #[allow(clippy::cast_precision_loss)]
    pub fn least_squares(xs: &[f64], ys: &[f64]) -> Result<Self> {
        let n = xs.len();
        if n != ys.len() {
            return Err(SegmentationError::Degenerate(format!(
                "{n} abscissae for {} values",
                ys.len()
            ))
            .into());
        }
        if n < 3 {
            return Err(
                SegmentationError::Degenerate(format!("{n} samples cannot fix a quadratic")).into(),
            );
        }
        if let Some(bad) = xs.iter().chain(ys).find(|v| !v.is_finite()) {
            return Err(SegmentationError::Degenerate(format!("non-finite sample {bad}")).into());
        }

        let mut lhs = DMatrix::from_fn(n, 3, |row, col| match col {
            0 => xs[row] * xs[row],
            1 => xs[row],
            _ => 1.0,
        });
        let mut scale = [1.0; 3];
        for (col, s) in scale.iter_mut().enumerate() {
            let norm = lhs.column(col).norm();
            if norm > 0.0 {
                *s = norm;
                lhs.column_mut(col).unscale_mut(norm);
            }
        }
        let rhs = DVector::from_column_slice(ys);

        let svd = lhs.svd(true, true);
        let rcond = n as f64 * f64::EPSILON * svd.singular_values.max();
        let solution = svd
            .solve(&rhs, rcond)
            .map_err(|msg| SegmentationError::Degenerate(msg.to_string()))?;

        Ok(Self::new(
            solution[0] / scale[0],
            solution[1] / scale[1],
            solution[2] / scale[2],
        ))
    }

    /// Sum of squared deviations between `ys` and the polynomial at `xs`.
    #[must_use]
    pub fn sum_squared_residuals(&self, xs: &[f64], ys: &[f64]) -> f64 {
        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| {
                let r = y - self.eval(x);
                r * r
            })
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn exact_parabola_is_recovered() {
        let xs: Vec<f64> = (0..8).map(f64::from).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x * x - 3.0 * x + 1.5).collect();
        let fit = QuadraticFit::least_squares(&xs, &ys).unwrap();
        assert_relative_eq!(fit.a, 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.b, -3.0, epsilon = 1e-9);
        assert_relative_eq!(fit.c, 1.5, epsilon = 1e-9);
        assert!(fit.sum_squared_residuals(&xs, &ys) < 1e-15);
    }

    #[test]
    fn offset_abscissae_stay_accurate() {
        let xs: Vec<f64> = (100..110).map(f64::from).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 0.5 * (x - 104.0).powi(2)).collect();
        let fit = QuadraticFit::least_squares(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(&ys) {
            assert_relative_eq!(fit.eval(x), y, epsilon = 1e-6);
        }
    }

    #[test]
    fn three_points_interpolate() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.0, 0.0, 1.0];
        let fit = QuadraticFit::least_squares(&xs, &ys).unwrap();
        assert_relative_eq!(fit.a, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.b, -2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.c, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn too_few_samples() {
        assert!(QuadraticFit::least_squares(&[0.0, 1.0], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn mismatched_lengths() {
        assert!(QuadraticFit::least_squares(&[0.0, 1.0, 2.0], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn non_finite_sample() {
        assert!(QuadraticFit::least_squares(&[0.0, 1.0, 2.0], &[0.0, f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn eval_horner() {
        let q = QuadraticFit::new(1.0, 2.0, 3.0);
        assert_relative_eq!(q.eval(2.0), 11.0);
    }
}
