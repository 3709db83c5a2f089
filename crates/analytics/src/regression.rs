//! Ordinary least-squares fit for trend lines.

use serde::{Deserialize, Serialize};

/// Linear regression result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Slope of the regression line.
    pub slope: f64,
    /// Y-intercept.
    pub intercept: f64,
    /// R-squared value.
    pub r_squared: f64,
}

impl LinearRegression {
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Computes simple linear regression of `y` on `x`.
///
/// Mismatched or empty input returns a flat line at zero. Zero variance in `x`
/// returns a flat line through the mean of `y`.
#[must_use]
pub fn linear_regression(x: &[f64], y: &[f64]) -> LinearRegression {
    let n = x.len();
    if n == 0 || n != y.len() {
        return LinearRegression {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
        };
    }

    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let (ss_xy, ss_xx, ss_yy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(xy, xx, yy), (xi, yi)| {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        (xy + dx * dy, xx + dx * dx, yy + dy * dy)
    });

    if ss_xx.abs() < f64::EPSILON {
        return LinearRegression {
            slope: 0.0,
            intercept: mean_y,
            r_squared: 0.0,
        };
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    let r_squared = if ss_yy.abs() < f64::EPSILON {
        1.0
    } else {
        (ss_xy * ss_xy) / (ss_xx * ss_yy)
    };

    LinearRegression {
        slope,
        intercept,
        r_squared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_fit() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [3.0, 5.0, 7.0, 9.0];
        let fit = linear_regression(&x, &y);

        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert!((fit.predict(10.0) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_slope() {
        let x = [18.0, 19.0, 20.0, 21.0];
        let y = [0.7, 0.6, 0.4, 0.3];
        let fit = linear_regression(&x, &y);

        assert!(fit.slope < 0.0);
        assert!(fit.r_squared > 0.9 && fit.r_squared <= 1.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = linear_regression(&[], &[]);
        assert_eq!(empty.slope, 0.0);
        assert_eq!(empty.intercept, 0.0);

        let mismatched = linear_regression(&[1.0, 2.0], &[1.0]);
        assert_eq!(mismatched.slope, 0.0);
        assert_eq!(mismatched.intercept, 0.0);
        assert_eq!(mismatched.r_squared, 0.0);

        let vertical = linear_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        assert_eq!(vertical.slope, 0.0);
        assert!((vertical.intercept - 2.0).abs() < 1e-12);
    }
}
