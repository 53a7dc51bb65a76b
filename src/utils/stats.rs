//! Statistical utility functions.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{CorrelogramError, Result};

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Two-sided critical value of the standard normal distribution.
///
/// Returns `z` such that `P(|Z| > z) = alpha`, i.e. the `1 - alpha/2` quantile.
///
/// # Example
/// ```
/// use correlogram::utils::z_critical;
///
/// // 95% confidence level -> z ≈ 1.96
/// let z = z_critical(0.05).unwrap();
/// assert!((z - 1.96).abs() < 0.01);
/// ```
pub fn z_critical(alpha: f64) -> Result<f64> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(CorrelogramError::InvalidParameter(format!(
            "alpha must lie in (0, 1), got {}",
            alpha
        )));
    }
    let normal =
        Normal::new(0.0, 1.0).map_err(|e| CorrelogramError::InvalidParameter(e.to_string()))?;
    Ok(normal.inverse_cdf(1.0 - alpha / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn z_critical_known_values() {
        assert_relative_eq!(z_critical(0.05).unwrap(), 1.959964, epsilon = 1e-5);
        assert_relative_eq!(z_critical(0.01).unwrap(), 2.575829, epsilon = 1e-5);
        assert_relative_eq!(z_critical(0.10).unwrap(), 1.644854, epsilon = 1e-5);
    }

    #[test]
    fn z_critical_grows_as_alpha_shrinks() {
        let loose = z_critical(0.2).unwrap();
        let strict = z_critical(0.001).unwrap();
        assert!(strict > loose);
    }

    #[test]
    fn z_critical_rejects_out_of_range_alpha() {
        for alpha in [0.0, 1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                z_critical(alpha),
                Err(CorrelogramError::InvalidParameter(_))
            ));
        }
    }
}
