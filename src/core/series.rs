//! Series preparation: validation and mean-centering.

use crate::error::{CorrelogramError, Result};
use crate::utils::stats::mean;

/// Check that a series is non-empty and holds only finite observations.
pub fn validate_series(series: &[f64]) -> Result<()> {
    if series.is_empty() {
        return Err(CorrelogramError::EmptyData);
    }
    if let Some(index) = series.iter().position(|v| !v.is_finite()) {
        return Err(CorrelogramError::NonFiniteValue { index });
    }
    Ok(())
}

/// Return the series with its mean subtracted.
///
/// # Errors
/// [`CorrelogramError::EmptyData`] for an empty slice and
/// [`CorrelogramError::NonFiniteValue`] when any observation is NaN or infinite.
pub fn centered(series: &[f64]) -> Result<Vec<f64>> {
    validate_series(series)?;
    let m = mean(series);
    Ok(series.iter().map(|x| x - m).collect())
}

/// Sum of squared deviations from the mean of an already centered series.
pub(crate) fn sum_of_squares(centered: &[f64]) -> f64 {
    centered.iter().map(|x| x * x).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centered_has_zero_mean() {
        let c = centered(&[10.0, 12.0, 11.0, 13.0]).unwrap();
        assert_eq!(c.len(), 4);
        assert_relative_eq!(c.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(c[0], -1.5, epsilon = 1e-12);
        assert_relative_eq!(c[3], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn single_observation_centers_to_zero() {
        assert_eq!(centered(&[42.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(centered(&[]), Err(CorrelogramError::EmptyData));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(
            centered(&[1.0, f64::NAN, 3.0]),
            Err(CorrelogramError::NonFiniteValue { index: 1 })
        );
        assert_eq!(
            validate_series(&[1.0, 2.0, f64::NEG_INFINITY]),
            Err(CorrelogramError::NonFiniteValue { index: 2 })
        );
    }

    #[test]
    fn sum_of_squares_of_constant_is_zero() {
        let c = centered(&[5.0; 8]).unwrap();
        assert_eq!(sum_of_squares(&c), 0.0);
    }
}
