//! Sample autocorrelation function.

use crate::core::{centered, sum_of_squares};
use crate::error::Result;

/// Computes the autocorrelation vector for lags `0..=max_lag`.
///
/// The denominator is the total sum of squared deviations, computed once,
/// so every lag shares the same normalization. Lags at or beyond the series
/// length resolve to `0.0`, and a zero-variance series yields `0.0` for every
/// lag except 0.
///
/// Deviations are rescaled by their largest magnitude before squaring, so
/// large finite observations do not overflow. The mean itself must still be
/// representable: a series whose sum exceeds `f64::MAX` yields NaN values.
///
/// # Arguments
/// * `series` - Ordered observations (at least one, all finite)
/// * `max_lag` - Largest lag to compute; may exceed the series length
///
/// # Example
/// ```
/// use correlogram::compute_acf;
///
/// let acf = compute_acf(&[1.0, 2.0, 3.0, 4.0, 5.0], 7).unwrap();
/// assert_eq!(acf.len(), 8);
/// assert_eq!(acf[0], 1.0);
/// assert_eq!(acf[6], 0.0);
/// ```
pub fn compute_acf(series: &[f64], max_lag: usize) -> Result<Vec<f64>> {
    let centered = centered(series)?;
    Ok(acf_from_centered(&centered, is_constant(series), max_lag))
}

pub(crate) fn acf_from_centered(centered: &[f64], constant: bool, max_lag: usize) -> Vec<f64> {
    let n = centered.len();

    // Autocorrelations are scale-free; dividing by the largest magnitude keeps
    // the squared sums finite for observations near f64::MAX.
    let scale = centered.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    let scaled: Vec<f64> = if scale > 0.0 && scale.is_finite() {
        centered.iter().map(|x| x / scale).collect()
    } else {
        centered.to_vec()
    };
    let centered = scaled.as_slice();

    let denominator = if constant {
        0.0
    } else {
        sum_of_squares(centered)
    };

    #[cfg(feature = "tracing")]
    if denominator == 0.0 {
        tracing::debug!(
            target: "correlogram::acf",
            n,
            max_lag,
            "zero-variance series, autocorrelations resolve to 0.0"
        );
    }

    (0..=max_lag)
        .map(|lag| {
            if lag == 0 {
                return 1.0;
            }
            if lag >= n || denominator == 0.0 {
                return 0.0;
            }
            let numerator: f64 = centered[..n - lag]
                .iter()
                .zip(&centered[lag..])
                .map(|(a, b)| a * b)
                .sum();
            numerator / denominator
        })
        .collect()
}

/// Exact constancy check; rounding in the mean can leave a constant series
/// with a tiny non-zero sum of squares.
pub(crate) fn is_constant(series: &[f64]) -> bool {
    series.windows(2).all(|w| w[0] == w[1])
}
