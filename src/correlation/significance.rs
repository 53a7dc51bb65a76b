//! Confidence bounds and significance scanning of correlation vectors.

use std::fmt;

use crate::error::{CorrelogramError, Result};
use crate::utils::stats::z_critical;

/// Default two-sided significance level (95% confidence).
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Lags of interest for daily sales data: short-term dependence, half a week,
/// one and two weeks, one and two months, one quarter.
pub const PROBE_LAGS: [usize; 7] = [1, 3, 7, 14, 30, 60, 90];

/// Calendar periodicity associated with a lag measured in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cycle {
    /// Lag 7.
    Weekly,
    /// Lags 30 and 31.
    Monthly,
    /// Lags 90 and 91.
    Quarterly,
}

impl Cycle {
    /// Map a lag onto its calendar cycle, if it has one.
    pub fn classify(lag: usize) -> Option<Cycle> {
        match lag {
            7 => Some(Cycle::Weekly),
            30 | 31 => Some(Cycle::Monthly),
            90 | 91 => Some(Cycle::Quarterly),
            _ => None,
        }
    }

    /// Nominal period in days.
    pub fn period(&self) -> usize {
        match self {
            Cycle::Weekly => 7,
            Cycle::Monthly => 30,
            Cycle::Quarterly => 90,
        }
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cycle::Weekly => "weekly",
            Cycle::Monthly => "monthly",
            Cycle::Quarterly => "quarterly",
        };
        f.write_str(name)
    }
}

/// A lag whose correlation magnitude exceeds the confidence bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificantLag {
    /// The lag (in samples).
    pub lag: usize,
    /// Correlation value at this lag.
    pub value: f64,
    /// Calendar cycle of the lag, if any.
    pub cycle: Option<Cycle>,
}

/// Correlation value at a lag of interest, significant or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagProbe {
    /// The probed lag.
    pub lag: usize,
    /// Correlation value at this lag.
    pub value: f64,
    /// Whether `|value|` exceeds the confidence bound.
    pub significant: bool,
}

/// Returns the two-sided confidence bound `z(1 - alpha/2) / sqrt(n)`.
///
/// Under the white-noise null hypothesis, sample autocorrelations are
/// approximately normal with variance `1/n`. For `alpha = 0.05` this is
/// about `1.96 / sqrt(n)`.
///
/// # Errors
/// [`CorrelogramError::InvalidSampleSize`] for `n == 0` and
/// [`CorrelogramError::InvalidParameter`] when `alpha` is outside `(0, 1)`.
///
/// # Example
/// ```
/// use correlogram::{confidence_bound, DEFAULT_ALPHA};
///
/// let bound = confidence_bound(100, DEFAULT_ALPHA).unwrap();
/// assert!((bound - 0.196).abs() < 1e-4);
/// ```
pub fn confidence_bound(n: usize, alpha: f64) -> Result<f64> {
    if n == 0 {
        return Err(CorrelogramError::InvalidSampleSize(n));
    }
    let z = z_critical(alpha)?;
    Ok(z / (n as f64).sqrt())
}

/// Scans a correlation vector for lags whose magnitude exceeds `bound`.
///
/// Lag 0 is skipped. Results keep ascending lag order.
pub fn scan_significant(values: &[f64], bound: f64) -> Vec<SignificantLag> {
    values
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, v)| v.abs() > bound)
        .map(|(lag, &value)| SignificantLag {
            lag,
            value,
            cycle: Cycle::classify(lag),
        })
        .collect()
}

/// Reports the value and significance at each requested lag.
///
/// Lags outside the vector are skipped; the order of `lags` is preserved.
pub fn probe_lags(values: &[f64], bound: f64, lags: &[usize]) -> Vec<LagProbe> {
    lags.iter()
        .filter(|&&lag| lag < values.len())
        .map(|&lag| {
            let value = values[lag];
            LagProbe {
                lag,
                value,
                significant: value.abs() > bound,
            }
        })
        .collect()
}
