//! End-to-end correlogram analysis of a single series.

use super::acf::compute_acf;
use super::horizon::{default_max_lag, AnalysisHorizon};
use super::pacf::{pacf_from_acf, PacfMethod};
use super::significance::{
    confidence_bound, probe_lags, scan_significant, Cycle, LagProbe, SignificantLag,
    DEFAULT_ALPHA,
};
use crate::core::validate_series;
use crate::error::Result;
use crate::utils::stats::z_critical;

/// Configuration for correlogram analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelogramConfig {
    /// Largest lag to compute. `None` uses [`default_max_lag`].
    pub max_lag: Option<usize>,
    /// Two-sided significance level in `(0, 1)`.
    pub alpha: f64,
    /// Strategy for the partial autocorrelations.
    pub pacf_method: PacfMethod,
}

impl Default for CorrelogramConfig {
    fn default() -> Self {
        Self {
            max_lag: None,
            alpha: DEFAULT_ALPHA,
            pacf_method: PacfMethod::default(),
        }
    }
}

impl CorrelogramConfig {
    /// Set the largest lag explicitly. Lags beyond the series length come
    /// back as `0.0`.
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = Some(max_lag);
        self
    }

    /// Set the significance level.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the PACF strategy.
    pub fn with_pacf_method(mut self, method: PacfMethod) -> Self {
        self.pacf_method = method;
        self
    }

    /// Fix the lag range from a named horizon for a series of length `n`.
    pub fn with_horizon(self, horizon: AnalysisHorizon, n: usize) -> Self {
        self.with_max_lag(horizon.max_lag(n))
    }

    /// Resolve the lag range for a series of length `n`.
    pub fn resolve_max_lag(&self, n: usize) -> usize {
        self.max_lag.unwrap_or_else(|| default_max_lag(n))
    }
}

/// Autocorrelations, partial autocorrelations and their significant lags.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlogram {
    /// Length of the analyzed series.
    pub n: usize,
    /// Largest computed lag; both vectors have `max_lag + 1` entries.
    pub max_lag: usize,
    /// Significance level used for the bound.
    pub alpha: f64,
    /// Autocorrelation vector.
    pub acf: Vec<f64>,
    /// Partial autocorrelation vector.
    pub pacf: Vec<f64>,
    /// Confidence bound the vectors were tested against.
    pub bound: f64,
    /// Significant autocorrelation lags in ascending order.
    pub significant_acf: Vec<SignificantLag>,
    /// Significant partial autocorrelation lags in ascending order.
    pub significant_pacf: Vec<SignificantLag>,
}

impl Correlogram {
    /// First `count` significant autocorrelation lags.
    pub fn top_significant_acf(&self, count: usize) -> &[SignificantLag] {
        &self.significant_acf[..count.min(self.significant_acf.len())]
    }

    /// First `count` significant partial autocorrelation lags.
    pub fn top_significant_pacf(&self, count: usize) -> &[SignificantLag] {
        &self.significant_pacf[..count.min(self.significant_pacf.len())]
    }

    /// Autocorrelation value and significance at each requested lag.
    pub fn probe_acf(&self, lags: &[usize]) -> Vec<LagProbe> {
        probe_lags(&self.acf, self.bound, lags)
    }

    /// Partial autocorrelation value and significance at each requested lag.
    pub fn probe_pacf(&self, lags: &[usize]) -> Vec<LagProbe> {
        probe_lags(&self.pacf, self.bound, lags)
    }

    /// Whether either vector has a significant lag of the given cycle.
    pub fn has_cycle(&self, cycle: Cycle) -> bool {
        self.significant_acf
            .iter()
            .chain(&self.significant_pacf)
            .any(|s| s.cycle == Some(cycle))
    }
}

/// Runs the full pipeline on `series`.
///
/// Inputs are validated before anything is computed: an empty series, a
/// non-finite observation or an out-of-range `alpha` fail without producing
/// partial results.
///
/// # Example
/// ```
/// use correlogram::{analyze, CorrelogramConfig};
///
/// let series = [10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0, 14.0, 16.0, 13.0, 15.0, 14.0, 16.0];
/// let result = analyze(&series, &CorrelogramConfig::default().with_max_lag(7)).unwrap();
/// assert_eq!(result.acf.len(), 8);
/// assert_eq!(result.pacf[1], result.acf[1]);
/// ```
pub fn analyze(series: &[f64], config: &CorrelogramConfig) -> Result<Correlogram> {
    validate_series(series)?;
    z_critical(config.alpha)?;

    let n = series.len();
    let max_lag = config.resolve_max_lag(n);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "correlogram::analysis",
        n,
        max_lag,
        alpha = config.alpha,
        method = ?config.pacf_method,
        "computing correlogram"
    );

    let acf = compute_acf(series, max_lag)?;
    let pacf = pacf_from_acf(&acf, n, config.pacf_method);
    let bound = confidence_bound(n, config.alpha)?;

    let significant_acf = scan_significant(&acf, bound);
    let significant_pacf = scan_significant(&pacf, bound);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "correlogram::analysis",
        bound,
        significant_acf = significant_acf.len(),
        significant_pacf = significant_pacf.len(),
        "correlogram complete"
    );

    Ok(Correlogram {
        n,
        max_lag,
        alpha: config.alpha,
        acf,
        pacf,
        bound,
        significant_acf,
        significant_pacf,
    })
}
