//! Autocorrelation analysis of a univariate series.
//!
//! The stages compose in a straight pipeline:
//!
//! 1. [`compute_acf`]: sample autocorrelations from the centered series
//! 2. [`compute_pacf`]: partial autocorrelations from Yule-Walker solves
//! 3. [`confidence_bound`] and [`scan_significant`]: lags beyond the
//!    white-noise bound, tagged with their calendar cycle
//!
//! [`analyze`] runs all of them and returns a [`Correlogram`].
//!
//! # Example
//!
//! ```
//! use correlogram::correlation::{analyze, Cycle, CorrelogramConfig};
//!
//! // Eight weeks of daily sales with a weekend peak
//! let series: Vec<f64> = (0..56)
//!     .map(|day| if day % 7 >= 5 { 40.0 } else { 15.0 })
//!     .collect();
//!
//! let result = analyze(&series, &CorrelogramConfig::default()).unwrap();
//! assert!(result.has_cycle(Cycle::Weekly));
//! ```

mod acf;
mod analysis;
mod horizon;
mod pacf;
mod significance;

pub use acf::compute_acf;
pub use analysis::{analyze, Correlogram, CorrelogramConfig};
pub use horizon::{default_max_lag, AnalysisHorizon, DEFAULT_LAG_CAP};
pub use pacf::{compute_pacf, compute_pacf_with, pacf_from_acf, PacfMethod};
pub use significance::{
    confidence_bound, probe_lags, scan_significant, Cycle, LagProbe, SignificantLag,
    DEFAULT_ALPHA, PROBE_LAGS,
};
