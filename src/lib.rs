//! # correlogram
//!
//! Autocorrelation (ACF) and partial autocorrelation (PACF) analysis of
//! daily time series, computed from first principles.
//!
//! Provides the sample ACF, the PACF through per-order Yule-Walker solves
//! (direct or Durbin-Levinson), white-noise confidence bounds, and
//! significance scanning that tags weekly, monthly and quarterly lags.
//!
//! Enable the `tracing` feature to receive debug events when a series has
//! zero variance or a Yule-Walker system is singular.

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod correlation;
pub mod error;
pub mod utils;

pub use correlation::{
    analyze, compute_acf, compute_pacf, compute_pacf_with, confidence_bound, scan_significant,
    Correlogram, CorrelogramConfig, Cycle, PacfMethod, SignificantLag, DEFAULT_ALPHA,
};
pub use error::{CorrelogramError, Result};

pub mod prelude {
    pub use crate::correlation::{
        analyze, AnalysisHorizon, Correlogram, CorrelogramConfig, Cycle, LagProbe, PacfMethod,
        SignificantLag, DEFAULT_ALPHA, PROBE_LAGS,
    };
    pub use crate::error::{CorrelogramError, Result};
}
