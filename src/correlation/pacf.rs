//! Partial autocorrelation function via the Yule-Walker equations.
//!
//! For each order `k`, the partial autocorrelation is the last coefficient of
//! the order-`k` autoregression fitted to the autocorrelations:
//!
//! ```text
//! R_k · phi = [acf(1), ..., acf(k)]ᵀ,   R_k[i][j] = acf(|i - j|)
//! pacf(k) = phi[k - 1]
//! ```
//!
//! Two interchangeable strategies produce the same values:
//! - [`PacfMethod::YuleWalker`] solves every order's Toeplitz system directly.
//! - [`PacfMethod::LevinsonDurbin`] updates the coefficients order by order.

use super::acf::compute_acf;
use crate::error::Result;
use crate::utils::linalg::{solve_linear_system, toeplitz, SINGULAR_PIVOT};

/// Strategy used to solve the Yule-Walker system of each order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PacfMethod {
    /// Solve each k×k Toeplitz system by Gaussian elimination.
    #[default]
    YuleWalker,
    /// Durbin-Levinson recursion, quadratic in `max_lag`.
    LevinsonDurbin,
}

/// Computes the partial autocorrelation vector for lags `0..=max_lag`
/// using direct Yule-Walker solves.
///
/// `pacf[0]` is `1.0` and `pacf[1]` equals the lag-1 autocorrelation.
/// Orders at or beyond the series length, and orders whose Toeplitz system is
/// singular, resolve to `0.0`.
///
/// # Example
/// ```
/// use correlogram::{compute_acf, compute_pacf};
///
/// let series = [10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0];
/// let acf = compute_acf(&series, 3).unwrap();
/// let pacf = compute_pacf(&series, 3).unwrap();
/// assert_eq!(pacf[0], 1.0);
/// assert_eq!(pacf[1], acf[1]);
/// ```
pub fn compute_pacf(series: &[f64], max_lag: usize) -> Result<Vec<f64>> {
    compute_pacf_with(series, max_lag, PacfMethod::default())
}

/// Computes the partial autocorrelation vector with an explicit strategy.
pub fn compute_pacf_with(series: &[f64], max_lag: usize, method: PacfMethod) -> Result<Vec<f64>> {
    let acf = compute_acf(series, max_lag)?;
    Ok(pacf_from_acf(&acf, series.len(), method))
}

/// Derives the partial autocorrelations from an autocorrelation vector.
///
/// `n` is the length of the series the autocorrelations came from; orders
/// `k >= n` are left at `0.0`. The result has the same length as `acf`.
pub fn pacf_from_acf(acf: &[f64], n: usize, method: PacfMethod) -> Vec<f64> {
    if acf.is_empty() {
        return Vec::new();
    }

    let mut pacf = vec![0.0; acf.len()];
    pacf[0] = 1.0;
    if acf.len() > 1 {
        pacf[1] = acf[1];
    }

    // Orders 2..last are the ones that need a solve
    let last = (acf.len() - 1).min(n.saturating_sub(1));
    match method {
        PacfMethod::YuleWalker => {
            for k in 2..=last {
                pacf[k] = solve_order(acf, k).unwrap_or(0.0);
            }
        }
        PacfMethod::LevinsonDurbin => levinson_durbin(acf, last, &mut pacf),
    }

    pacf
}

/// Last Yule-Walker coefficient of order `k`, or `None` when the system is singular.
fn solve_order(acf: &[f64], k: usize) -> Option<f64> {
    let r = toeplitz(acf, k);
    let phi = solve_linear_system(&r, &acf[1..=k]);

    #[cfg(feature = "tracing")]
    if phi.is_none() {
        tracing::debug!(
            target: "correlogram::pacf",
            order = k,
            "singular Yule-Walker system, partial autocorrelation set to 0.0"
        );
    }

    phi.map(|phi| phi[k - 1])
}

/// Fills `pacf[2..=last]` by the Durbin-Levinson recursion.
///
/// A vanishing prediction-error variance means the order-`k` Toeplitz matrix
/// is singular; from that order on the remaining values come from direct solves.
fn levinson_durbin(acf: &[f64], last: usize, pacf: &mut [f64]) {
    if last < 2 {
        return;
    }

    // phi[j] holds phi_{k-1, j+1}
    let mut phi = vec![acf[1]];

    for k in 2..=last {
        let mut num = acf[k];
        let mut denom = 1.0;
        for j in 1..k {
            num -= phi[j - 1] * acf[k - j];
            denom -= phi[j - 1] * acf[j];
        }

        if denom.is_nan() || denom.abs() < SINGULAR_PIVOT {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "correlogram::pacf",
                order = k,
                "degenerate Levinson-Durbin step, falling back to direct solves"
            );
            for order in k..=last {
                pacf[order] = solve_order(acf, order).unwrap_or(0.0);
            }
            return;
        }

        let phi_kk = num / denom;
        let next: Vec<f64> = (0..k - 1)
            .map(|j| phi[j] - phi_kk * phi[k - 2 - j])
            .chain(std::iter::once(phi_kk))
            .collect();
        phi = next;
        pacf[k] = phi_kk;
    }
}
