//! Lag horizons for daily series.

/// Upper limit of [`default_max_lag`].
pub const DEFAULT_LAG_CAP: usize = 30;

/// Default lag range for numeric analysis: `min(30, n / 4)`.
///
/// Keeps the Yule-Walker systems small relative to the sample so the
/// partial autocorrelations stay well conditioned.
pub fn default_max_lag(n: usize) -> usize {
    DEFAULT_LAG_CAP.min(n / 4)
}

/// Named lag horizons used to look for cycles of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisHorizon {
    /// 14 lags, enough to see two weekly cycles.
    TwoWeeks,
    /// 60 lags, for monthly patterns.
    TwoMonths,
    /// 90 lags, for quarterly patterns.
    Quarter,
    /// `min(180, n / 3)` lags, for long seasonal patterns.
    Annual,
}

impl AnalysisHorizon {
    /// All horizons from shortest to longest.
    pub const ALL: [AnalysisHorizon; 4] = [
        AnalysisHorizon::TwoWeeks,
        AnalysisHorizon::TwoMonths,
        AnalysisHorizon::Quarter,
        AnalysisHorizon::Annual,
    ];

    /// Nominal number of lags before clipping against the series length.
    pub fn nominal_lags(&self, n: usize) -> usize {
        match self {
            AnalysisHorizon::TwoWeeks => 14,
            AnalysisHorizon::TwoMonths => 60,
            AnalysisHorizon::Quarter => 90,
            AnalysisHorizon::Annual => 180.min(n / 3),
        }
    }

    /// Largest lag to compute for a series of length `n`.
    ///
    /// The nominal lag is reduced to `n - 1` when the series is too short.
    pub fn max_lag(&self, n: usize) -> usize {
        let nominal = self.nominal_lags(n);
        let clipped = nominal.min(n.saturating_sub(1));

        #[cfg(feature = "tracing")]
        if clipped < nominal {
            tracing::debug!(
                target: "correlogram::horizon",
                horizon = ?self,
                n,
                nominal,
                clipped,
                "lag horizon clipped to series length"
            );
        }

        clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_max_lag_follows_quarter_of_length() {
        assert_eq!(default_max_lag(0), 0);
        assert_eq!(default_max_lag(3), 0);
        assert_eq!(default_max_lag(14), 3);
        assert_eq!(default_max_lag(100), 25);
        assert_eq!(default_max_lag(120), 30);
        assert_eq!(default_max_lag(1000), 30);
    }

    #[test]
    fn horizons_keep_nominal_lags_on_long_series() {
        let n = 1095;
        assert_eq!(AnalysisHorizon::TwoWeeks.max_lag(n), 14);
        assert_eq!(AnalysisHorizon::TwoMonths.max_lag(n), 60);
        assert_eq!(AnalysisHorizon::Quarter.max_lag(n), 90);
        assert_eq!(AnalysisHorizon::Annual.max_lag(n), 180);
    }

    #[test]
    fn annual_horizon_scales_with_length() {
        assert_eq!(AnalysisHorizon::Annual.max_lag(300), 100);
    }

    #[test]
    fn horizons_clip_to_series_length() {
        assert_eq!(AnalysisHorizon::TwoMonths.max_lag(40), 39);
        assert_eq!(AnalysisHorizon::Quarter.max_lag(10), 9);
        assert_eq!(AnalysisHorizon::TwoWeeks.max_lag(1), 0);
        assert_eq!(AnalysisHorizon::TwoWeeks.max_lag(0), 0);
    }

    #[test]
    fn all_is_ordered_by_length() {
        let lags: Vec<usize> = AnalysisHorizon::ALL.iter().map(|h| h.max_lag(2000)).collect();
        assert!(lags.windows(2).all(|w| w[0] < w[1]));
    }
}
