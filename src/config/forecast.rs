//! Additive forecast engine defaults

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalitySettings {
    pub period_days: f64,
    pub fourier_order: usize,
    /// Seasonality is only fitted when history spans at least this many days
    pub min_history_days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastConfig {
    pub n_changepoints: usize,
    /// Changepoints are placed in this leading fraction of history
    pub changepoint_range: f64,
    pub changepoint_prior_scale: f64,
    pub seasonality_prior_scale: f64,
    /// Width of the uncertainty interval (0.80 = 10th..90th percentile)
    pub interval_width: f64,
    /// Near-zero ridge on intercept and slope keeps the normal equations positive definite
    pub trend_ridge: f64,
    pub yearly: SeasonalitySettings,
    pub weekly: SeasonalitySettings,
}

pub const FORECAST: ForecastConfig = ForecastConfig {
    n_changepoints: 25,
    changepoint_range: 0.8,
    changepoint_prior_scale: 0.05,
    seasonality_prior_scale: 10.0,
    interval_width: 0.80,
    trend_ridge: 1e-9,
    yearly: SeasonalitySettings {
        period_days: 365.25,
        fourier_order: 10,
        min_history_days: 730,
    },
    weekly: SeasonalitySettings {
        period_days: 7.0,
        fourier_order: 3,
        min_history_days: 14,
    },
};

impl Default for ForecastConfig {
    fn default() -> Self {
        FORECAST
    }
}
