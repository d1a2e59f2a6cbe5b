use chrono::{NaiveDate, Weekday};
use serde::Serialize;

/// One predicted day, history and future alike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastRow {
    pub ds: NaiveDate,
    pub trend: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
    /// 0.0 when weekly seasonality was not fitted
    pub weekly: f64,
    /// 0.0 when yearly seasonality was not fitted
    pub yearly: f64,
    pub yhat: f64,
}

/// Trend and seasonal profiles for the components chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decomposition {
    pub trend: Vec<(NaiveDate, f64)>,
    /// Monday..Sunday effect
    pub weekly: Option<Vec<(Weekday, f64)>>,
    /// Day-of-year (1..=365) effect
    pub yearly: Option<Vec<(u32, f64)>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastResult {
    pub rows: Vec<ForecastRow>,
    /// Leading rows that fall inside the fitted history
    pub history_len: usize,
    pub decomposition: Decomposition,
}

impl ForecastResult {
    pub fn history(&self) -> &[ForecastRow] {
        &self.rows[..self.history_len.min(self.rows.len())]
    }

    pub fn future(&self) -> &[ForecastRow] {
        &self.rows[self.history_len.min(self.rows.len())..]
    }

    pub fn tail(&self, n: usize) -> &[ForecastRow] {
        &self.rows[self.rows.len().saturating_sub(n)..]
    }
}
