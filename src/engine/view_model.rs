use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::domain::{Category, Horizon, Variant};
use crate::models::{DayRow, ForecastRow};
use crate::utils::{mean_and_stddev, plot_x_to_date};

/// Plot-space point: x is days since 1970-01-01, y is the value.
pub type PlotPoint = [f64; 2];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub points: Vec<PlotPoint>,
}

/// A titled line chart, optionally with a window selector under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub traces: Vec<Trace>,
    pub range_slider: bool,
}

impl LineChart {
    /// First and last x across all traces.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let xs = self.traces.iter().flat_map(|t| t.points.iter().map(|p| p[0]));
        xs.fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastChart {
    pub observed: Vec<PlotPoint>,
    pub yhat: Vec<PlotPoint>,
    pub lower: Vec<PlotPoint>,
    pub upper: Vec<PlotPoint>,
    /// x of the last observed day
    pub history_end_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentsChart {
    pub trend: Vec<PlotPoint>,
    pub weekly: Option<Vec<(Weekday, f64)>>,
    pub yearly: Option<Vec<(u32, f64)>>,
}

/// Everything a single render shows, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub title: String,
    pub variant: Variant,
    pub category: Category,
    pub horizon: Horizon,

    pub data_heading: String,
    /// "Date" followed by one header per tracked category
    pub raw_columns: Vec<String>,
    pub raw_tail: Vec<DayRow>,
    pub raw_chart: LineChart,

    pub forecast_heading: String,
    pub forecast_tail: Vec<ForecastRow>,
    pub forecast_caption: String,
    pub forecast_chart: ForecastChart,

    pub components_heading: String,
    pub components: ComponentsChart,
}

/// Compact, table-sized view for headless output.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSummary<'a> {
    pub title: &'a str,
    pub variant: Variant,
    pub category: Category,
    pub horizon_years: u8,
    pub history_start: Option<NaiveDate>,
    pub history_end: Option<NaiveDate>,
    pub history_days: usize,
    pub history_mean: f64,
    pub history_stddev: f64,
    pub forecast_days: usize,
    pub data_heading: &'a str,
    pub raw_tail: &'a [DayRow],
    pub forecast_heading: &'a str,
    pub forecast_tail: &'a [ForecastRow],
    pub forecast_caption: &'a str,
    pub components_heading: &'a str,
    pub has_weekly: bool,
    pub has_yearly: bool,
}

impl ViewModel {
    pub fn summary(&self) -> ViewSummary<'_> {
        let observed = self
            .raw_chart
            .traces
            .first()
            .map(|t| t.points.as_slice())
            .unwrap_or_default();
        let to_date = |p: &PlotPoint| plot_x_to_date(p[0]);
        let ys: Vec<f64> = observed.iter().map(|p| p[1]).collect();
        let (history_mean, history_stddev) = mean_and_stddev(&ys);

        ViewSummary {
            title: &self.title,
            variant: self.variant,
            category: self.category,
            horizon_years: self.horizon.years(),
            history_start: observed.first().and_then(to_date),
            history_end: observed.last().and_then(to_date),
            history_days: self.forecast_chart.observed.len(),
            history_mean,
            history_stddev,
            forecast_days: self.forecast_chart.yhat.len(),
            data_heading: &self.data_heading,
            raw_tail: &self.raw_tail,
            forecast_heading: &self.forecast_heading,
            forecast_tail: &self.forecast_tail,
            forecast_caption: &self.forecast_caption,
            components_heading: &self.components_heading,
            has_weekly: self.components.weekly.is_some(),
            has_yearly: self.components.yearly.is_some(),
        }
    }
}
