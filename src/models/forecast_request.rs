use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Category, Horizon};

/// One history point in the engine's generic schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    pub ds: NaiveDate,
    pub y: f64,
}

/// A single-category history plus the timestamp axis the engine should predict over.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub category: Category,
    pub horizon: Horizon,
    pub history: Vec<Observation>,
    /// Every history date followed by `horizon.days()` consecutive future dates
    pub future: Vec<NaiveDate>,
}

impl ForecastRequest {
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn last_observed(&self) -> Option<NaiveDate> {
        self.history.last().map(|o| o.ds)
    }

    /// Dates beyond the history (the forecast-only part of the axis).
    pub fn appended_dates(&self) -> &[NaiveDate] {
        &self.future[self.history.len().min(self.future.len())..]
    }

    /// Projects the history back to `(date, count)`; counts were integral on the way in.
    pub fn to_counts(&self) -> Vec<(NaiveDate, u32)> {
        self.history
            .iter()
            .map(|o| (o.ds, o.y.round().max(0.0) as u32))
            .collect()
    }
}
