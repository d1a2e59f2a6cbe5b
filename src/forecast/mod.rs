//! Forecast engine seam: fit on `(ds, y)` history, predict over a date axis.

mod additive;
mod error;
mod fourier;
mod linalg;

use chrono::NaiveDate;

use crate::models::{ForecastResult, Observation};

pub use additive::AdditiveModel;
pub use error::ForecastError;

/// Anything that can stand in as the dashboard's forecast engine.
pub trait ForecastEngine {
    /// Estimates model parameters from history. History must be date-ordered.
    fn fit(&mut self, history: &[Observation]) -> Result<(), ForecastError>;

    /// Predicts every date of `axis` (history dates included) with bounds and components.
    fn predict(&self, axis: &[NaiveDate]) -> Result<ForecastResult, ForecastError>;
}
