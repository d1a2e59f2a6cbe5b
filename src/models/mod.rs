pub mod daily_series;
pub mod forecast_request;
pub mod forecast_result;

// Re-export key types
pub use daily_series::{CategoryColumn, DailyRecord, DailySeries, DayRow};
pub use forecast_request::{ForecastRequest, Observation};
pub use forecast_result::{Decomposition, ForecastResult, ForecastRow};
