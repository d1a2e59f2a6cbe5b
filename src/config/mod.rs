//! Configuration module for the admission dashboard.

// Can all be private now because we have a public re-export.
mod debug;
mod forecast;
mod generator;
mod persistence;

// Public
pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::{DF, LogFlags};
pub use forecast::{FORECAST, ForecastConfig, SeasonalitySettings};
pub use generator::{CategoryRates, GENERATOR, GeneratorConfig};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
