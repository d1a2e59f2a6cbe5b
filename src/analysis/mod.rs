//! Data side of the pipeline: synthetic history and the engine request built from it.
mod generator;
mod request_builder;

pub use generator::{SeedSource, SyntheticSeriesGenerator};
pub use request_builder::{build_request, make_future_axis};
