#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod forecast;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and integration tests)
pub use analysis::SeedSource;
pub use app::App;
pub use config::PERSISTENCE;
pub use domain::{Category, Horizon, Variant};
pub use engine::{RenderParams, ViewModel, render, render_default};
pub use forecast::{AdditiveModel, ForecastEngine, ForecastError};

// CLI argument parsing
use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Which dashboard to run
    #[arg(long, value_enum, default_value_t = Variant::Aggregate)]
    pub variant: Variant,

    /// Fixed RNG seed for a reproducible history (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// First day of the generated history, YYYY-MM-DD (defaults to 2022-01-01)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
