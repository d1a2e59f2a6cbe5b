mod core;
mod params;
mod view_model;

pub use self::core::{APP_TITLE, render, render_default};
pub use params::RenderParams;
pub use view_model::{
    ComponentsChart, ForecastChart, LineChart, PlotPoint, Trace, ViewModel, ViewSummary,
};
