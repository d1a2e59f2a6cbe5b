use anyhow::{Context, Result};

use crate::analysis::{SyntheticSeriesGenerator, build_request};
use crate::config::DF;
use crate::config::constants::TAIL_ROWS;
use crate::domain::Variant;
use crate::forecast::{AdditiveModel, ForecastEngine};
use crate::models::{ForecastRequest, ForecastResult};
use crate::trace_time;
use crate::utils::date_to_plot_x;

use super::params::RenderParams;
use super::view_model::{ComponentsChart, ForecastChart, LineChart, Trace, ViewModel};

pub const APP_TITLE: &str = "Patient Admission Prediction";
const RAW_CHART_TITLE: &str = "Daily Patient Admissions Over Time";
const RAW_TRACE_NAME: &str = "Daily Admissions";
const FORECAST_HEADING: &str = "Forecast Data";
const COMPONENTS_HEADING: &str = "Forecast Components";

/// Runs the whole pipeline for one set of control values: generate, build request,
/// fit, predict, then lay out every section of the page.
pub fn render(params: &RenderParams, engine: &mut dyn ForecastEngine) -> Result<ViewModel> {
    params.validate()?;

    let series = trace_time!("Generate series", 2_000, {
        let mut rng = params.seed.rng();
        SyntheticSeriesGenerator::new(params.start_date, params.variant)
            .generate(params.today, &mut rng)
            .context("generating admission history")?
    });

    let request = build_request(&series, params.category, params.horizon)
        .context("building forecast request")?;

    let forecast = trace_time!("Fit + predict", 50_000, {
        engine
            .fit(&request.history)
            .with_context(|| format!("fitting {} history", params.category))?;
        engine
            .predict(&request.future)
            .context("predicting forecast axis")?
    });

    if DF.log_render {
        log::info!(
            "Rendered {} / {}: {} history days, {} predicted rows",
            params.category,
            params.horizon,
            request.history_len(),
            forecast.rows.len()
        );
    }

    let raw_columns = std::iter::once("Date".to_string())
        .chain(series.categories().map(|c| c.to_string()))
        .collect();

    Ok(ViewModel {
        title: APP_TITLE.to_string(),
        variant: params.variant,
        category: params.category,
        horizon: params.horizon,
        data_heading: data_heading(params),
        raw_columns,
        raw_tail: series.tail(TAIL_ROWS),
        raw_chart: raw_chart(&request),
        forecast_heading: FORECAST_HEADING.to_string(),
        forecast_tail: forecast.tail(TAIL_ROWS).to_vec(),
        forecast_caption: format!("Forecast plot for {} years", params.horizon.years()),
        forecast_chart: forecast_chart(&request, &forecast),
        components_heading: COMPONENTS_HEADING.to_string(),
        components: components_chart(&forecast),
    })
}

/// `render` with the built-in additive engine.
pub fn render_default(params: &RenderParams) -> Result<ViewModel> {
    let mut engine = AdditiveModel::default();
    render(params, &mut engine)
}

fn data_heading(params: &RenderParams) -> String {
    match params.variant {
        Variant::Aggregate => "Admissions Data".to_string(),
        Variant::ByCategory => format!("{} Admissions Data", params.category),
    }
}

fn raw_chart(request: &ForecastRequest) -> LineChart {
    let points = request
        .history
        .iter()
        .map(|o| [date_to_plot_x(o.ds), o.y])
        .collect();
    LineChart {
        title: RAW_CHART_TITLE.to_string(),
        traces: vec![Trace {
            name: RAW_TRACE_NAME.to_string(),
            points,
        }],
        range_slider: true,
    }
}

fn forecast_chart(request: &ForecastRequest, forecast: &ForecastResult) -> ForecastChart {
    let xs: Vec<f64> = forecast.rows.iter().map(|r| date_to_plot_x(r.ds)).collect();
    let series = |f: fn(&crate::models::ForecastRow) -> f64| {
        xs.iter()
            .zip(&forecast.rows)
            .map(|(&x, r)| [x, f(r)])
            .collect::<Vec<_>>()
    };

    ForecastChart {
        observed: request
            .history
            .iter()
            .map(|o| [date_to_plot_x(o.ds), o.y])
            .collect(),
        yhat: series(|r| r.yhat),
        lower: series(|r| r.yhat_lower),
        upper: series(|r| r.yhat_upper),
        history_end_x: request.last_observed().map_or(0.0, date_to_plot_x),
    }
}

fn components_chart(forecast: &ForecastResult) -> ComponentsChart {
    let d = &forecast.decomposition;
    ComponentsChart {
        trend: d
            .trend
            .iter()
            .map(|&(ds, v)| [date_to_plot_x(ds), v])
            .collect(),
        weekly: d.weekly.clone(),
        yearly: d.yearly.clone(),
    }
}
