use eframe::egui::Stroke;
use egui_plot::{Line, LineStyle, PlotPoints, PlotUi, Points, Polygon, VLine};

use crate::config::plot::PLOT_CONFIG;
use crate::engine::ForecastChart;
use crate::ui::apply_opacity;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub chart: &'a ForecastChart,
    /// Visible x-range; layers skip geometry outside it
    pub x_bounds: (f64, f64),
}

impl LayerContext<'_> {
    fn visible(&self, x: f64) -> bool {
        x >= self.x_bounds.0 && x <= self.x_bounds.1
    }
}

/// A standardized layer in the forecast plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. UNCERTAINTY BAND
// ============================================================================
pub struct IntervalBandLayer;

impl PlotLayer for IntervalBandLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let fill = apply_opacity(PLOT_CONFIG.band_color, PLOT_CONFIG.band_opacity_pct);
        let lower = &ctx.chart.lower;
        let upper = &ctx.chart.upper;

        // egui fills polygons as convex shapes, so the band goes out as one quad per day
        for i in 1..lower.len().min(upper.len()) {
            let (l0, l1, u0, u1) = (lower[i - 1], lower[i], upper[i - 1], upper[i]);
            if !ctx.visible(l0[0]) && !ctx.visible(l1[0]) {
                continue;
            }
            let name = if i == 1 { UI_TEXT.legend_interval.as_str() } else { "" };
            plot_ui.polygon(
                Polygon::new(name, PlotPoints::new(vec![l0, l1, u1, u0]))
                    .fill_color(fill)
                    .stroke(Stroke::NONE),
            );
        }
    }
}

// ============================================================================
// 2. OBSERVED HISTORY (dots)
// ============================================================================
pub struct ObservedPointsLayer;

impl PlotLayer for ObservedPointsLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        plot_ui.points(
            Points::new(
                UI_TEXT.legend_observed.as_str(),
                PlotPoints::new(ctx.chart.observed.clone()),
            )
            .color(PLOT_CONFIG.observed_point_color)
            .radius(PLOT_CONFIG.observed_point_radius),
        );
    }
}

// ============================================================================
// 3. FORECAST LINE (yhat)
// ============================================================================
pub struct ForecastLineLayer;

impl PlotLayer for ForecastLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        plot_ui.line(
            Line::new(
                UI_TEXT.legend_forecast.as_str(),
                PlotPoints::new(ctx.chart.yhat.clone()),
            )
            .color(PLOT_CONFIG.yhat_color)
            .width(PLOT_CONFIG.yhat_width),
        );
    }
}

// ============================================================================
// 4. HISTORY / FORECAST BOUNDARY
// ============================================================================
pub struct HistoryEndLayer;

impl PlotLayer for HistoryEndLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        plot_ui.vline(
            VLine::new("", ctx.chart.history_end_x)
                .color(PLOT_CONFIG.history_end_color)
                .style(LineStyle::Dashed { length: 8.0 })
                .width(1.0),
        );
    }
}
