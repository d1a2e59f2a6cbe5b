use eframe::egui::{Slider, Ui};
use egui_plot::{AxisHints, GridInput, GridMark, HPlacement, Legend, Line, Plot, PlotPoints};

use crate::config::PLOT_CONFIG;
use crate::config::constants::plot::MIN_Y_SPAN;
use crate::engine::{ComponentsChart, ForecastChart, LineChart, PlotPoint};
use crate::ui::plot_layers::{
    ForecastLineLayer, HistoryEndLayer, IntervalBandLayer, LayerContext, ObservedPointsLayer,
    PlotLayer,
};
use crate::ui::{RangeWindow, UI_TEXT, UiStyleExt, colored_subsection_heading};
use crate::utils::{format_date, min_max, padded_range, plot_x_to_date};

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if !(raw_step.is_finite() && raw_step > 0.0) {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag;

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never step less than one day
    (nice_step * mag).max(1.0)
}

fn day_grid_spacer(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step = calculate_adaptive_step(max - min, PLOT_CONFIG.x_axis_mark_target);
    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;
    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}

fn date_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis_date.as_str())
        .formatter(|mark, _range| {
            plot_x_to_date(mark.value)
                .map(format_date)
                .unwrap_or_default()
        })
}

fn count_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .formatter(|mark, _range| format!("{:.0}", mark.value))
        .placement(HPlacement::Left)
}

/// y-range covering every point whose x is inside `x_bounds`, padded.
fn y_bounds_in_window<'a>(
    series: impl IntoIterator<Item = &'a [PlotPoint]>,
    x_bounds: (f64, f64),
) -> Option<(f64, f64)> {
    let ys: Vec<f64> = series
        .into_iter()
        .flat_map(|s| s.iter())
        .filter(|p| p[0] >= x_bounds.0 && p[0] <= x_bounds.1)
        .map(|p| p[1])
        .filter(|y| y.is_finite())
        .collect();
    let (lo, hi) = min_max(&ys)?;
    Some(padded_range(lo, hi, PLOT_CONFIG.plot_y_padding_pct, MIN_Y_SPAN))
}

#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn new() -> Self {
        Self
    }

    /// Raw history line with the from/to sliders standing in for a range slider.
    pub fn show_raw_chart(&mut self, ui: &mut Ui, chart: &LineChart, window: &mut RangeWindow) {
        ui.label(colored_subsection_heading(chart.title.as_str()));
        let Some(bounds) = chart.x_bounds() else {
            return;
        };
        let (view_min, view_max) = window.resolve(bounds);
        let y_bounds = y_bounds_in_window(
            chart.traces.iter().map(|t| t.points.as_slice()),
            (view_min, view_max),
        );

        Plot::new("raw_chart")
            .height(PLOT_CONFIG.chart_height)
            .legend(Legend::default())
            .custom_x_axes(vec![date_axis()])
            .custom_y_axes(vec![count_axis(&UI_TEXT.plot_y_axis_count)])
            .x_grid_spacer(day_grid_spacer)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(view_min..=view_max);
                if let Some((lo, hi)) = y_bounds {
                    plot_ui.set_plot_bounds_y(lo..=hi);
                }
                for trace in &chart.traces {
                    plot_ui.line(
                        Line::new(trace.name.as_str(), PlotPoints::new(trace.points.clone()))
                            .color(PLOT_CONFIG.raw_line_color)
                            .width(PLOT_CONFIG.raw_line_width),
                    );
                }
            });

        if chart.range_slider {
            self.range_sliders(ui, bounds, window);
        }
    }

    fn range_sliders(&mut self, ui: &mut Ui, bounds: (f64, f64), window: &mut RangeWindow) {
        let (mut from, mut to) = window.resolve(bounds);
        let date_label = |x: f64, _: std::ops::RangeInclusive<usize>| {
            plot_x_to_date(x).map(format_date).unwrap_or_default()
        };
        let min_width = RangeWindow::MIN_WIDTH;

        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label(&UI_TEXT.label_window_from);
            changed |= ui
                .add(
                    Slider::new(&mut from, bounds.0..=(to - min_width).max(bounds.0))
                        .step_by(1.0)
                        .custom_formatter(date_label),
                )
                .changed();
            ui.label(&UI_TEXT.label_window_to);
            changed |= ui
                .add(
                    Slider::new(&mut to, (from + min_width).min(bounds.1)..=bounds.1)
                        .step_by(1.0)
                        .custom_formatter(date_label),
                )
                .changed();
            if !window.is_full() && ui.button(&UI_TEXT.label_window_reset).clicked() {
                window.reset();
            }
        });
        if changed {
            window.set(from, to, bounds);
        }
    }

    /// Observed dots, forecast line, uncertainty band and the history boundary.
    pub fn show_forecast_chart(&mut self, ui: &mut Ui, chart: &ForecastChart) {
        let Some(x_bounds) = chart.yhat.first().zip(chart.yhat.last()).map(|(a, b)| (a[0], b[0]))
        else {
            return;
        };

        Plot::new("forecast_chart")
            .height(PLOT_CONFIG.chart_height)
            .legend(Legend::default())
            .custom_x_axes(vec![date_axis()])
            .custom_y_axes(vec![count_axis(&UI_TEXT.plot_y_axis_count)])
            .x_grid_spacer(day_grid_spacer)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                let ctx = LayerContext { chart, x_bounds };

                let layers: [&dyn PlotLayer; 4] = [
                    &IntervalBandLayer,
                    &ObservedPointsLayer,
                    &ForecastLineLayer,
                    &HistoryEndLayer,
                ];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }

    /// Trend over the whole axis, then the weekly and yearly profiles when fitted.
    pub fn show_components(&mut self, ui: &mut Ui, components: &ComponentsChart) {
        let height = PLOT_CONFIG.component_plot_height;
        let width = PLOT_CONFIG.component_line_width;

        ui.label_subheader(&UI_TEXT.component_trend);
        Plot::new("component_trend")
            .height(height)
            .custom_x_axes(vec![date_axis()])
            .custom_y_axes(vec![count_axis(&UI_TEXT.component_trend)])
            .x_grid_spacer(day_grid_spacer)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(
                        UI_TEXT.component_trend.as_str(),
                        PlotPoints::new(components.trend.clone()),
                    )
                    .color(PLOT_CONFIG.trend_color)
                    .width(width),
                );
            });

        ui.label_subheader(&UI_TEXT.component_weekly);
        match &components.weekly {
            Some(weekly) => {
                let names: Vec<String> = weekly.iter().map(|(d, _)| d.to_string()).collect();
                let points: Vec<PlotPoint> = weekly
                    .iter()
                    .enumerate()
                    .map(|(i, &(_, v))| [i as f64, v])
                    .collect();
                let axis = AxisHints::new_x()
                    .label(UI_TEXT.plot_x_axis_weekday.as_str())
                    .formatter(move |mark, _range| {
                        let idx = mark.value.round();
                        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                            return String::new();
                        }
                        names.get(idx as usize).cloned().unwrap_or_default()
                    });
                Plot::new("component_weekly")
                    .height(height)
                    .custom_x_axes(vec![axis])
                    .custom_y_axes(vec![count_axis(&UI_TEXT.component_weekly)])
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        plot_ui.line(
                            Line::new(UI_TEXT.component_weekly.as_str(), PlotPoints::new(points))
                                .color(PLOT_CONFIG.weekly_color)
                                .width(width),
                        );
                    });
            }
            None => ui.label_subdued(&UI_TEXT.component_disabled),
        }

        ui.label_subheader(&UI_TEXT.component_yearly);
        match &components.yearly {
            Some(yearly) => {
                let points: Vec<PlotPoint> =
                    yearly.iter().map(|&(doy, v)| [f64::from(doy), v]).collect();
                let axis = AxisHints::new_x()
                    .label(UI_TEXT.plot_x_axis_day_of_year.as_str())
                    .formatter(|mark, _range| {
                        // Day-of-year labelled on a non-leap calendar (1970)
                        let offset = mark.value.round() - 1.0;
                        if !(0.0..366.0).contains(&offset) {
                            return String::new();
                        }
                        plot_x_to_date(offset)
                            .map(|d| d.format("%b %d").to_string())
                            .unwrap_or_default()
                    });
                Plot::new("component_yearly")
                    .height(height)
                    .custom_x_axes(vec![axis])
                    .custom_y_axes(vec![count_axis(&UI_TEXT.component_yearly)])
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        plot_ui.line(
                            Line::new(UI_TEXT.component_yearly.as_str(), PlotPoints::new(points))
                                .color(PLOT_CONFIG.yearly_color)
                                .width(width),
                        );
                    });
            }
            None => ui.label_subdued(&UI_TEXT.component_disabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_step_snaps_to_nice_values() {
        assert_eq!(calculate_adaptive_step(800.0, 8.0), 100.0);
        assert_eq!(calculate_adaptive_step(160.0, 8.0), 20.0);
        assert_eq!(calculate_adaptive_step(3.0, 8.0), 1.0);
        assert_eq!(calculate_adaptive_step(0.0, 8.0), 1.0);
    }

    #[test]
    fn y_bounds_only_count_visible_points() {
        let series: Vec<PlotPoint> = vec![[0.0, 100.0], [1.0, 5.0], [2.0, 15.0]];
        let (lo, hi) = y_bounds_in_window([series.as_slice()], (1.0, 2.0)).unwrap();
        assert!(lo < 5.0 && lo > 4.0);
        assert!(hi > 15.0 && hi < 16.0);
        assert!(y_bounds_in_window([series.as_slice()], (5.0, 6.0)).is_none());
    }
}
