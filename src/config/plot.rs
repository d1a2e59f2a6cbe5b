//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- RAW SERIES ---
    pub raw_line_color: Color32,
    pub raw_line_width: f32,

    // --- FORECAST ---
    /// Observed history drawn as dots under the forecast line
    pub observed_point_color: Color32,
    pub observed_point_radius: f32,
    pub yhat_color: Color32,
    pub yhat_width: f32,
    /// Confidence band fill (alpha applied via `band_opacity_pct`)
    pub band_color: Color32,
    pub band_opacity_pct: f32,
    /// Vertical marker where history ends and the forecast begins
    pub history_end_color: Color32,

    // --- COMPONENTS ---
    pub trend_color: Color32,
    pub weekly_color: Color32,
    pub yearly_color: Color32,
    pub component_line_width: f32,
    pub component_plot_height: f32,

    /// Main chart height in points
    pub chart_height: f32,
    /// Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,
    /// Target number of labelled x grid marks
    pub x_axis_mark_target: f64,

    // --- SEMANTIC COLORS ---
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_error: Color32,
    pub color_text_neutral: Color32,
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
    pub color_widget_border: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    raw_line_color: Color32::from_rgb(99, 110, 250), // Plotly blue
    raw_line_width: 1.5,

    observed_point_color: Color32::from_gray(200),
    observed_point_radius: 1.5,
    yhat_color: Color32::from_rgb(0, 114, 178),
    yhat_width: 2.0,
    band_color: Color32::from_rgb(0, 114, 178),
    band_opacity_pct: 0.25,
    history_end_color: Color32::from_gray(120),

    trend_color: Color32::from_rgb(0, 114, 178),
    weekly_color: Color32::from_rgb(0, 158, 115),
    yearly_color: Color32::from_rgb(213, 94, 0),
    component_line_width: 2.0,
    component_plot_height: 180.0,

    chart_height: 320.0,
    plot_y_padding_pct: 0.05,
    x_axis_mark_target: 8.0,

    color_info: Color32::from_rgb(173, 216, 230), // Light Blue
    color_warning: Color32::from_rgb(255, 215, 0), // Gold/Yellow
    color_error: Color32::from_rgb(255, 80, 80),
    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
    color_widget_border: Color32::from_gray(60),
};
