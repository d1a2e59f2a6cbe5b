use std::sync::LazyLock;

pub struct UiText {
    // --- Controls ---
    pub controls_heading: String,
    pub label_category: String,
    pub label_years: String,
    pub label_regenerate: String,
    pub hover_regenerate: String,
    pub label_seed_fixed: String,
    pub label_seed_entropy: String,
    pub label_variant: String,

    // --- Range slider ---
    pub label_window_from: String,
    pub label_window_to: String,
    pub label_window_reset: String,

    // --- Plot labels ---
    pub plot_x_axis_date: String,
    pub plot_y_axis_count: String,
    pub legend_observed: String,
    pub legend_forecast: String,
    pub legend_interval: String,
    pub component_trend: String,
    pub component_weekly: String,
    pub component_yearly: String,
    pub plot_x_axis_weekday: String,
    pub plot_x_axis_day_of_year: String,

    // --- Tables ---
    pub col_ds: String,
    pub col_yhat: String,
    pub col_yhat_lower: String,
    pub col_yhat_upper: String,
    pub col_trend: String,
    pub col_weekly: String,
    pub col_yearly: String,

    // --- Status ---
    pub cp_rendering: String,
    pub error_render_failed: String,
    pub error_retry_hint: String,
    pub component_disabled: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    controls_heading: "Controls".to_string(),
    label_category: "Category".to_string(),
    label_years: "Years of prediction:".to_string(),
    label_regenerate: "Regenerate".to_string(),
    hover_regenerate: "Draw a fresh synthetic history and refit".to_string(),
    label_seed_fixed: "Seed".to_string(),
    label_seed_entropy: "random".to_string(),
    label_variant: "Dashboard".to_string(),

    label_window_from: "From".to_string(),
    label_window_to: "To".to_string(),
    label_window_reset: "All".to_string(),

    plot_x_axis_date: "Date".to_string(),
    plot_y_axis_count: "Admissions".to_string(),
    legend_observed: "Observed".to_string(),
    legend_forecast: "Forecast".to_string(),
    legend_interval: "Uncertainty interval".to_string(),
    component_trend: "trend".to_string(),
    component_weekly: "weekly".to_string(),
    component_yearly: "yearly".to_string(),
    plot_x_axis_weekday: "Day of week".to_string(),
    plot_x_axis_day_of_year: "Day of year".to_string(),

    col_ds: "ds".to_string(),
    col_yhat: "yhat".to_string(),
    col_yhat_lower: "yhat_lower".to_string(),
    col_yhat_upper: "yhat_upper".to_string(),
    col_trend: "trend".to_string(),
    col_weekly: "weekly".to_string(),
    col_yearly: "yearly".to_string(),

    cp_rendering: "Fitting forecast...".to_string(),
    error_render_failed: "Render failed".to_string(),
    error_retry_hint: "Change a control or press Regenerate to try again.".to_string(),
    component_disabled: "not fitted (history too short)".to_string(),
});
