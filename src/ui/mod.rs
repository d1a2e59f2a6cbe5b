mod controls;
mod plot_layers;
mod range_window;
mod styles;
mod tables;
mod ui_config;
mod ui_plot_view;
mod ui_text;

pub(crate) use controls::{ControlAction, render_controls};
pub(crate) use range_window::RangeWindow;
pub(crate) use styles::{
    UiStyleExt, apply_opacity, colored_heading, colored_subsection_heading, get_effect_color,
};
pub(crate) use tables::{forecast_tail_table, raw_tail_table};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_plot_view::PlotView;
