pub(crate) mod maths_utils;
mod perf;
pub(crate) mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, date_to_plot_x, days_inclusive, epoch_days, format_date, plot_x_to_date,
    today_local,
};

pub(crate) use maths_utils::{mean_and_stddev, min_max, padded_range};
