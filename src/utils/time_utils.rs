use chrono::{Local, NaiveDate, TimeDelta};

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Plot x values count days from this date (1970-01-01).
    pub fn plot_epoch() -> NaiveDate {
        NaiveDate::default()
    }
}

// Time Helper functions

/// Today's calendar date in the local timezone. Only the outermost boundary calls this.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Number of calendar days in `start..=end` (0 when `end` precedes `start`).
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> usize {
    let days = (end - start).num_days() + 1;
    usize::try_from(days).unwrap_or(0)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

/// Days since 1970-01-01, the time base for seasonal terms.
pub fn epoch_days(date: NaiveDate) -> f64 {
    (date - TimeUtils::plot_epoch()).num_days() as f64
}

pub fn date_to_plot_x(date: NaiveDate) -> f64 {
    epoch_days(date)
}

/// Inverse of `date_to_plot_x`, rounding to the nearest day. Used by axis formatters.
pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    let days = x.round() as i64;
    TimeUtils::plot_epoch().checked_add_signed(TimeDelta::try_days(days)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inclusive_day_count() {
        assert_eq!(days_inclusive(ymd(2022, 1, 1), ymd(2022, 1, 10)), 10);
        assert_eq!(days_inclusive(ymd(2022, 1, 1), ymd(2022, 1, 1)), 1);
        assert_eq!(days_inclusive(ymd(2022, 1, 2), ymd(2022, 1, 1)), 0);
    }

    #[test]
    fn plot_x_round_trips_through_dates() {
        let d = ymd(2024, 2, 29);
        assert_eq!(plot_x_to_date(date_to_plot_x(d)), Some(d));
        assert_eq!(plot_x_to_date(date_to_plot_x(d) + 0.4), Some(d));
        assert_eq!(plot_x_to_date(f64::NAN), None);
    }

    #[test]
    fn dates_use_iso_format() {
        assert_eq!(format_date(ymd(2022, 3, 7)), "2022-03-07");
    }
}
