use anyhow::{Result, anyhow, bail};
use chrono::{Days, NaiveDate};

use crate::domain::{Category, Horizon};
use crate::models::{DailySeries, ForecastRequest, Observation};

/// History dates followed by `horizon.days()` consecutive days after the last one.
pub fn make_future_axis(history: &[Observation], horizon: Horizon) -> Result<Vec<NaiveDate>> {
    let Some(last) = history.last() else {
        bail!("cannot extend an empty history");
    };
    let appended = (1..=u64::from(horizon.days())).map(|offset| {
        last.ds
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| anyhow!("date overflow {} days after {}", offset, last.ds))
    });

    history
        .iter()
        .map(|o| Ok(o.ds))
        .chain(appended)
        .collect()
}

/// Projects `series` onto one category in `(ds, y)` form and builds its prediction axis.
pub fn build_request(
    series: &DailySeries,
    category: Category,
    horizon: Horizon,
) -> Result<ForecastRequest> {
    let Some(counts) = series.counts(category) else {
        bail!(
            "category {} is not tracked (available: {})",
            category,
            series.categories().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
        );
    };
    if series.is_empty() {
        bail!("series has no days to forecast from");
    }

    let history: Vec<Observation> = series
        .dates()
        .iter()
        .zip(counts)
        .map(|(&ds, &count)| Observation {
            ds,
            y: f64::from(count),
        })
        .collect();
    let future = make_future_axis(&history, horizon)?;

    Ok(ForecastRequest {
        category,
        horizon,
        history,
        future,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryColumn;
    use itertools::Itertools;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ward_series() -> DailySeries {
        DailySeries::from_columns(
            ymd(2022, 1, 1),
            vec![
                CategoryColumn {
                    category: Category::Emergency,
                    counts: vec![9, 11, 10, 8, 12],
                },
                CategoryColumn {
                    category: Category::Ward,
                    counts: vec![15, 0, 17, 14, 16],
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn ward_two_years_appends_730_days() {
        let series = ward_series();
        let request = build_request(&series, Category::Ward, Horizon::new(2).unwrap()).unwrap();

        assert_eq!(request.history_len(), 5);
        assert_eq!(request.future_len(), 5 + 730);
        assert_eq!(&request.future[..5], series.dates());

        let appended = request.appended_dates();
        assert_eq!(appended.len(), 730);
        assert_eq!(appended[0], ymd(2022, 1, 6));
        assert!(appended.iter().tuple_windows().all(|(a, b)| a.succ_opt() == Some(*b)));
        assert_eq!(request.last_observed(), Some(ymd(2022, 1, 5)));
    }

    #[test]
    fn projection_back_recovers_series() {
        let series = ward_series();
        let request = build_request(&series, Category::Ward, Horizon::default()).unwrap();
        let expected: Vec<(NaiveDate, u32)> = series
            .dates()
            .iter()
            .copied()
            .zip(series.counts(Category::Ward).unwrap().iter().copied())
            .collect();
        assert_eq!(request.to_counts(), expected);
        assert_eq!(request.appended_dates().len(), 365);
    }

    #[test]
    fn untracked_category_is_rejected() {
        let err = build_request(&ward_series(), Category::Clinic, Horizon::default()).unwrap_err();
        assert!(err.to_string().contains("Clinic"));
    }

    #[test]
    fn empty_history_has_no_axis() {
        assert!(make_future_axis(&[], Horizon::MAX).is_err());
    }

    #[test]
    fn each_horizon_adds_whole_years() {
        let history = [Observation {
            ds: ymd(2023, 12, 31),
            y: 1.0,
        }];
        for horizon in Horizon::all() {
            let axis = make_future_axis(&history, horizon).unwrap();
            assert_eq!(axis.len(), 1 + 365 * horizon.years() as usize);
        }
    }
}
