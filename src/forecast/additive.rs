use chrono::{Datelike, Days, NaiveDate, Weekday};
use ndarray::{Array1, Array2, ArrayView1, s};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::config::{DF, FORECAST, ForecastConfig, SeasonalitySettings};
use crate::models::{Decomposition, ForecastResult, ForecastRow, Observation};
use crate::utils::{TimeUtils, epoch_days};

use super::fourier::push_fourier_terms;
use super::linalg::solve_ridge;
use super::{ForecastEngine, ForecastError};

/// Floor for the pilot noise variance so a noise-free history still gets a (tiny) prior.
const MIN_NOISE_VAR: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeasonKind {
    Weekly,
    Yearly,
}

#[derive(Debug, Clone)]
struct FittedSeasonality {
    kind: SeasonKind,
    settings: SeasonalitySettings,
    beta: Array1<f64>,
}

impl FittedSeasonality {
    fn effect(&self, date: NaiveDate, buf: &mut Vec<f64>) -> f64 {
        buf.clear();
        push_fourier_terms(
            buf,
            epoch_days(date),
            self.settings.period_days,
            self.settings.fourier_order,
        );
        ArrayView1::from(buf.as_slice()).dot(&self.beta)
    }
}

/// Parameters in scaled units: t in [0, 1] over history, y divided by `y_scale`.
#[derive(Debug, Clone)]
struct FittedState {
    start: NaiveDate,
    end: NaiveDate,
    span_days: f64,
    y_scale: f64,
    changepoints: Vec<f64>,
    k: f64,
    m: f64,
    deltas: Vec<f64>,
    seasonalities: Vec<FittedSeasonality>,
    sigma_obs: f64,
}

impl FittedState {
    fn t(&self, date: NaiveDate) -> f64 {
        (date - self.start).num_days() as f64 / self.span_days
    }

    fn trend(&self, t: f64) -> f64 {
        self.changepoints
            .iter()
            .zip(&self.deltas)
            .filter(|(s, _)| t > **s)
            .fold(self.m + self.k * t, |acc, (s, d)| acc + d * (t - s))
    }

    /// Variance added by future trend changes: changes arrive at the historical
    /// changepoint rate with Laplace magnitudes of the mean fitted |delta|.
    fn trend_variance(&self, t: f64) -> f64 {
        if t <= 1.0 || self.deltas.is_empty() {
            return 0.0;
        }
        let rate = self.changepoints.len() as f64;
        let b = self.deltas.iter().map(|d| d.abs()).sum::<f64>() / self.deltas.len() as f64;
        let ahead = t - 1.0;
        2.0 * rate * b * b * ahead.powi(3) / 3.0
    }

    fn season(&self, kind: SeasonKind) -> Option<&FittedSeasonality> {
        self.seasonalities.iter().find(|s| s.kind == kind)
    }

    fn season_effect(&self, kind: SeasonKind, date: NaiveDate, buf: &mut Vec<f64>) -> f64 {
        self.season(kind).map_or(0.0, |s| s.effect(date, buf))
    }
}

/// Additive model `y = trend(t) + weekly(t) + yearly(t) + noise`.
///
/// The trend is piecewise linear with evenly spaced candidate changepoints whose
/// slope changes are shrunk towards zero; seasonalities are Fourier series. All
/// coefficients come from one ridge-regularised least-squares solve, with prior
/// strengths scaled by the noise level of a changepoint-free pilot fit.
#[derive(Debug, Clone)]
pub struct AdditiveModel {
    config: ForecastConfig,
    fitted: Option<FittedState>,
}

impl Default for AdditiveModel {
    fn default() -> Self {
        Self::new(FORECAST)
    }
}

impl AdditiveModel {
    pub fn new(config: ForecastConfig) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Standard normal quantile for the configured central interval.
    fn interval_z(&self) -> Result<f64, ForecastError> {
        let width = self.config.interval_width;
        if !(width > 0.0 && width < 1.0) {
            return Err(ForecastError::InvalidConfig(format!(
                "interval width {} must lie strictly between 0 and 1",
                width
            )));
        }
        let normal =
            Normal::new(0.0, 1.0).map_err(|e| ForecastError::InvalidConfig(e.to_string()))?;
        Ok(normal.inverse_cdf(0.5 + width / 2.0))
    }

    fn changepoint_range(&self) -> Result<f64, ForecastError> {
        let range = self.config.changepoint_range;
        if !(range > 0.0 && range <= 1.0) {
            return Err(ForecastError::InvalidConfig(format!(
                "changepoint range {} must lie in (0, 1]",
                range
            )));
        }
        Ok(range)
    }

    fn enabled_seasons(&self, span_days: i64) -> Vec<(SeasonKind, SeasonalitySettings)> {
        [
            (SeasonKind::Weekly, self.config.weekly),
            (SeasonKind::Yearly, self.config.yearly),
        ]
        .into_iter()
        .filter(|(_, s)| s.fourier_order > 0 && span_days >= s.min_history_days)
        .collect()
    }

    fn penalties(
        &self,
        n_changepoints: usize,
        seasons: &[(SeasonKind, SeasonalitySettings)],
        noise_var: f64,
    ) -> Vec<f64> {
        let cp_scale = self.config.changepoint_prior_scale;
        let season_scale = self.config.seasonality_prior_scale;
        // Gaussian stand-in with the variance of a Laplace(scale) prior
        let cp_penalty = noise_var / (2.0 * cp_scale * cp_scale);
        let season_penalty = noise_var / (2.0 * season_scale * season_scale);

        let mut penalties = vec![self.config.trend_ridge, self.config.trend_ridge];
        penalties.extend(std::iter::repeat_n(cp_penalty, n_changepoints));
        for (_, s) in seasons {
            penalties.extend(std::iter::repeat_n(season_penalty, 2 * s.fourier_order));
        }
        penalties
    }
}

/// Evenly spaced over the leading `range` fraction of history, first point excluded.
fn changepoint_positions(t: &[f64], n_changepoints: usize, range: f64) -> Vec<f64> {
    let hist_size = (t.len() as f64 * range).floor() as usize;
    let n = n_changepoints.min(hist_size.saturating_sub(1));
    if n == 0 {
        return Vec::new();
    }
    let last = (hist_size - 1) as f64;
    (1..=n)
        .map(|i| {
            let idx = (i as f64 * last / n as f64).round() as usize;
            t[idx]
        })
        .collect()
}

fn design_row(
    row: &mut Vec<f64>,
    t: f64,
    date: NaiveDate,
    changepoints: &[f64],
    seasons: &[(SeasonKind, SeasonalitySettings)],
) {
    row.clear();
    row.push(1.0);
    row.push(t);
    row.extend(changepoints.iter().map(|s| (t - s).max(0.0)));
    for (_, s) in seasons {
        push_fourier_terms(row, epoch_days(date), s.period_days, s.fourier_order);
    }
}

struct Solution {
    beta: Array1<f64>,
    residual_var: f64,
}

fn solve(
    history: &[Observation],
    t: &[f64],
    y: &[f64],
    changepoints: &[f64],
    seasons: &[(SeasonKind, SeasonalitySettings)],
    penalties: &[f64],
) -> Result<Solution, ForecastError> {
    let cols = penalties.len();
    let mut x = Array2::zeros((history.len(), cols));
    let mut row = Vec::with_capacity(cols);
    for ((obs, &ti), mut dest) in history.iter().zip(t).zip(x.rows_mut()) {
        design_row(&mut row, ti, obs.ds, changepoints, seasons);
        dest.assign(&ArrayView1::from(row.as_slice()));
    }

    let y = ArrayView1::from(y);
    let beta = solve_ridge(x.view(), y, penalties)?;
    let residuals = &y - &x.dot(&beta);

    Ok(Solution {
        residual_var: residuals.dot(&residuals) / y.len() as f64,
        beta,
    })
}

impl ForecastEngine for AdditiveModel {
    fn fit(&mut self, history: &[Observation]) -> Result<(), ForecastError> {
        self.fitted = None;

        let (first, last) = match history {
            [first, .., last] => (first, last),
            _ => return Err(ForecastError::TooFewObservations(history.len())),
        };
        if !history.windows(2).all(|w| w[0].ds < w[1].ds) {
            return Err(ForecastError::UnsortedHistory);
        }

        let span = (last.ds - first.ds).num_days();
        let span_days = span as f64;
        let y_max = history.iter().map(|o| o.y.abs()).fold(0.0, f64::max);
        let y_scale = if y_max > 0.0 { y_max } else { 1.0 };

        let t: Vec<f64> = history
            .iter()
            .map(|o| (o.ds - first.ds).num_days() as f64 / span_days)
            .collect();
        let y: Vec<f64> = history.iter().map(|o| o.y / y_scale).collect();

        let changepoints =
            changepoint_positions(&t, self.config.n_changepoints, self.changepoint_range()?);
        let seasons = self.enabled_seasons(span);

        // Pilot: straight trend + seasonality, to learn the noise level
        let pilot = solve(
            history,
            &t,
            &y,
            &[],
            &seasons,
            &self.penalties(0, &seasons, 1.0),
        )?;
        let noise_var = pilot.residual_var.max(MIN_NOISE_VAR);

        let full = solve(
            history,
            &t,
            &y,
            &changepoints,
            &seasons,
            &self.penalties(changepoints.len(), &seasons, noise_var),
        )?;

        let beta = full.beta;
        let n_cp = changepoints.len();
        let deltas = beta.slice(s![2..2 + n_cp]).to_vec();
        let mut offset = 2 + n_cp;
        let seasonalities = seasons
            .iter()
            .map(|&(kind, settings)| {
                let width = 2 * settings.fourier_order;
                let fitted = FittedSeasonality {
                    kind,
                    settings,
                    beta: beta.slice(s![offset..offset + width]).to_owned(),
                };
                offset += width;
                fitted
            })
            .collect::<Vec<_>>();

        let state = FittedState {
            start: first.ds,
            end: last.ds,
            span_days,
            y_scale,
            changepoints,
            k: beta[1],
            m: beta[0],
            deltas,
            seasonalities,
            sigma_obs: full.residual_var.sqrt(),
        };

        if DF.log_forecast_fit {
            log::info!(
                "Fitted {} days: k={:.4} m={:.4} changepoints={} seasons={:?} sigma={:.4} (scale {:.1})",
                history.len(),
                state.k,
                state.m,
                state.changepoints.len(),
                state.seasonalities.iter().map(|s| s.kind).collect::<Vec<_>>(),
                state.sigma_obs,
                state.y_scale
            );
        }

        self.fitted = Some(state);
        Ok(())
    }

    fn predict(&self, axis: &[NaiveDate]) -> Result<ForecastResult, ForecastError> {
        let state = self.fitted.as_ref().ok_or(ForecastError::NotFitted)?;
        if axis.is_empty() {
            return Err(ForecastError::EmptyAxis);
        }
        let z = self.interval_z()?;
        let ys = state.y_scale;
        let mut buf = Vec::new();

        let rows: Vec<ForecastRow> = axis
            .iter()
            .map(|&ds| {
                let t = state.t(ds);
                let trend = state.trend(t);
                let weekly = state.season_effect(SeasonKind::Weekly, ds, &mut buf);
                let yearly = state.season_effect(SeasonKind::Yearly, ds, &mut buf);
                let yhat = trend + weekly + yearly;
                let margin = z * (state.sigma_obs.powi(2) + state.trend_variance(t)).sqrt();
                ForecastRow {
                    ds,
                    trend: trend * ys,
                    yhat_lower: (yhat - margin) * ys,
                    yhat_upper: (yhat + margin) * ys,
                    weekly: weekly * ys,
                    yearly: yearly * ys,
                    yhat: yhat * ys,
                }
            })
            .collect();

        let history_len = axis.iter().take_while(|d| **d <= state.end).count();

        // 1970-01-05 was a Monday; 1970 is not a leap year
        let epoch = TimeUtils::plot_epoch();
        let weekly = state.season(SeasonKind::Weekly).map(|s| {
            (0..7)
                .map(|i| {
                    let d = epoch + Days::new(4 + i);
                    (d.weekday(), s.effect(d, &mut buf) * ys)
                })
                .collect::<Vec<(Weekday, f64)>>()
        });
        let yearly = state.season(SeasonKind::Yearly).map(|s| {
            (0..365)
                .map(|i| {
                    let d = epoch + Days::new(i);
                    (d.ordinal(), s.effect(d, &mut buf) * ys)
                })
                .collect::<Vec<(u32, f64)>>()
        });

        let decomposition = Decomposition {
            trend: rows.iter().map(|r| (r.ds, r.trend)).collect(),
            weekly,
            yearly,
        };

        Ok(ForecastResult {
            rows,
            history_len,
            decomposition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, distributions::Distribution, rngs::StdRng};
    use statrs::distribution::Poisson;
    use std::f64::consts::PI;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn history_from(start: NaiveDate, ys: impl IntoIterator<Item = f64>) -> Vec<Observation> {
        ys.into_iter()
            .enumerate()
            .map(|(i, y)| Observation {
                ds: start + Days::new(i as u64),
                y,
            })
            .collect()
    }

    fn axis(start: NaiveDate, len: u64) -> Vec<NaiveDate> {
        (0..len).map(|i| start + Days::new(i)).collect()
    }

    #[test]
    fn rejects_fewer_than_two_observations() {
        let mut model = AdditiveModel::default();
        let one = history_from(ymd(2022, 1, 1), [3.0]);
        assert_eq!(model.fit(&one), Err(ForecastError::TooFewObservations(1)));
        assert_eq!(model.fit(&[]), Err(ForecastError::TooFewObservations(0)));
        assert!(!model.is_fitted());
    }

    #[test]
    fn rejects_unsorted_history() {
        let mut model = AdditiveModel::default();
        let mut h = history_from(ymd(2022, 1, 1), [1.0, 2.0, 3.0]);
        h.swap(0, 2);
        assert_eq!(model.fit(&h), Err(ForecastError::UnsortedHistory));
    }

    #[test]
    fn predict_requires_fit_and_axis() {
        let mut model = AdditiveModel::default();
        assert_eq!(
            model.predict(&[ymd(2022, 1, 1)]).unwrap_err(),
            ForecastError::NotFitted
        );
        model
            .fit(&history_from(ymd(2022, 1, 1), [1.0, 2.0, 3.0]))
            .unwrap();
        assert_eq!(model.predict(&[]).unwrap_err(), ForecastError::EmptyAxis);
    }

    #[test]
    fn two_points_are_enough() {
        let mut model = AdditiveModel::default();
        let start = ymd(2022, 1, 1);
        model.fit(&history_from(start, [4.0, 6.0])).unwrap();
        let result = model.predict(&axis(start, 3)).unwrap();
        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.history_len, 2);
        assert!(result.decomposition.weekly.is_none());
        assert!((result.rows[2].yhat - 8.0).abs() < 1e-3);
    }

    #[test]
    fn extrapolates_a_clean_linear_trend() {
        let start = ymd(2022, 1, 1);
        let history = history_from(start, (0..60).map(|i| 10.0 + 0.5 * i as f64));
        let mut model = AdditiveModel::default();
        model.fit(&history).unwrap();

        let result = model.predict(&axis(start, 90)).unwrap();
        assert_eq!(result.history_len, 60);
        assert_eq!(result.future().len(), 30);
        for (i, row) in result.rows.iter().enumerate() {
            let expected = 10.0 + 0.5 * i as f64;
            assert!(
                (row.yhat - expected).abs() < 0.05,
                "day {i}: {} vs {expected}",
                row.yhat
            );
            assert!(row.yhat_lower <= row.yhat && row.yhat <= row.yhat_upper);
        }
    }

    #[test]
    fn recovers_weekly_cycle() {
        let start = ymd(2023, 3, 6);
        let history = history_from(
            start,
            (0..56).map(|i| {
                let d = start + Days::new(i);
                20.0 + 5.0 * (2.0 * PI * epoch_days(d) / 7.0).sin()
            }),
        );
        let mut model = AdditiveModel::default();
        model.fit(&history).unwrap();
        let result = model.predict(&axis(start, 56)).unwrap();

        let weekly = result.decomposition.weekly.expect("weekly fitted");
        assert_eq!(weekly.len(), 7);
        assert_eq!(weekly[0].0, Weekday::Mon);
        assert_eq!(weekly[6].0, Weekday::Sun);
        let max = weekly.iter().map(|w| w.1).fold(f64::MIN, f64::max);
        let min = weekly.iter().map(|w| w.1).fold(f64::MAX, f64::min);
        assert!((max - min - 2.0 * 5.0 * (3.0 * PI / 7.0).sin()).abs() < 0.2);
        assert!(result.decomposition.yearly.is_none());
    }

    #[test]
    fn poisson_noise_gives_widening_bounds() {
        let start = ymd(2022, 1, 1);
        let poisson = Poisson::new(20.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let history = history_from(
            start,
            (0..800).map(|_| Distribution::<f64>::sample(&poisson, &mut rng)),
        );
        let mut model = AdditiveModel::default();
        model.fit(&history).unwrap();
        let result = model.predict(&axis(start, 800 + 365)).unwrap();

        assert!(result.decomposition.yearly.is_some());
        assert_eq!(result.decomposition.yearly.as_ref().unwrap().len(), 365);
        for row in &result.rows {
            assert!(row.yhat_lower <= row.yhat && row.yhat <= row.yhat_upper);
        }
        let last_hist = result.history().last().unwrap();
        let last = result.rows.last().unwrap();
        assert!(
            last.yhat_upper - last.yhat_lower >= last_hist.yhat_upper - last_hist.yhat_lower
        );
        let future_mean =
            result.future().iter().map(|r| r.yhat).sum::<f64>() / result.future().len() as f64;
        assert!((12.0..28.0).contains(&future_mean), "mean {future_mean}");
    }

    #[test]
    fn invalid_interval_width_is_reported() {
        let config = ForecastConfig {
            interval_width: 1.5,
            ..FORECAST
        };
        let mut model = AdditiveModel::new(config);
        let start = ymd(2022, 1, 1);
        model.fit(&history_from(start, [1.0, 2.0, 3.0])).unwrap();
        assert!(matches!(
            model.predict(&axis(start, 3)),
            Err(ForecastError::InvalidConfig(_))
        ));
    }

    #[test]
    fn changepoint_range_above_one_is_rejected() {
        let config = ForecastConfig {
            changepoint_range: 1.5,
            ..FORECAST
        };
        let mut model = AdditiveModel::new(config);
        let start = ymd(2022, 1, 1);
        let history = history_from(start, (0..60).map(|i| i as f64));
        assert!(matches!(
            model.fit(&history),
            Err(ForecastError::InvalidConfig(_))
        ));
        assert!(!model.is_fitted());
    }

    #[test]
    fn changepoints_stay_in_leading_range() {
        let t: Vec<f64> = (0..100).map(|i| i as f64 / 99.0).collect();
        let cps = changepoint_positions(&t, 25, 0.8);
        assert_eq!(cps.len(), 25);
        assert!(cps.iter().all(|&c| c > 0.0 && c <= t[79]));
        assert!(cps.windows(2).all(|w| w[0] < w[1]));

        let short: Vec<f64> = (0..5).map(|i| i as f64 / 4.0).collect();
        assert_eq!(changepoint_positions(&short, 25, 0.8).len(), 3);
        assert!(changepoint_positions(&short[..2], 25, 0.8).is_empty());
    }

    #[test]
    fn ten_percent_quantile_for_default_width() {
        let z = AdditiveModel::default().interval_z().unwrap();
        assert!((z - 1.2816).abs() < 1e-3);
    }
}
