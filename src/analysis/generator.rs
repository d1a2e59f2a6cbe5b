use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use rand::{SeedableRng, distributions::Distribution, rngs::StdRng};
use serde::{Deserialize, Serialize};
use statrs::distribution::Poisson;

use crate::config::DF;
use crate::domain::Variant;
use crate::models::{CategoryColumn, DailySeries};
use crate::utils::days_inclusive;

/// Where a render's randomness comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeedSource {
    /// Reproducible: same seed, same history
    Fixed(u64),
    /// Fresh OS entropy on every render
    #[default]
    Entropy,
}

impl SeedSource {
    pub fn rng(self) -> StdRng {
        match self {
            SeedSource::Fixed(seed) => StdRng::seed_from_u64(seed),
            SeedSource::Entropy => StdRng::from_entropy(),
        }
    }

    /// Source for a "Regenerate": fixed seeds step forward so the sequence stays reproducible.
    pub fn advance(self) -> Self {
        match self {
            SeedSource::Fixed(seed) => SeedSource::Fixed(seed.wrapping_add(1)),
            SeedSource::Entropy => SeedSource::Entropy,
        }
    }
}

impl From<Option<u64>> for SeedSource {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(SeedSource::Entropy, SeedSource::Fixed)
    }
}

/// Draws one Poisson count per tracked category per calendar day.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticSeriesGenerator {
    start_date: NaiveDate,
    variant: Variant,
}

impl SyntheticSeriesGenerator {
    pub fn new(start_date: NaiveDate, variant: Variant) -> Self {
        Self {
            start_date,
            variant,
        }
    }

    /// History from the start date through `today`, both inclusive.
    pub fn generate(&self, today: NaiveDate, rng: &mut StdRng) -> Result<DailySeries> {
        if self.start_date > today {
            bail!(
                "start date {} is after today ({})",
                self.start_date,
                today
            );
        }
        let days = days_inclusive(self.start_date, today);

        let columns = self
            .variant
            .categories()
            .iter()
            .map(|&category| {
                let rate = category.mean_rate();
                let poisson = Poisson::new(rate)
                    .map_err(|e| anyhow!("invalid rate {} for {}: {}", rate, category, e))?;
                let counts = (0..days)
                    .map(|_| {
                        let draw: f64 = poisson.sample(rng);
                        draw as u32
                    })
                    .collect();
                Ok(CategoryColumn { category, counts })
            })
            .collect::<Result<Vec<_>>>()?;

        let series = DailySeries::from_columns(self.start_date, columns)
            .context("assembling generated series")?;

        if DF.log_render {
            log::info!(
                "Generated {} days x {} categories ({} variant)",
                series.len(),
                self.variant.categories().len(),
                self.variant
            );
        }
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ten_days_inclusive() {
        let generator = SyntheticSeriesGenerator::new(ymd(2022, 1, 1), Variant::Aggregate);
        let series = generator
            .generate(ymd(2022, 1, 10), &mut SeedSource::Fixed(1).rng())
            .unwrap();
        assert_eq!(series.len(), 10);
        assert_eq!(series.start_date(), Some(ymd(2022, 1, 1)));
        assert_eq!(series.end_date(), Some(ymd(2022, 1, 10)));
        assert!(series.is_contiguous());
    }

    #[test]
    fn single_day_when_start_is_today() {
        let day = ymd(2024, 2, 29);
        let series = SyntheticSeriesGenerator::new(day, Variant::ByCategory)
            .generate(day, &mut SeedSource::Fixed(3).rng())
            .unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.rows().count(), 3);
    }

    #[test]
    fn start_after_today_is_an_error() {
        let generator = SyntheticSeriesGenerator::new(ymd(2022, 1, 2), Variant::Aggregate);
        assert!(
            generator
                .generate(ymd(2022, 1, 1), &mut SeedSource::Fixed(1).rng())
                .is_err()
        );
    }

    #[test]
    fn by_category_tracks_three_columns() {
        let series = SyntheticSeriesGenerator::new(ymd(2022, 1, 1), Variant::ByCategory)
            .generate(ymd(2022, 3, 31), &mut SeedSource::Fixed(9).rng())
            .unwrap();
        assert_eq!(
            series.categories().collect::<Vec<_>>(),
            vec![Category::Emergency, Category::Ward, Category::Clinic]
        );
        assert!(series.counts(Category::Admissions).is_none());
        assert_eq!(series.rows().count(), 90 * 3);
    }

    #[test]
    fn aggregate_mean_is_near_twenty() {
        let series = SyntheticSeriesGenerator::new(ymd(2000, 1, 1), Variant::Aggregate)
            .generate(ymd(2009, 12, 31), &mut SeedSource::Fixed(42).rng())
            .unwrap();
        assert_eq!(series.categories().collect::<Vec<_>>(), vec![Category::Admissions]);
        let mean = series.mean(Category::Admissions).unwrap();
        assert!((mean - 20.0).abs() < 0.5, "mean {mean}");
    }

    #[test]
    fn same_seed_same_history() {
        let generator = SyntheticSeriesGenerator::new(ymd(2022, 1, 1), Variant::ByCategory);
        let today = ymd(2022, 6, 30);
        let a = generator.generate(today, &mut SeedSource::Fixed(5).rng()).unwrap();
        let b = generator.generate(today, &mut SeedSource::Fixed(5).rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seed_source_from_option() {
        assert_eq!(SeedSource::from(Some(4)), SeedSource::Fixed(4));
        assert_eq!(SeedSource::from(None), SeedSource::Entropy);
    }

    #[test]
    fn regenerate_steps_fixed_seeds() {
        assert_eq!(SeedSource::Fixed(u64::MAX).advance(), SeedSource::Fixed(0));
        assert_eq!(SeedSource::Fixed(7).advance(), SeedSource::Fixed(8));
        assert_eq!(SeedSource::Entropy.advance(), SeedSource::Entropy);
    }
}
