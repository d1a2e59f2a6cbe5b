use anyhow::{Result, bail};
use chrono::{Days, NaiveDate};
use itertools::Itertools;
use serde::Serialize;

use crate::domain::Category;

// ============================================================================
// DailySeries: one count per tracked category per calendar day
// ============================================================================

/// Long-format row: one category on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub category: Category,
    pub count: u32,
}

/// Wide-format row: all tracked categories on one day, in `DailySeries::categories()` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRow {
    pub date: NaiveDate,
    pub counts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryColumn {
    pub category: Category,
    pub counts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySeries {
    dates: Vec<NaiveDate>,
    columns: Vec<CategoryColumn>,
}

impl DailySeries {
    /// Builds the date axis from `start_date` and checks every column covers it exactly.
    pub fn from_columns(start_date: NaiveDate, columns: Vec<CategoryColumn>) -> Result<Self> {
        let Some(first) = columns.first() else {
            bail!("a daily series needs at least one category column");
        };
        let len = first.counts.len();

        if let Some(bad) = columns.iter().find(|c| c.counts.len() != len) {
            bail!(
                "column {} has {} days but {} has {}",
                bad.category,
                bad.counts.len(),
                first.category,
                len
            );
        }
        if let Some((a, _)) = columns
            .iter()
            .map(|c| c.category)
            .tuple_combinations()
            .find(|(a, b)| a == b)
        {
            bail!("category {} appears twice", a);
        }

        let dates = (0..len as u64)
            .map(|offset| {
                start_date
                    .checked_add_days(Days::new(offset))
                    .ok_or_else(|| anyhow::anyhow!("date overflow {} days after {}", offset, start_date))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { dates, columns })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.columns.iter().map(|c| c.category)
    }

    pub fn counts(&self, category: Category) -> Option<&[u32]> {
        self.columns
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.counts.as_slice())
    }

    /// Every (date, category, count) triple, date-major.
    pub fn rows(&self) -> impl Iterator<Item = DailyRecord> + '_ {
        self.dates.iter().enumerate().flat_map(move |(i, &date)| {
            self.columns.iter().map(move |col| DailyRecord {
                date,
                category: col.category,
                count: col.counts[i],
            })
        })
    }

    /// The last `n` days in wide format.
    pub fn tail(&self, n: usize) -> Vec<DayRow> {
        let start = self.len().saturating_sub(n);
        (start..self.len())
            .map(|i| DayRow {
                date: self.dates[i],
                counts: self.columns.iter().map(|c| c.counts[i]).collect(),
            })
            .collect()
    }

    /// True when each date is exactly one day after its predecessor.
    pub fn is_contiguous(&self) -> bool {
        self.dates
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.succ_opt() == Some(*b))
    }

    pub fn mean(&self, category: Category) -> Option<f64> {
        let counts = self.counts(category)?;
        if counts.is_empty() {
            return None;
        }
        let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
        Some(total as f64 / counts.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_column_series() -> DailySeries {
        DailySeries::from_columns(
            ymd(2023, 12, 30),
            vec![
                CategoryColumn {
                    category: Category::Emergency,
                    counts: vec![1, 2, 3, 4],
                },
                CategoryColumn {
                    category: Category::Ward,
                    counts: vec![10, 20, 30, 40],
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn dates_cross_year_boundary_without_gaps() {
        let series = two_column_series();
        assert_eq!(series.len(), 4);
        assert_eq!(series.start_date(), Some(ymd(2023, 12, 30)));
        assert_eq!(series.end_date(), Some(ymd(2024, 1, 2)));
        assert!(series.is_contiguous());
    }

    #[test]
    fn rows_are_date_major_long_format() {
        let series = two_column_series();
        let rows: Vec<DailyRecord> = series.rows().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(
            rows[1],
            DailyRecord {
                date: ymd(2023, 12, 30),
                category: Category::Ward,
                count: 10
            }
        );
        assert_eq!(rows[7].count, 40);
    }

    #[test]
    fn tail_keeps_last_days_in_column_order() {
        let series = two_column_series();
        let tail = series.tail(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].date, ymd(2024, 1, 1));
        assert_eq!(tail[1].counts, vec![4, 40]);
        assert_eq!(series.tail(100).len(), 4);
    }

    #[test]
    fn mismatched_column_lengths_are_rejected() {
        let err = DailySeries::from_columns(
            ymd(2022, 1, 1),
            vec![
                CategoryColumn {
                    category: Category::Emergency,
                    counts: vec![1, 2],
                },
                CategoryColumn {
                    category: Category::Clinic,
                    counts: vec![1],
                },
            ],
        );
        assert!(err.is_err());
    }

    #[test]
    fn duplicate_and_missing_columns_are_rejected() {
        assert!(DailySeries::from_columns(ymd(2022, 1, 1), vec![]).is_err());
        let dup = DailySeries::from_columns(
            ymd(2022, 1, 1),
            vec![
                CategoryColumn {
                    category: Category::Ward,
                    counts: vec![1],
                },
                CategoryColumn {
                    category: Category::Ward,
                    counts: vec![2],
                },
            ],
        );
        assert!(dup.is_err());
    }

    #[test]
    fn mean_and_lookup_by_category() {
        let series = two_column_series();
        assert_eq!(series.mean(Category::Ward), Some(25.0));
        assert_eq!(series.counts(Category::Clinic), None);
        assert_eq!(
            series.categories().collect::<Vec<_>>(),
            vec![Category::Emergency, Category::Ward]
        );
    }
}
