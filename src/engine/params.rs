use anyhow::{Result, bail};
use chrono::NaiveDate;

use crate::analysis::SeedSource;
use crate::config::GENERATOR;
use crate::domain::{Category, Horizon, Variant};

/// Everything one render depends on. The clock and randomness come in here, never from globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    pub variant: Variant,
    pub category: Category,
    pub horizon: Horizon,
    pub seed: SeedSource,
    pub start_date: NaiveDate,
    pub today: NaiveDate,
}

impl RenderParams {
    pub fn new(variant: Variant, today: NaiveDate) -> Self {
        Self {
            variant,
            category: variant.default_category(),
            horizon: Horizon::default(),
            seed: SeedSource::Entropy,
            start_date: GENERATOR.start_date(),
            today,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_seed(mut self, seed: SeedSource) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.variant.tracks(self.category) {
            bail!(
                "{} is not tracked by the {} dashboard",
                self.category,
                self.variant
            );
        }
        if self.start_date > self.today {
            bail!(
                "start date {} is after today ({})",
                self.start_date,
                self.today
            );
        }
        Ok(())
    }
}
