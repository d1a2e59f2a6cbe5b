//! Synthetic data generation settings

use chrono::NaiveDate;

/// Mean daily admissions per category (Poisson lambda).
pub struct CategoryRates {
    pub admissions: f64,
    pub emergency: f64,
    pub ward: f64,
    pub clinic: f64,
}

pub struct GeneratorConfig {
    /// First day of generated history (year, month, day)
    pub start_ymd: (i32, u32, u32),
    pub rates: CategoryRates,
}

pub const GENERATOR: GeneratorConfig = GeneratorConfig {
    start_ymd: (2022, 1, 1),
    rates: CategoryRates {
        admissions: 20.0,
        emergency: 10.0,
        ward: 15.0,
        clinic: 20.0,
    },
};

impl GeneratorConfig {
    pub fn start_date(&self) -> NaiveDate {
        let (y, m, d) = self.start_ymd;
        NaiveDate::from_ymd_opt(y, m, d).expect("generator start date is a valid calendar date")
    }
}
