use {
    crate::config::GENERATOR,
    clap::ValueEnum,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// An admission series tracked by the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
    ValueEnum,
)]
pub enum Category {
    /// All admissions as one series (aggregate dashboard)
    #[default]
    Admissions,
    Emergency,
    Ward,
    Clinic,
}

impl Category {
    /// Mean admissions per day, used as the Poisson rate.
    pub fn mean_rate(self) -> f64 {
        let rates = &GENERATOR.rates;
        match self {
            Self::Admissions => rates.admissions,
            Self::Emergency => rates.emergency,
            Self::Ward => rates.ward,
            Self::Clinic => rates.clinic,
        }
    }
}

/// Which of the two dashboards is running.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, ValueEnum,
)]
pub enum Variant {
    /// One "Admissions" series, no category selector
    #[default]
    #[strum(to_string = "Aggregate")]
    Aggregate,
    /// Emergency / Ward / Clinic with a category selector
    #[strum(to_string = "By category")]
    ByCategory,
}

impl Variant {
    pub fn categories(self) -> &'static [Category] {
        match self {
            Self::Aggregate => &[Category::Admissions],
            Self::ByCategory => &[Category::Emergency, Category::Ward, Category::Clinic],
        }
    }

    pub fn tracks(self, category: Category) -> bool {
        self.categories().contains(&category)
    }

    pub fn default_category(self) -> Category {
        self.categories()[0]
    }

    pub fn has_category_selector(self) -> bool {
        matches!(self, Self::ByCategory)
    }
}
