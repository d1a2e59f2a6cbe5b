use {
    crate::config::constants::{
        DAYS_PER_YEAR, DEFAULT_HORIZON_YEARS, MAX_HORIZON_YEARS, MIN_HORIZON_YEARS,
    },
    serde::{Deserialize, Serialize},
    std::{error::Error, fmt},
};

/// Forecast horizon in whole years, bounded to what the slider offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Horizon(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizonError(pub u8);

impl fmt::Display for HorizonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "horizon of {} years is outside {}..={}",
            self.0, MIN_HORIZON_YEARS, MAX_HORIZON_YEARS
        )
    }
}

impl Error for HorizonError {}

impl Horizon {
    pub const MIN: Self = Self(MIN_HORIZON_YEARS);
    pub const MAX: Self = Self(MAX_HORIZON_YEARS);

    pub fn new(years: u8) -> Result<Self, HorizonError> {
        if (MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&years) {
            Ok(Self(years))
        } else {
            Err(HorizonError(years))
        }
    }

    pub fn years(self) -> u8 {
        self.0
    }

    /// Future days appended to the history axis.
    pub fn days(self) -> u32 {
        u32::from(self.0) * DAYS_PER_YEAR
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).map(Self)
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self(DEFAULT_HORIZON_YEARS)
    }
}

impl TryFrom<u8> for Horizon {
    type Error = HorizonError;

    fn try_from(years: u8) -> Result<Self, Self::Error> {
        Self::new(years)
    }
}

impl From<Horizon> for u8 {
    fn from(h: Horizon) -> Self {
        h.0
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 year")
        } else {
            write!(f, "{} years", self.0)
        }
    }
}
